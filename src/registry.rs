use std::{collections::BTreeMap, fmt};

use crate::{Help, Result, Signature};

/// Everything the [`crate::Shell`] needs to know about command targets.
pub trait Reflector {
    fn has_class(&self, class: &str) -> bool;

    /// A fresh signature for `method` of `class`.
    fn signature(&self, class: &str, method: &str) -> Result<Signature>;

    fn help(&self, class: &str) -> Option<&Help>;

    /// All known classes, sorted.
    fn classes(&self) -> Vec<String>;
}

type Factory = Box<dyn Fn() -> Result<Signature> + Send + Sync>;

/// A command target: its help and a signature factory per entry point.
#[derive(Default)]
pub struct Target {
    help: Option<Help>,
    methods: BTreeMap<String, Factory>,
}

impl Target {
    pub fn new() -> Target {
        Target::default()
    }

    pub fn help(mut self, help: Help) -> Target {
        self.help = Some(help);
        self
    }

    /// Registers entry point `name`. The factory runs once per resolution.
    pub fn method<F>(mut self, name: &str, factory: F) -> Target
    where
        F: Fn() -> Result<Signature> + Send + Sync + 'static,
    {
        self.methods.insert(name.to_string(), Box::new(factory));
        self
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("help", &self.help)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Named command targets, filled in at startup.
#[derive(Debug, Default)]
pub struct Registry {
    targets: BTreeMap<String, Target>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Adds `target` under `class`, replacing any earlier registration.
    pub fn register(mut self, class: &str, target: Target) -> Registry {
        self.targets.insert(class.to_string(), target);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Reflector for Registry {
    fn has_class(&self, class: &str) -> bool {
        self.targets.contains_key(class)
    }

    fn signature(&self, class: &str, method: &str) -> Result<Signature> {
        let target = match self.targets.get(class) {
            Some(it) => it,
            None => bail!(ClassNotFound, "Class {class} is not registered."),
        };
        match target.methods.get(method) {
            Some(factory) => factory(),
            None => bail!(MethodNotFound, "Class {class} has no method '{method}'."),
        }
    }

    fn help(&self, class: &str) -> Option<&Help> {
        self.targets.get(class).and_then(|it| it.help.as_ref())
    }

    fn classes(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }
}
