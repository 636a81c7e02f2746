use heck::ToKebabCase;
use tracing::debug;

use crate::{
    help::{self, Manual, Roster},
    Argument, Error, ErrorKind, Reflector, Registry, Result, Value,
};

/// How command names map to classes, and which entry point to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix of every class, e.g. `app::command`.
    pub namespace: String,
    /// Entry point looked up on the resolved class.
    pub method: String,
    /// Appended to every class, e.g. `Command`.
    pub suffix: String,
    /// Printed above manual and roster output.
    pub header: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            namespace: String::new(),
            method: "run".to_string(),
            suffix: String::new(),
            header: String::new(),
        }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    pub fn namespace(mut self, namespace: &str) -> Config {
        self.namespace = namespace.trim_end_matches(':').to_string();
        self
    }

    pub fn method(mut self, method: &str) -> Config {
        self.method = method.to_string();
        self
    }

    pub fn suffix(mut self, suffix: &str) -> Config {
        self.suffix = suffix.to_string();
        self
    }

    pub fn header(mut self, header: &str) -> Config {
        self.header = header.to_string();
        self
    }

    /// `foo-bar:baz` → `{namespace}::FooBar::Baz{suffix}`.
    ///
    /// Each `-` separated word gets its first letter uppercased, the rest of
    /// it is kept as is: `http-get` → `HttpGet`, `HTTP-get` → `HTTPGet`.
    pub fn class_name(&self, command: &str) -> String {
        let ident = command.split(':').map(class_segment).collect::<Vec<_>>().join("::");
        let mut class = match self.prefix() {
            "" => ident,
            prefix => format!("{prefix}::{ident}"),
        };
        class.push_str(&self.suffix);
        class
    }

    /// The inverse of [`Config::class_name`]; `None` for classes outside the
    /// namespace, without the suffix, or with no command mapping onto them.
    pub fn command_name(&self, class: &str) -> Option<String> {
        let mut ident = class.strip_suffix(self.suffix.as_str())?;
        if !self.prefix().is_empty() {
            ident = ident.strip_prefix(self.prefix())?.strip_prefix("::")?;
        }
        if ident.is_empty() {
            return None;
        }
        let command = ident.split("::").map(command_segment).collect::<Vec<_>>().join(":");
        if self.class_name(&command) != class {
            return None;
        }
        Some(command)
    }

    fn prefix(&self) -> &str {
        self.namespace.trim_end_matches(':')
    }
}

fn class_segment(segment: &str) -> String {
    segment.split('-').map(upper_first).collect()
}

/// `FooBar` → `foo-bar`; segments that kebab case cannot restore, like
/// `HTTPGet`, are kept verbatim.
fn command_segment(segment: &str) -> String {
    let kebab = segment.to_kebab_case();
    if class_segment(&kebab) == segment {
        kebab
    } else {
        segment.to_string()
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The outcome of resolving one command line.
#[derive(Debug)]
pub struct Exec {
    class: Option<String>,
    method: String,
    arguments: Vec<Argument>,
    error: Option<Error>,
}

impl Exec {
    /// The resolved target, `None` if the command name did not resolve.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn into_arguments(self) -> Vec<Argument> {
        self.arguments
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(Error::kind)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// `0` on success, `1` when an error was captured.
    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }
}

/// Resolves command lines against the targets known to a [`Reflector`].
#[derive(Debug)]
pub struct Shell<R = Registry> {
    config: Config,
    reflector: R,
}

impl<R: Reflector> Shell<R> {
    pub fn new(config: Config, reflector: R) -> Shell<R> {
        Shell { config, reflector }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reflector(&self) -> &R {
        &self.reflector
    }

    /// Maps `tokens` (without the program name) to an [`Exec`].
    ///
    /// Never fails: errors end up in [`Exec::error`].
    pub fn resolve<I>(&self, tokens: I) -> Exec
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect::<Vec<String>>();
        match self.new_help(&tokens) {
            Some(exec) => exec,
            None => self.new_exec(tokens),
        }
    }

    fn new_help(&self, tokens: &[String]) -> Option<Exec> {
        let rest = match tokens.split_first() {
            None => &[][..],
            Some((first, rest)) if first.eq_ignore_ascii_case("help") => rest,
            Some(_) => return None,
        };

        let exec = match rest.first() {
            None => Exec {
                class: Some(help::ROSTER.to_string()),
                method: self.config.method.clone(),
                arguments: Vec::new(),
                error: None,
            },
            Some(command) => {
                let class = self.class_for(command).map(Value::Str).unwrap_or(Value::Null);
                Exec {
                    class: Some(help::MANUAL.to_string()),
                    method: self.config.method.clone(),
                    arguments: vec![
                        Argument::Value(Value::Str(command.clone())),
                        Argument::Value(class),
                        Argument::Value(Value::Str(self.config.method.clone())),
                    ],
                    error: None,
                }
            }
        };
        debug!(class = ?exec.class, "help requested");
        Some(exec)
    }

    fn new_exec(&self, tokens: Vec<String>) -> Exec {
        let mut tokens = tokens.into_iter();
        let command = tokens.next().unwrap_or_default();
        let method = self.config.method.clone();

        let class = match self.class_for(&command) {
            Ok(it) => it,
            Err(err) => {
                debug!(%command, error = %err, "command not resolved");
                return Exec { class: None, method, arguments: Vec::new(), error: Some(err) };
            }
        };

        let res = self
            .reflector
            .signature(&class, &method)
            .and_then(|signature| signature.parse(tokens.collect()));
        match res {
            Ok(arguments) => {
                debug!(%command, %class, arguments = arguments.len(), "command resolved");
                Exec { class: Some(class), method, arguments, error: None }
            }
            Err(err) => {
                debug!(%command, %class, error = %err, "command rejected");
                Exec { class: Some(class), method, arguments: Vec::new(), error: Some(err) }
            }
        }
    }

    /// The registered class for `command`.
    pub fn class_for(&self, command: &str) -> Result<String> {
        let class = self.config.class_name(command);
        if !self.reflector.has_class(&class) {
            bail!(ClassNotFound, "Command '{command}' not found (looked for {class}).")
        }
        Ok(class)
    }

    /// The manual page for `command`, below the configured header.
    pub fn manual(&self, command: &str) -> Result<String> {
        let class = self.class_for(command)?;
        let page = Manual::new(&self.reflector).render(command, &class, &self.config.method)?;
        Ok(self.with_header(page))
    }

    /// The roster of all commands, below the configured header.
    pub fn roster(&self) -> String {
        let roster = Roster::new(&self.config, &self.reflector).render();
        self.with_header(roster)
    }

    fn with_header(&self, text: String) -> String {
        if self.config.header.is_empty() {
            return text;
        }
        let mut res = self.config.header.clone();
        if !res.ends_with('\n') {
            res.push('\n');
        }
        res.push_str(&text);
        res
    }
}
