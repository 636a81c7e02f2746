use std::collections::HashMap;

use crate::{filter, scan::Parser, Error, Result, Type, Value};

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `-b bval`, `--bravo=bval`.
    Required,
    /// `-c`, `-c value`, `--charlie[=value]`.
    Optional,
    /// A plain switch.
    #[default]
    Rejected,
}

/// A declared flag together with the value captured for it.
#[derive(Debug, Clone)]
pub struct Flag {
    names: Vec<String>,
    mode: Mode,
    multiple: bool,
    ty: Option<Type>,
    default: Option<Value>,
    fallback: Option<Value>,
    help: Option<String>,
    value_name: Option<String>,
    value: Option<Value>,
}

impl Flag {
    /// Declares a flag from a comma separated alias list, like `"f,foo"` or
    /// `"-f, --foo"`.
    pub fn new(names: &str) -> Flag {
        let mut names = names
            .split(',')
            .map(|it| it.trim_matches(|c| c == '-' || c == ' ').to_string())
            .collect::<Vec<_>>();
        names.sort();
        Flag {
            names,
            mode: Mode::Rejected,
            multiple: false,
            ty: None,
            default: None,
            fallback: None,
            help: None,
            value_name: None,
            value: None,
        }
    }

    pub fn required(mut self) -> Flag {
        self.mode = Mode::Required;
        self
    }

    pub fn optional(mut self) -> Flag {
        self.mode = Mode::Optional;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Flag {
        self.mode = mode;
        self
    }

    /// Repeated occurrences accumulate into a list.
    pub fn multiple(mut self) -> Flag {
        self.multiple = true;
        self
    }

    pub fn ty(mut self, ty: Type) -> Flag {
        self.ty = Some(ty);
        self
    }

    /// Value used when an optional-value flag is given without one.
    pub fn default(mut self, value: impl Into<Value>) -> Flag {
        self.default = Some(value.into());
        self
    }

    /// Value reported in [`crate::Options`] when the flag never appears.
    pub fn fallback(mut self, value: impl Into<Value>) -> Flag {
        self.fallback = Some(value.into());
        self
    }

    pub fn help(mut self, help: &str) -> Flag {
        self.help = Some(help.to_string());
        self
    }

    pub fn value_name(mut self, name: &str) -> Flag {
        self.value_name = Some(name.to_string());
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn value_mode(&self) -> Mode {
        self.mode
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn value_type(&self) -> Option<Type> {
        self.ty
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn fallback_value(&self) -> Option<&Value> {
        self.fallback.as_ref()
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn label(&self) -> &str {
        self.value_name.as_deref().unwrap_or("value")
    }

    /// The captured value, `None` until the flag is scanned.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// All aliases in their dashed form, `-f,--foo`.
    pub fn dashed(&self) -> String {
        self.names.iter().map(|it| dashed(it)).collect::<Vec<_>>().join(",")
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.names.iter().any(String::is_empty) {
            bail!(OptionNotDefined, "Option names cannot be empty.")
        }
        if self.default.is_some() && self.mode != Mode::Optional {
            bail!(
                DefaultNotAllowed,
                "Option {} cannot have a default unless its value is optional.",
                self.dashed()
            )
        }
        Ok(())
    }

    /// The flag appeared bare and may take the next token as its value.
    pub(crate) fn capture(&mut self, p: &mut Parser) -> Result<()> {
        if self.mode == Mode::Rejected {
            return self.set_switch();
        }
        if let Some(value) = p.next_value() {
            return self.set_value(Value::Str(value));
        }
        if self.mode == Mode::Required {
            bail!(ArgumentRequired, "{} requires an argument.", self.dashed())
        }
        self.set_default()
    }

    /// The flag appeared with an inline value, or inside a cluster with `""`.
    pub(crate) fn equals(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        match (self.mode, value.is_empty()) {
            (Mode::Rejected, true) => self.set_switch(),
            (Mode::Rejected, false) => {
                bail!(ArgumentRejected, "{} does not accept an argument.", self.dashed())
            }
            (Mode::Required, true) => {
                bail!(ArgumentRequired, "{} requires an argument.", self.dashed())
            }
            (Mode::Optional, true) => self.set_default(),
            (_, false) => self.set_value(Value::Str(value.to_string())),
        }
    }

    fn set_switch(&mut self) -> Result<()> {
        if self.ty == Some(Type::Int) {
            let count = match &self.value {
                Some(Value::Int(it)) => it + 1,
                _ => 1,
            };
            self.value = Some(Value::Int(count));
            return Ok(());
        }
        self.set_value(Value::Bool(true))
    }

    fn set_default(&mut self) -> Result<()> {
        let value = self.default.clone().unwrap_or(Value::Bool(true));
        self.set_value(value)
    }

    fn set_value(&mut self, raw: Value) -> Result<()> {
        let errmsg =
            format!("Option {} expected {} value", self.dashed(), Type::name(self.ty));
        let value = filter::coerce(raw, self.ty, &errmsg)?;

        if !self.multiple {
            self.value = Some(value);
            return Ok(());
        }
        match &mut self.value {
            Some(Value::List(values)) => values.push(value),
            _ => self.value = Some(Value::List(vec![value])),
        }
        Ok(())
    }
}

pub(crate) fn dashed(name: &str) -> String {
    let name = name.trim_start_matches('-');
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

pub(crate) fn not_defined(name: &str) -> Error {
    format_err!(OptionNotDefined, "Option {} is not defined.", dashed(name))
}

/// The flags of one options slot, addressable by any alias.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: Vec<Flag>,
    by_name: HashMap<String, usize>,
}

impl FlagSet {
    pub fn new(flags: impl IntoIterator<Item = Flag>) -> Result<FlagSet> {
        let mut res = FlagSet::default();
        for flag in flags {
            flag.validate()?;
            let idx = res.flags.len();
            for name in &flag.names {
                if res.by_name.insert(name.clone(), idx).is_some() {
                    bail!(OptionAlreadyDefined, "Option {} is already defined.", dashed(name))
                }
            }
            res.flags.push(flag);
        }
        Ok(res)
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Result<&Flag> {
        match self.position(name) {
            Some(idx) => Ok(&self.flags[idx]),
            None => Err(not_defined(name)),
        }
    }

    /// Scans `tokens` against this set alone, see [`crate::scan`].
    pub fn scan(&mut self, tokens: Vec<String>) -> Result<Vec<String>> {
        crate::scan(&mut [self], tokens)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().flat_map(|it| it.names.iter().map(String::as_str))
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name.trim_start_matches('-')).copied()
    }

    pub(crate) fn flag_mut(&mut self, idx: usize) -> &mut Flag {
        &mut self.flags[idx]
    }
}
