use std::collections::VecDeque;

use tracing::trace;

use crate::{filter, scan, Flag, FlagSet, Options, Result, Type, Value};

/// A positional parameter.
#[derive(Debug, Clone)]
pub struct Arg {
    name: String,
    ty: Option<Type>,
    default: Option<Value>,
    variadic: bool,
    help: Option<String>,
}

impl Arg {
    pub fn new(name: &str) -> Arg {
        Arg { name: name.to_string(), ty: None, default: None, variadic: false, help: None }
    }

    /// Declared type; each value of a variadic parameter is coerced to it.
    pub fn ty(mut self, ty: Type) -> Arg {
        self.ty = Some(ty);
        self
    }

    /// Makes the parameter optional.
    pub fn default(mut self, value: impl Into<Value>) -> Arg {
        self.default = Some(value.into());
        self
    }

    /// Consumes every remaining positional token.
    pub fn variadic(mut self) -> Arg {
        self.variadic = true;
        self
    }

    pub fn help(mut self, help: &str) -> Arg {
        self.help = Some(help.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> Option<Type> {
        self.ty
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.variadic || self.default.is_some()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

#[derive(Debug, Clone)]
pub enum Param {
    /// An options-bearing slot.
    Options(FlagSet),
    Arg(Arg),
}

/// A realized argument, ready to be passed positionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Value(Value),
    Options(Options),
}

impl Argument {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Argument::Value(it) => Some(it),
            Argument::Options(_) => None,
        }
    }

    pub fn as_options(&self) -> Option<&Options> {
        match self {
            Argument::Options(it) => Some(it),
            Argument::Value(_) => None,
        }
    }
}

/// The full parameter list of one command entry point.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new() -> Signature {
        Signature::default()
    }

    /// Adds an options slot at the current position.
    ///
    /// Fails if a flag reuses an alias, either within `flags` or from an
    /// earlier slot.
    pub fn options(mut self, flags: impl IntoIterator<Item = Flag>) -> Result<Signature> {
        let set = FlagSet::new(flags)?;
        for name in set.names() {
            if self.flag_sets().any(|it| it.has(name)) {
                bail!(OptionAlreadyDefined, "Option {} is already defined.", crate::flag::dashed(name))
            }
        }
        self.params.push(Param::Options(set));
        Ok(self)
    }

    pub fn arg(mut self, arg: Arg) -> Signature {
        self.params.push(Param::Arg(arg));
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn args(&self) -> impl Iterator<Item = &Arg> {
        self.params.iter().filter_map(|it| match it {
            Param::Arg(arg) => Some(arg),
            Param::Options(_) => None,
        })
    }

    pub fn flag_sets(&self) -> impl Iterator<Item = &FlagSet> {
        self.params.iter().filter_map(|it| match it {
            Param::Options(set) => Some(set),
            Param::Arg(_) => None,
        })
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flag_sets().flat_map(|it| it.flags())
    }

    /// Binds `tokens` to the parameters.
    ///
    /// Returns one argument per options slot and per non-variadic
    /// parameter, plus one per token taken by a variadic parameter, in
    /// declaration order.
    pub fn parse(self, tokens: Vec<String>) -> Result<Vec<Argument>> {
        let mut params = self.params;

        let rest = {
            let mut sets = params
                .iter_mut()
                .filter_map(|it| match it {
                    Param::Options(set) => Some(set),
                    Param::Arg(_) => None,
                })
                .collect::<Vec<_>>();
            scan(&mut sets, tokens)?
        };
        let mut rest = VecDeque::from(rest);

        let mut res = Vec::new();
        let mut pos = 0;
        for param in &params {
            match param {
                Param::Options(set) => res.push(Argument::Options(Options::from_flags(set))),
                Param::Arg(arg) => bind(arg, &mut rest, &mut pos, &mut res)?,
            }
        }
        Ok(res)
    }
}

fn bind(
    arg: &Arg,
    rest: &mut VecDeque<String>,
    pos: &mut usize,
    res: &mut Vec<Argument>,
) -> Result<()> {
    if rest.is_empty() && !arg.is_optional() {
        bail!(ArgumentRequired, "Argument {pos} ({}) is missing.", arg.name)
    }

    if arg.variadic {
        while let Some(token) = rest.pop_front() {
            let value = coerce(arg, *pos, Value::Str(token))?;
            res.push(Argument::Value(value));
            *pos += 1;
        }
        return Ok(());
    }

    let value = match rest.pop_front() {
        Some(token) => coerce(arg, *pos, Value::Str(token))?,
        None => match &arg.default {
            Some(Value::Null) | None => Value::Null,
            Some(default) => coerce(arg, *pos, default.clone())?,
        },
    };
    res.push(Argument::Value(value));
    *pos += 1;
    Ok(())
}

fn coerce(arg: &Arg, pos: usize, value: Value) -> Result<Value> {
    trace!(pos, name = %arg.name, value = %value.literal(), "bind");
    let errmsg = format!("Argument {pos} ({}) expected {} value", arg.name, Type::name(arg.ty));
    filter::coerce(value, arg.ty, &errmsg)
}
