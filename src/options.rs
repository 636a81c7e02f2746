use std::{collections::BTreeMap, fmt};

use crate::{
    flag::{not_defined, FlagSet},
    Result, Value,
};

/// The values of one options slot after scanning.
///
/// Every alias of a flag reads the same entry. A flag that was never given
/// reads as its fallback, or as absent when it has none.
#[derive(Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<Entry>,
}

#[derive(Clone, PartialEq)]
struct Entry {
    names: Vec<String>,
    value: Option<Value>,
}

/// Conversion of an options bundle into a host struct.
///
/// ```
/// use shellflags::{FromOptions, Options, Result};
///
/// struct DibOptions {
///     alpha: bool,
///     bravo: Option<String>,
/// }
///
/// impl FromOptions for DibOptions {
///     fn from_options(options: &Options) -> Result<DibOptions> {
///         Ok(DibOptions {
///             alpha: options.try_get("alpha")?.and_then(|it| it.as_bool()).unwrap_or(false),
///             bravo: options.try_get("bravo")?.and_then(|it| it.as_str()).map(String::from),
///         })
///     }
/// }
/// ```
pub trait FromOptions: Sized {
    fn from_options(options: &Options) -> Result<Self>;
}

impl Options {
    pub(crate) fn from_flags(set: &FlagSet) -> Options {
        let entries = set
            .flags()
            .iter()
            .map(|flag| Entry {
                names: flag.names().to_vec(),
                value: flag.value().or_else(|| flag.fallback_value()).cloned(),
            })
            .collect();
        Options { entries }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        let name = name.trim_start_matches('-');
        self.entries.iter().find(|it| it.names.iter().any(|it| it == name))
    }

    /// Value of the flag with alias `name`; `None` when unset or undeclared.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entry(name).and_then(|it| it.value.as_ref())
    }

    /// Like [`Options::get`], but an undeclared alias is an error.
    pub fn try_get(&self, name: &str) -> Result<Option<&Value>> {
        match self.entry(name) {
            Some(entry) => Ok(entry.value.as_ref()),
            None => Err(not_defined(name)),
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every alias mapped to its value, [`Value::Null`] for unset flags.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        let mut res = BTreeMap::new();
        for entry in &self.entries {
            for name in &entry.names {
                res.insert(name.clone(), entry.value.clone().unwrap_or(Value::Null));
            }
        }
        res
    }

    pub fn convert<T: FromOptions>(&self) -> Result<T> {
        T::from_options(self)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|it| (it.names.join(","), &it.value))).finish()
    }
}
