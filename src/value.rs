use std::fmt;

/// A captured or realized value.
///
/// `Display` gives the plain string form used when coercing to
/// [`Type::Str`]; [`Value::literal`] gives the quoted form used in
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(it) => Some(*it),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(it) => Some(*it),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(it) => Some(*it),
            Value::Int(it) => Some(*it as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(it) => Some(it.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(it) => Some(it.as_slice()),
            _ => None,
        }
    }

    /// Printable representation, e.g. `'kay'`, `true`, `['a', 'b']`.
    pub fn literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(it) => it.to_string(),
            Value::Int(it) => it.to_string(),
            Value::Float(it) => format!("{it:?}"),
            Value::Str(it) => format!("'{}'", it.replace('\\', "\\\\").replace('\'', "\\'")),
            Value::List(it) => {
                let items = it.iter().map(Value::literal).collect::<Vec<_>>();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null | Value::Bool(false) => Ok(()),
            Value::Bool(true) => f.write_str("1"),
            Value::Int(it) => fmt::Display::fmt(it, f),
            Value::Float(it) => fmt::Display::fmt(it, f),
            Value::Str(it) => f.write_str(it),
            Value::List(it) => {
                let mut sep = "";
                for item in it {
                    write!(f, "{sep}{item}")?;
                    sep = ",";
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(it: bool) -> Value {
        Value::Bool(it)
    }
}

impl From<i64> for Value {
    fn from(it: i64) -> Value {
        Value::Int(it)
    }
}

impl From<f64> for Value {
    fn from(it: f64) -> Value {
        Value::Float(it)
    }
}

impl From<&str> for Value {
    fn from(it: &str) -> Value {
        Value::Str(it.to_string())
    }
}

impl From<String> for Value {
    fn from(it: String) -> Value {
        Value::Str(it)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(it: Vec<T>) -> Value {
        Value::List(it.into_iter().map(Into::into).collect())
    }
}

/// Target type of a coercion, see [`crate::filter::coerce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Array,
    Bool,
    Float,
    Int,
    Mixed,
    Str,
}

impl Type {
    pub(crate) fn name(ty: Option<Type>) -> &'static str {
        match ty {
            Some(Type::Array) => "array",
            Some(Type::Bool) => "bool",
            Some(Type::Float) => "float",
            Some(Type::Int) => "int",
            Some(Type::Mixed) | None => "mixed",
            Some(Type::Str) => "string",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Type::name(Some(*self)))
    }
}
