//! Coercion of raw command line values to declared types.
use std::mem;

use crate::{Error, Result, Type, Value};

/// Converts `value` to `ty`.
///
/// A missing type leaves the value alone. On failure, the error message is
/// `errmsg` followed by the literal of the rejected value.
pub fn coerce(value: Value, ty: Option<Type>, errmsg: &str) -> Result<Value> {
    let ty = match ty {
        Some(it) => it,
        None => return Ok(value),
    };
    match ty {
        Type::Array => Ok(to_array(value)),
        Type::Bool => to_bool(value, errmsg),
        Type::Float => to_float(value, errmsg),
        Type::Int => to_int(value, errmsg),
        Type::Mixed => Ok(value),
        Type::Str => Ok(Value::Str(value.to_string())),
    }
}

fn to_array(value: Value) -> Value {
    match value {
        Value::List(_) => value,
        _ => Value::List(split_csv(&value.to_string()).into_iter().map(Value::Str).collect()),
    }
}

fn to_bool(value: Value, errmsg: &str) -> Result<Value> {
    if let Value::Bool(_) = value {
        return Ok(value);
    }
    match value.to_string().to_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" => Ok(Value::Bool(true)),
        "0" | "f" | "false" | "n" | "no" => Ok(Value::Bool(false)),
        _ => Err(invalid(&value, errmsg)),
    }
}

fn to_float(value: Value, errmsg: &str) -> Result<Value> {
    if let Value::Float(_) = value {
        return Ok(value);
    }
    match &value {
        Value::Int(it) => Ok(Value::Float(*it as f64)),
        Value::Str(it) => match parse_float(it) {
            Some(it) => Ok(Value::Float(it)),
            None => Err(invalid(&value, errmsg)),
        },
        _ => Err(invalid(&value, errmsg)),
    }
}

fn to_int(value: Value, errmsg: &str) -> Result<Value> {
    if let Value::Int(_) = value {
        return Ok(value);
    }
    let int = match &value {
        Value::Float(it) => exact_int(*it),
        Value::Str(it) => {
            let it = it.trim();
            it.parse::<i64>().ok().or_else(|| parse_float(it).and_then(exact_int))
        }
        _ => None,
    };
    int.map(Value::Int).ok_or_else(|| invalid(&value, errmsg))
}

fn parse_float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|it| it.is_finite())
}

fn exact_int(f: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    if f.fract() == 0.0 && in_range {
        Some(f as i64)
    } else {
        None
    }
}

fn invalid(value: &Value, errmsg: &str) -> Error {
    format_err!(ArgumentInvalid, "{errmsg}, actually {}", value.literal())
}

/// Splits a comma separated line.
///
/// A field that starts with `"` runs up to the matching quote and may
/// contain commas; `""` inside quotes stands for a single `"`.
pub fn split_csv(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut started = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if !started => {
                quoted = true;
                started = true;
            }
            ',' if !quoted => {
                fields.push(mem::take(&mut field));
                started = false;
            }
            _ => {
                field.push(c);
                started = true;
            }
        }
    }
    fields.push(field);
    fields
}
