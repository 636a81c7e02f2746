use expect_test::expect;
use shellflags::{
    filter::{coerce, split_csv},
    ErrorKind, Type, Value,
};

use crate::check;

fn strs(items: &[&str]) -> Value {
    Value::List(items.iter().map(|it| Value::from(*it)).collect())
}

#[test]
fn to_array() {
    let expected = strs(&["1", "2", "3"]);
    assert_eq!(coerce("1,2,3".into(), Some(Type::Array), "Expected array").unwrap(), expected);
    assert_eq!(coerce(expected.clone(), Some(Type::Array), "Expected array").unwrap(), expected);
}

#[test]
fn csv_quoting() {
    assert_eq!(split_csv(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    assert_eq!(split_csv(r#""say ""hi""",x"#), vec![r#"say "hi""#, "x"]);
    assert_eq!(split_csv("a,,b"), vec!["a", "", "b"]);
    assert_eq!(split_csv(""), vec![""]);
}

#[test]
fn to_bool() {
    assert_eq!(coerce("Yes".into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(true)));
    assert_eq!(coerce("t".into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(true)));
    assert_eq!(coerce(true.into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(true)));
    assert_eq!(coerce("No".into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(false)));
    assert_eq!(coerce("0".into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(false)));
    assert_eq!(coerce(false.into(), Some(Type::Bool), "Expected bool"), Ok(Value::Bool(false)));

    let err = coerce("x".into(), Some(Type::Bool), "Expected bool").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    check(coerce("x".into(), Some(Type::Bool), "Expected bool"), expect!["Expected bool, actually 'x'"]);
}

#[test]
fn to_int() {
    assert_eq!(coerce("1".into(), Some(Type::Int), "Expected int"), Ok(Value::Int(1)));
    assert_eq!(coerce(1.into(), Some(Type::Int), "Expected int"), Ok(Value::Int(1)));
    assert_eq!(coerce("-12".into(), Some(Type::Int), "Expected int"), Ok(Value::Int(-12)));
    assert_eq!(coerce("2.0".into(), Some(Type::Int), "Expected int"), Ok(Value::Int(2)));
    assert_eq!(coerce(3.0.into(), Some(Type::Int), "Expected int"), Ok(Value::Int(3)));

    check(coerce("x".into(), Some(Type::Int), "Expected int"), expect!["Expected int, actually 'x'"]);
    check(coerce("1.5".into(), Some(Type::Int), "Expected int"), expect!["Expected int, actually '1.5'"]);
    check(coerce(true.into(), Some(Type::Int), "Expected int"), expect!["Expected int, actually true"]);
}

#[test]
fn to_float() {
    assert_eq!(coerce("1.23".into(), Some(Type::Float), "Expected float"), Ok(Value::Float(1.23)));
    assert_eq!(coerce(1.23.into(), Some(Type::Float), "Expected float"), Ok(Value::Float(1.23)));
    assert_eq!(coerce(2.into(), Some(Type::Float), "Expected float"), Ok(Value::Float(2.0)));

    check(
        coerce("x".into(), Some(Type::Float), "Expected float"),
        expect!["Expected float, actually 'x'"],
    );
    check(
        coerce("inf".into(), Some(Type::Float), "Expected float"),
        expect!["Expected float, actually 'inf'"],
    );
}

#[test]
fn to_mixed() {
    for value in [Value::from("abc"), Value::Int(123), Value::Float(4.56)] {
        assert_eq!(coerce(value.clone(), Some(Type::Mixed), "Expected mixed"), Ok(value.clone()));
        assert_eq!(coerce(value.clone(), None, "Expected mixed"), Ok(value));
    }
}

#[test]
fn to_string() {
    assert_eq!(coerce("abc".into(), Some(Type::Str), "Expected string"), Ok(Value::from("abc")));
    assert_eq!(coerce(123.into(), Some(Type::Str), "Expected string"), Ok(Value::from("123")));
    assert_eq!(coerce(4.56.into(), Some(Type::Str), "Expected string"), Ok(Value::from("4.56")));
    assert_eq!(coerce(true.into(), Some(Type::Str), "Expected string"), Ok(Value::from("1")));
}
