//! Command dispatcher with getopt-style option scanning.
//!
//! A command is a registered target with one or more entry points, each
//! described by a [`Signature`]: an ordered list of options-bearing slots and
//! positional arguments. [`Shell::resolve`] maps a list of tokens to an
//! [`Exec`], which names the target and carries the realized arguments, or
//! the first error that occurred.
//!
//! ```
//! use shellflags::{Arg, Config, Flag, Registry, Shell, Signature, Target, Type};
//!
//! let registry = Registry::new().register(
//!     "FooBar::Baz",
//!     Target::new().method("run", || {
//!         Ok(Signature::new()
//!             .options([Flag::new("z,zim")])?
//!             .arg(Arg::new("i").ty(Type::Int))
//!             .arg(Arg::new("tail").variadic()))
//!     }),
//! );
//! let shell = Shell::new(Config::new(), registry);
//!
//! let exec = shell.resolve(["foo-bar:baz", "-z", "1", "a", "b"]);
//! assert!(exec.is_ok());
//! assert_eq!(exec.class(), Some("FooBar::Baz"));
//! assert_eq!(exec.arguments().len(), 4);
//! ```
//!
//! Token grammar:
//!
//! * `--` ends option parsing, everything after it is positional.
//! * `--name` and `--name=value` are long options.
//! * `-x`, `-x value` and clusters like `-xyz` are short options. In a
//!   cluster, every flag but the last must be usable without a value.

macro_rules! format_err {
    ($kind:ident, $($tt:tt)*) => {
        $crate::Error::$kind(format!($($tt)*))
    };
}

macro_rules! bail {
    ($($tt:tt)*) => {
        return Err(format_err!($($tt)*))
    };
}

pub mod filter;
pub mod help;

mod flag;
mod options;
mod registry;
mod scan;
mod shell;
mod signature;
mod value;

pub use crate::{
    flag::{Flag, FlagSet, Mode},
    help::Help,
    options::{FromOptions, Options},
    registry::{Reflector, Registry, Target},
    scan::scan,
    shell::{Config, Exec, Shell},
    signature::{Arg, Argument, Param, Signature},
    value::{Type, Value},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while declaring or resolving a command.
///
/// `Display` prints the message alone, so it can go straight to stderr.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A value could not be coerced to the declared type.
    #[error("{0}")]
    ArgumentInvalid(String),
    /// A flag value or a positional argument is missing.
    #[error("{0}")]
    ArgumentRequired(String),
    /// A value was given to a flag that does not take one.
    #[error("{0}")]
    ArgumentRejected(String),
    #[error("{0}")]
    OptionNotDefined(String),
    /// Two flags of one signature share an alias.
    #[error("{0}")]
    OptionAlreadyDefined(String),
    #[error("{0}")]
    ClassNotFound(String),
    #[error("{0}")]
    MethodNotFound(String),
    /// A default was declared on a flag whose value is not optional.
    #[error("{0}")]
    DefaultNotAllowed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentInvalid,
    ArgumentRequired,
    ArgumentRejected,
    OptionNotDefined,
    OptionAlreadyDefined,
    ClassNotFound,
    MethodNotFound,
    DefaultNotAllowed,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArgumentInvalid(_) => ErrorKind::ArgumentInvalid,
            Error::ArgumentRequired(_) => ErrorKind::ArgumentRequired,
            Error::ArgumentRejected(_) => ErrorKind::ArgumentRejected,
            Error::OptionNotDefined(_) => ErrorKind::OptionNotDefined,
            Error::OptionAlreadyDefined(_) => ErrorKind::OptionAlreadyDefined,
            Error::ClassNotFound(_) => ErrorKind::ClassNotFound,
            Error::MethodNotFound(_) => ErrorKind::MethodNotFound,
            Error::DefaultNotAllowed(_) => ErrorKind::DefaultNotAllowed,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::ArgumentInvalid(msg)
            | Error::ArgumentRequired(msg)
            | Error::ArgumentRejected(msg)
            | Error::OptionNotDefined(msg)
            | Error::OptionAlreadyDefined(msg)
            | Error::ClassNotFound(msg)
            | Error::MethodNotFound(msg)
            | Error::DefaultNotAllowed(msg) => msg,
        }
    }
}
