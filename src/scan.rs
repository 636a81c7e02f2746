use tracing::trace;

use crate::{
    flag::{not_defined, Flag, FlagSet},
    Result,
};

pub(crate) struct Parser {
    after_double_dash: bool,
    rargs: Vec<String>,
}

impl Parser {
    pub(crate) fn new(mut args: Vec<String>) -> Self {
        args.reverse();
        Self { after_double_dash: false, rargs: args }
    }

    fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    /// Pops the next token if it can serve as a flag value: present,
    /// non-empty and not dashed.
    pub(crate) fn next_value(&mut self) -> Option<String> {
        let is_value = self.rargs.last().map_or(false, |it| !it.is_empty() && !it.starts_with('-'));
        if is_value {
            self.next()
        } else {
            None
        }
    }
}

/// Scans `tokens` against the union of `sets`, capturing flag values into
/// them, and returns the positional tokens in order.
///
/// The first failure aborts the scan; flags captured before it keep their
/// values.
pub fn scan(sets: &mut [&mut FlagSet], tokens: Vec<String>) -> Result<Vec<String>> {
    let mut p = Parser::new(tokens);
    let mut args = Vec::new();

    while let Some(arg) = p.next() {
        trace!(token = %arg, after_double_dash = p.after_double_dash, "scan");

        if arg == "--" {
            p.after_double_dash = true;
            continue;
        }
        if p.after_double_dash {
            args.push(arg);
            continue;
        }

        if arg.starts_with("--") {
            let name = arg.trim_start_matches('-');
            match name.split_once('=') {
                Some((name, value)) => lookup(sets, name)?.equals(value)?,
                None => lookup(sets, name)?.capture(&mut p)?,
            }
            continue;
        }

        if let Some(cluster) = arg.strip_prefix('-') {
            let mut chars = cluster.chars().map(String::from).collect::<Vec<_>>();
            let last = match chars.pop() {
                Some(it) => it,
                None => return Err(not_defined(cluster)),
            };
            for name in &chars {
                lookup(sets, name)?.equals("")?;
            }
            lookup(sets, &last)?.capture(&mut p)?;
            continue;
        }

        args.push(arg);
    }

    Ok(args)
}

fn lookup<'a>(sets: &'a mut [&mut FlagSet], name: &str) -> Result<&'a mut Flag> {
    for set in sets.iter_mut() {
        if let Some(idx) = set.position(name) {
            return Ok(set.flag_mut(idx));
        }
    }
    Err(not_defined(name))
}
