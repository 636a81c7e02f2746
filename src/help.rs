//! Plain-text help generated from command declarations.
//!
//! [`Manual`] documents one command, [`Roster`] lists all of them. The
//! dispatcher routes `help` and `help <command>` to the [`ROSTER`] and
//! [`MANUAL`] targets; rendering is left to the caller.
use std::{collections::BTreeMap, fmt::Write};

use crate::{Arg, Config, Flag, Mode, Reflector, Result};

/// Target of `help` with no further token.
pub const ROSTER: &str = "help::Roster";

/// Target of `help <command>`.
pub const MANUAL: &str = "help::Manual";

const NO_HELP: &str = "No help available.";

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Help attached to a command: a one-line summary and an optional body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Help {
    pub line: String,
    pub body: Option<String>,
}

impl Help {
    pub fn new(line: &str) -> Help {
        Help { line: line.to_string(), body: None }
    }

    pub fn body(mut self, body: &str) -> Help {
        self.body = Some(body.to_string());
        self
    }
}

pub struct Manual<'a, R: ?Sized> {
    reflector: &'a R,
}

impl<'a, R: Reflector + ?Sized> Manual<'a, R> {
    pub fn new(reflector: &'a R) -> Self {
        Manual { reflector }
    }

    /// Renders the manual page of `method` of `class`, invoked as `command`.
    pub fn render(&self, command: &str, class: &str, method: &str) -> Result<String> {
        let signature = self.reflector.signature(class, method)?;
        let help = self.reflector.help(class);
        let mut sections = Vec::new();

        let mut name = format!("NAME\n    {command}");
        if let Some(help) = help.filter(|it| !it.line.is_empty()) {
            w!(name, " -- {}", help.line);
        }
        name.push('\n');
        sections.push(name);

        let flags = signature.flags().collect::<Vec<_>>();
        let args = signature.args().collect::<Vec<_>>();

        let mut synopsis = command.to_string();
        if !flags.is_empty() {
            synopsis.push_str(" [options]");
        }
        if !args.is_empty() {
            let args = args.iter().map(|it| arg_synopsis(it)).collect::<Vec<_>>();
            w!(synopsis, " [--] {}", args.join(" "));
        }
        sections.push(format!("SYNOPSIS\n    {synopsis}\n"));

        if !args.is_empty() {
            let items = args.iter().map(|it| arg_item(it)).collect::<Vec<_>>();
            sections.push(format!("ARGUMENTS\n{}", items.join("\n")));
        }

        if !flags.is_empty() {
            let items = flags.iter().map(|it| flag_item(it)).collect::<Vec<_>>();
            sections.push(format!("OPTIONS\n{}", items.join("\n")));
        }

        if let Some(body) = help.and_then(|it| it.body.as_deref()) {
            let mut buf = String::new();
            write_lines_indented(&mut buf, body, 0);
            sections.push(buf);
        }

        Ok(sections.join("\n"))
    }
}

fn arg_synopsis(arg: &Arg) -> String {
    let mut res = if arg.is_optional() {
        format!("[{}]", arg.name())
    } else {
        arg.name().to_string()
    };
    if arg.is_variadic() {
        res.push_str(" ...");
    }
    res
}

fn arg_item(arg: &Arg) -> String {
    let mut buf = format!("    {}", arg.name());
    if let Some(default) = arg.default_value() {
        w!(buf, " (default: {})", default.literal());
    }
    buf.push('\n');
    write_lines_indented(&mut buf, arg.help_text().unwrap_or(NO_HELP), 8);
    buf
}

fn flag_item(flag: &Flag) -> String {
    let default = match flag.default_value() {
        Some(it) => format!(" (default: {})", it.literal()),
        None => String::new(),
    };
    let mut buf = String::new();
    for name in flag.names() {
        w!(buf, "    {}{default}\n", flag_form(flag, name));
    }
    write_lines_indented(&mut buf, flag.help_text().unwrap_or(NO_HELP), 8);
    buf
}

fn flag_form(flag: &Flag, name: &str) -> String {
    let short = name.chars().count() == 1;
    let label = flag.label();
    match (flag.value_mode(), short) {
        (Mode::Rejected, true) => format!("-{name}"),
        (Mode::Rejected, false) => format!("--{name}"),
        (Mode::Required, true) => format!("-{name} {label}"),
        (Mode::Required, false) => format!("--{name}={label}"),
        (Mode::Optional, true) => format!("-{name} [{label}]"),
        (Mode::Optional, false) => format!("--{name}[={label}]"),
    }
}

fn write_lines_indented(buf: &mut String, multiline_str: &str, indent: usize) {
    for line in multiline_str.trim_matches('\n').split('\n').map(str::trim_end) {
        if line.is_empty() {
            w!(buf, "\n")
        } else {
            w!(buf, "{blank:indent$}{line}\n", blank = "");
        }
    }
}

/// Lists every registered command with its one-line help.
pub struct Roster<'a, R: ?Sized> {
    config: &'a Config,
    reflector: &'a R,
}

impl<'a, R: Reflector + ?Sized> Roster<'a, R> {
    pub fn new(config: &'a Config, reflector: &'a R) -> Self {
        Roster { config, reflector }
    }

    /// Command names mapped to their help lines, `""` when there is none.
    ///
    /// Classes outside the configured namespace and suffix are skipped.
    pub fn entries(&self) -> BTreeMap<String, String> {
        let mut res = BTreeMap::new();
        for class in self.reflector.classes() {
            let command = match self.config.command_name(&class) {
                Some(it) => it,
                None => continue,
            };
            let line = self.reflector.help(&class).map(|it| it.line.clone()).unwrap_or_default();
            res.insert(command, line);
        }
        res
    }

    pub fn render(&self) -> String {
        let mut buf = String::new();
        for (command, line) in self.entries() {
            let line = if line.trim().is_empty() { NO_HELP } else { line.as_str() };
            w!(buf, "{command}\n    {line}\n\n");
        }
        buf
    }
}
