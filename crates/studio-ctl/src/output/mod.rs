//! Terminal output for `studio-ctl`.
//!
//! Generated code and JSON go to stdout unstyled so they can be piped into a
//! file. Human-oriented listings use `anstyle` styles through `anstream`,
//! which strips them when stdout is not a terminal. Warnings and errors go to
//! stderr.

mod styles;

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

pub(crate) use styles::clap_styles;

use styles::{CURRENT, DIM, ERROR, HEADER, LABEL, WARNING};

pub(crate) fn header(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

/// "  Label: value" with the label styled.
pub(crate) fn label(name: impl Display, value: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {LABEL}{name}:{LABEL:#} {value}").ok();
}

/// "  name  detail" with the detail dimmed.
pub(crate) fn entry(name: impl Display, detail: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  {name}  {DIM}{detail}{DIM:#}").ok();
}

pub(crate) fn plain(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{msg}").ok();
}

pub(crate) fn dim(msg: impl Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{DIM}{msg}{DIM:#}").ok();
}

/// Page numbers with the current one highlighted; `None` is a gap.
pub(crate) fn pager_line(pages: &[(Option<usize>, bool)]) {
    let mut out = anstream::stdout().lock();
    let mut line = String::from("  ");
    for (number, current) in pages {
        match (number, current) {
            (Some(n), true) => line.push_str(&format!("{CURRENT}[{n}]{CURRENT:#} ")),
            (Some(n), false) => line.push_str(&format!("{n} ")),
            (None, _) => line.push_str("… "),
        }
    }
    writeln!(out, "{}", line.trim_end()).ok();
}

pub(crate) fn blank() {
    let mut out = anstream::stdout().lock();
    writeln!(out).ok();
}

/// Raw text, written as-is (generated code keeps its own newlines).
pub(crate) fn raw(text: &str) {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes()).ok();
}

/// Pretty JSON followed by a newline.
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{rendered}")?;
    Ok(())
}

pub(crate) fn warning(msg: impl Display) {
    let mut err = anstream::stderr().lock();
    writeln!(err, "{WARNING}! {msg}{WARNING:#}").ok();
}

pub(crate) fn error(msg: impl Display) {
    let mut err = anstream::stderr().lock();
    writeln!(err, "{ERROR}✗ {msg}{ERROR:#}").ok();
}
