//! Terminal palette and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Section headers.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Names in "Label: value" pairs.
pub(crate) const LABEL: Style = fg(AnsiColor::Cyan);

/// Secondary information such as field types.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// The current page in a pager line.
pub(crate) const CURRENT: Style = fg(AnsiColor::Green).effects(Effects::BOLD);

pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

pub(crate) const ERROR: Style = fg(AnsiColor::Red);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(fg(AnsiColor::Blue).effects(Effects::BOLD))
        .usage(fg(AnsiColor::Blue).effects(Effects::BOLD))
        .literal(fg(AnsiColor::Cyan))
        .placeholder(fg(AnsiColor::Cyan))
        .error(ERROR.effects(Effects::BOLD))
        .valid(fg(AnsiColor::Green))
        .invalid(WARNING)
}
