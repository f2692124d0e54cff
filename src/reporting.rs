//! Terminal output and error reporting.

use std::fmt::Display;
use std::path::Path;

use anstream::println;
use anstyle::{AnsiColor, Style};
use anyhow::{anyhow, Result};

use hidefile::HiddenState;

/// Attach the action and path being processed to an error.
pub trait ResultNote<R> {
    fn with_path_action<P: AsRef<Path>>(self, action: &str, path: P) -> Result<R>;
}

impl<R, E> ResultNote<R> for std::result::Result<R, E>
where
    E: Into<anyhow::Error> + Display,
{
    fn with_path_action<P: AsRef<Path>>(self, action: &str, path: P) -> Result<R> {
        self.map_err(|e| anyhow!("{} {}: {}", action, path.as_ref().display(), e))
    }
}

const PATH: Style = Style::new().bold();
const YES: Style = AnsiColor::Green.on_default();
const NO: Style = AnsiColor::BrightBlack.on_default();
const ARROW: Style = AnsiColor::Cyan.on_default();

fn flag(value: bool) -> String {
    let (style, text) = if value { (YES, "yes") } else { (NO, "no") };
    format!("{}{}{}", style.render(), text, style.render_reset())
}

/// Print a path's old and new locations.
pub fn print_change(from: &Path, to: &Path) {
    println!(
        "{} {}->{} {}{}{}",
        from.display(),
        ARROW.render(),
        ARROW.render_reset(),
        PATH.render(),
        to.display(),
        PATH.render_reset()
    );
}

/// Print a path's hidden state.
pub fn print_status(path: &Path, state: &HiddenState, attribute_applies: bool) {
    let attr = if attribute_applies {
        flag(state.windows)
    } else {
        "n/a".to_string()
    };
    println!(
        "{}{}{}: dot={} attr={} hidden={} should-be-hidden={}",
        PATH.render(),
        path.display(),
        PATH.render_reset(),
        flag(state.unix),
        attr,
        flag(state.is_hidden(attribute_applies)),
        flag(state.should_be_hidden())
    );
}
