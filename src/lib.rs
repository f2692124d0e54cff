//! Hide and reveal files and directories.
//!
//! Two conventions mark a file as hidden: a leading dot in its name (Unix),
//! and a file-system attribute (Windows).  The functions in this crate
//! reconcile the two, renaming paths to add or remove the dot and, on
//! Windows, toggling the attribute to match.
//!
//! The functions at the crate root block on file-system I/O; the
//! [nonblocking] module has async forms with the same semantics.
use std::path::{Path, PathBuf};

pub mod attribute;
pub mod error;
mod hider;
pub mod nonblocking;
pub mod path;

pub use attribute::{HiddenAttribute, NullAttribute, PlatformAttribute};
pub use error::{HideError, Result};
pub use hider::{HiddenState, Hider};
pub use path::{is_dot_prefixed, parse_path, PathParts};

fn platform() -> Hider<PlatformAttribute> {
    Hider::new(PlatformAttribute::default())
}

/// Read the hidden state of a path under both conventions.
pub fn stat<P: AsRef<Path>>(path: P) -> Result<HiddenState> {
    platform().stat(path)
}

/// Check whether a path is hidden by every convention that applies on this
/// platform.
///
/// On Windows, this requires both the dot prefix and the hidden attribute,
/// and fails if the attribute cannot be read.  Elsewhere it is equivalent to
/// [is_dot_prefixed] and does not touch the file system.
pub fn is_hidden<P: AsRef<Path>>(path: P) -> Result<bool> {
    platform().is_hidden(path)
}

/// Check whether a path is hidden by either convention.
pub fn should_be_hidden<P: AsRef<Path>>(path: P) -> Result<bool> {
    platform().should_be_hidden(path)
}

/// Hide a path by adding a dot prefix (and setting the hidden attribute on
/// Windows).  Returns the new path.
pub fn hide<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    platform().hide(path)
}

/// Reveal a path by removing its dot prefix (and clearing the hidden
/// attribute on Windows).  Returns the new path.
pub fn reveal<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    platform().reveal(path)
}
