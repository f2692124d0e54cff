//! Access to the platform's hidden-file attribute.
//!
//! Windows file systems keep a per-file "hidden" flag that is independent of
//! the file's name.  Other platforms have no such flag; there the attribute
//! adapter is a no-op that always reports "not hidden".
use std::io;
use std::path::Path;

use log::*;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use self::windows::WindowsAttribute;

/// The attribute implementation for the host platform.
#[cfg(windows)]
pub type PlatformAttribute = WindowsAttribute;
/// The attribute implementation for the host platform.
#[cfg(not(windows))]
pub type PlatformAttribute = NullAttribute;

/// Interface to a per-path hidden attribute store.
pub trait HiddenAttribute {
    /// Whether this attribute is meaningful on the host.  When it is not,
    /// hidden-state checks rely only on the dot prefix.
    const APPLIES: bool;

    /// Read the hidden attribute of a path.
    fn read_hidden(&self, path: &Path) -> io::Result<bool>;

    /// Set or clear the hidden attribute of a path.
    fn set_hidden(&self, path: &Path, hidden: bool) -> io::Result<()>;

    /// Read the hidden attribute, treating an unreadable attribute as unset.
    fn hidden_or_false(&self, path: &Path) -> bool {
        match self.read_hidden(path) {
            Ok(h) => h,
            Err(e) => {
                debug!("{}: cannot read attributes: {}", path.display(), e);
                false
            }
        }
    }
}

/// Attribute store for platforms without a hidden attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAttribute;

impl HiddenAttribute for NullAttribute {
    const APPLIES: bool = false;

    fn read_hidden(&self, _path: &Path) -> io::Result<bool> {
        Ok(false)
    }

    fn set_hidden(&self, _path: &Path, _hidden: bool) -> io::Result<()> {
        Ok(())
    }
}
