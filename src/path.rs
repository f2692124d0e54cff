//! Split paths into directory and basename, and rewrite the dot prefix.
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use log::*;

/// Prefix marking a basename as hidden under the Unix convention.
pub const PREFIX: &str = ".";

/// A path split into its directory and final segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    directory: PathBuf,
    basename: OsString,
    dot_prefixed: bool,
}

/// Parse a path into its parts.
///
/// The basename is the last segment of the path text, ignoring trailing
/// separators, so `.` and `..` are basenames too.  The directory is the text
/// before it with trailing separators removed, except for a root separator.
/// It is empty when the path has no directory component, and a directory of
/// `.` is also reported as empty.  The root and the empty path have an empty
/// basename.
pub fn parse_path<P: AsRef<Path>>(path: P) -> PathParts {
    let path = path.as_ref();
    let units = text::units(path.as_os_str());
    let root = text::root_len(&units);

    let mut end = units.len();
    while end > root && text::is_sep(units[end - 1]) {
        end -= 1;
    }

    let (directory, basename) = if end <= root {
        (path.as_os_str().to_os_string(), OsString::new())
    } else {
        let start = units[root..end]
            .iter()
            .rposition(|u| text::is_sep(*u))
            .map(|i| root + i + 1)
            .unwrap_or(root);
        let mut dir_end = start;
        while dir_end > root && text::is_sep(units[dir_end - 1]) {
            dir_end -= 1;
        }
        if dir_end == root && dir_end < start {
            // keep the root separator
            dir_end += 1;
        }
        (
            text::from_units(&units[..dir_end]),
            text::from_units(&units[start..end]),
        )
    };

    let directory = if directory == OsStr::new(".") {
        PathBuf::new()
    } else {
        PathBuf::from(directory)
    };
    let parts = PathParts {
        directory,
        dot_prefixed: has_prefix(&basename),
        basename,
    };
    trace!("{}: parsed as {:?}", path.display(), parts);
    parts
}

/// Check whether a path's basename starts with a dot.
///
/// This only looks at the path string and never touches the file system.
pub fn is_dot_prefixed<P: AsRef<Path>>(path: P) -> bool {
    parse_path(path).dot_prefixed
}

fn has_prefix(name: &OsStr) -> bool {
    text::units(name).first() == Some(&text::DOT)
}

impl PathParts {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn basename(&self) -> &OsStr {
        &self.basename
    }

    pub fn is_dot_prefixed(&self) -> bool {
        self.dot_prefixed
    }

    /// Reassemble the path, adding or removing the dot prefix as requested.
    ///
    /// A separator is only inserted between a non-empty directory and a
    /// non-empty basename that does not already follow one.
    pub fn to_path(&self, want_prefix: bool) -> PathBuf {
        let name = self.prefixed_name(want_prefix);
        if name.is_empty() {
            self.directory.clone()
        } else {
            self.directory.join(name)
        }
    }

    fn prefixed_name(&self, want_prefix: bool) -> OsString {
        if want_prefix && !self.dot_prefixed && !self.basename.is_empty() {
            let mut name = OsString::from(PREFIX);
            name.push(&self.basename);
            name
        } else if !want_prefix && self.dot_prefixed {
            text::from_units(&text::units(&self.basename)[1..])
        } else {
            self.basename.clone()
        }
    }
}

/// Native path text as code units (bytes on Unix, UTF-16 on Windows).
#[cfg(unix)]
mod text {
    use std::ffi::{OsStr, OsString};
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    pub const DOT: u8 = b'.';

    pub fn units(s: &OsStr) -> Vec<u8> {
        s.as_bytes().to_vec()
    }

    pub fn from_units(units: &[u8]) -> OsString {
        OsString::from_vec(units.to_vec())
    }

    pub fn is_sep(u: u8) -> bool {
        u == b'/'
    }

    pub fn root_len(_units: &[u8]) -> usize {
        0
    }
}

#[cfg(windows)]
mod text {
    use std::ffi::{OsStr, OsString};
    use std::os::windows::ffi::{OsStrExt, OsStringExt};

    pub const DOT: u16 = b'.' as u16;

    pub fn units(s: &OsStr) -> Vec<u16> {
        s.encode_wide().collect()
    }

    pub fn from_units(units: &[u16]) -> OsString {
        OsString::from_wide(units)
    }

    pub fn is_sep(u: u16) -> bool {
        u == b'/' as u16 || u == b'\\' as u16
    }

    /// Length of a drive-letter prefix such as `C:`.
    pub fn root_len(units: &[u16]) -> usize {
        match units {
            [d, c, ..] if *c == b':' as u16 && *d < 0x80 && (*d as u8).is_ascii_alphabetic() => 2,
            _ => 0,
        }
    }
}
