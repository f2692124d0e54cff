use std::fs;
use std::io;
use std::iter::once;
use std::os::windows::ffi::OsStrExt;
use std::os::windows::fs::MetadataExt;
use std::path::Path;

use log::*;
use winapi::um::fileapi::SetFileAttributesW;
use winapi::um::winnt::{FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_NORMAL};

use super::HiddenAttribute;

/// The Windows `FILE_ATTRIBUTE_HIDDEN` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsAttribute;

impl HiddenAttribute for WindowsAttribute {
    const APPLIES: bool = true;

    fn read_hidden(&self, path: &Path) -> io::Result<bool> {
        let meta = fs::symlink_metadata(path)?;
        Ok(meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
    }

    fn set_hidden(&self, path: &Path, hidden: bool) -> io::Result<()> {
        let mut attrs = fs::symlink_metadata(path)?.file_attributes();
        if hidden {
            attrs |= FILE_ATTRIBUTE_HIDDEN;
        } else {
            attrs &= !FILE_ATTRIBUTE_HIDDEN;
        }
        if attrs == 0 {
            attrs = FILE_ATTRIBUTE_NORMAL;
        }

        debug!("{}: setting attributes {:#x}", path.display(), attrs);
        let wide: Vec<u16> = path.as_os_str().encode_wide().chain(once(0)).collect();
        // SAFETY: `wide` is a NUL-terminated UTF-16 string that outlives the call.
        let rc = unsafe { SetFileAttributesW(wide.as_ptr(), attrs) };
        if rc == 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
