//! Query and change the hidden state of paths.
use std::fs;
use std::path::{Path, PathBuf};

use log::*;
use tokio::task;

use crate::attribute::{HiddenAttribute, PlatformAttribute};
use crate::error::{HideError, Result};
use crate::path::{is_dot_prefixed, parse_path};

/// Hidden state of a path under both conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HiddenState {
    /// The basename starts with a dot.
    pub unix: bool,
    /// The hidden attribute is set.  Always false where the attribute does
    /// not apply.
    pub windows: bool,
}

impl HiddenState {
    /// Hidden by every convention that applies: the dot prefix, plus the
    /// attribute if `attribute_applies`.
    pub fn is_hidden(&self, attribute_applies: bool) -> bool {
        self.unix && (self.windows || !attribute_applies)
    }

    /// Hidden by at least one convention.
    pub fn should_be_hidden(&self) -> bool {
        self.unix || self.windows
    }
}

/// Hides and reveals paths using a particular attribute store.
///
/// The crate-level functions use a [Hider] with the host platform's
/// attribute store; construct one directly to supply a different store.
#[derive(Debug, Clone, Default)]
pub struct Hider<A = PlatformAttribute> {
    attr: A,
}

impl<A: HiddenAttribute> Hider<A> {
    pub fn new(attr: A) -> Hider<A> {
        Hider { attr }
    }

    pub fn attribute(&self) -> &A {
        &self.attr
    }

    /// Read the hidden state of a path.
    ///
    /// Where the attribute applies, failing to read it (e.g. because the
    /// path does not exist) is an error.  Elsewhere this never touches the
    /// file system.
    pub fn stat<P: AsRef<Path>>(&self, path: P) -> Result<HiddenState> {
        let path = path.as_ref();
        let unix = is_dot_prefixed(path);
        let windows = if A::APPLIES {
            self.attr.read_hidden(path).map_err(|source| {
                error!("{}: cannot read attributes: {}", path.display(), source);
                HideError::ReadAttribute {
                    path: path.to_owned(),
                    source,
                }
            })?
        } else {
            false
        };
        Ok(HiddenState { unix, windows })
    }

    /// Check whether a path is hidden by every applicable convention.
    pub fn is_hidden<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        Ok(self.stat(path)?.is_hidden(A::APPLIES))
    }

    /// Check whether a path is hidden by any convention.
    pub fn should_be_hidden<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        Ok(self.stat(path)?.should_be_hidden())
    }

    /// Hide a path, returning its new location.
    pub fn hide<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        let target = parse_path(path).to_path(true);
        self.change(path, &target, true)
    }

    /// Reveal a path, returning its new location.
    pub fn reveal<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        let target = parse_path(path).to_path(false);
        self.change(path, &target, false)
    }

    /// Rename `before` to `after`, then set the hidden attribute on `after`.
    ///
    /// The rename is attempted even when the two paths are equal, so a
    /// missing source is always reported.  The two steps are not atomic.
    pub fn change(&self, before: &Path, after: &Path, hidden: bool) -> Result<PathBuf> {
        debug!("renaming {} to {}", before.display(), after.display());
        fs::rename(before, after).map_err(|source| {
            error!("{}: rename failed: {}", before.display(), source);
            HideError::Rename {
                from: before.to_owned(),
                to: after.to_owned(),
                source,
            }
        })?;

        if A::APPLIES {
            debug!("{}: setting hidden={}", after.display(), hidden);
            self.attr.set_hidden(after, hidden).map_err(|source| {
                error!("{}: cannot set attributes: {}", after.display(), source);
                HideError::WriteAttribute {
                    path: after.to_owned(),
                    source,
                }
            })?;
        }

        Ok(after.to_owned())
    }
}

/// Non-blocking forms, run on the tokio blocking pool.
impl<A> Hider<A>
where
    A: HiddenAttribute + Clone + Send + 'static,
{
    pub async fn stat_async<P: AsRef<Path>>(&self, path: P) -> Result<HiddenState> {
        self.run_blocking(path.as_ref(), |h, p| h.stat(p)).await
    }

    pub async fn is_hidden_async<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        self.run_blocking(path.as_ref(), |h, p| h.is_hidden(p)).await
    }

    pub async fn should_be_hidden_async<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
        self.run_blocking(path.as_ref(), |h, p| h.should_be_hidden(p)).await
    }

    pub async fn hide_async<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        self.run_blocking(path.as_ref(), |h, p| h.hide(p)).await
    }

    pub async fn reveal_async<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        self.run_blocking(path.as_ref(), |h, p| h.reveal(p)).await
    }

    async fn run_blocking<T, F>(&self, path: &Path, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Hider<A>, &Path) -> Result<T> + Send + 'static,
    {
        let hider = self.clone();
        let path = path.to_owned();
        task::spawn_blocking(move || op(&hider, path.as_path())).await?
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::io;
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;

    use super::*;

    /// In-memory attribute store that behaves like Windows: reading a
    /// missing path fails, and the flag follows the path it was set on.
    #[derive(Debug, Clone, Default)]
    struct MemAttribute {
        hidden: Arc<Mutex<HashSet<PathBuf>>>,
    }

    impl HiddenAttribute for MemAttribute {
        const APPLIES: bool = true;

        fn read_hidden(&self, path: &Path) -> io::Result<bool> {
            fs::symlink_metadata(path)?;
            Ok(self.hidden.lock().unwrap().contains(path))
        }

        fn set_hidden(&self, path: &Path, hidden: bool) -> io::Result<()> {
            fs::symlink_metadata(path)?;
            let mut set = self.hidden.lock().unwrap();
            if hidden {
                set.insert(path.to_owned());
            } else {
                set.remove(path);
            }
            Ok(())
        }
    }

    fn scratch(name: &str, attr: &MemAttribute, hidden: bool) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        attr.set_hidden(&path, hidden).unwrap();
        (dir, path)
    }

    #[test]
    fn test_state_rules() {
        let both = HiddenState {
            unix: true,
            windows: true,
        };
        let prefix = HiddenState {
            unix: true,
            windows: false,
        };
        let attr = HiddenState {
            unix: false,
            windows: true,
        };
        assert!(both.is_hidden(true));
        assert!(!prefix.is_hidden(true));
        assert!(prefix.is_hidden(false));
        assert!(!attr.is_hidden(true));
        assert!(both.should_be_hidden());
        assert!(prefix.should_be_hidden());
        assert!(attr.should_be_hidden());
        assert!(!HiddenState::default().should_be_hidden());
    }

    #[test]
    fn test_windows_unprefixed_unattributed() {
        let hider = Hider::new(MemAttribute::default());
        let (_dir, path) = scratch("temp", hider.attribute(), false);
        assert!(!hider.is_hidden(&path).unwrap());
        assert!(!hider.should_be_hidden(&path).unwrap());
    }

    #[test]
    fn test_windows_prefix_only() {
        let hider = Hider::new(MemAttribute::default());
        let (_dir, path) = scratch(".temp", hider.attribute(), false);
        assert!(!hider.is_hidden(&path).unwrap());
        assert!(hider.should_be_hidden(&path).unwrap());
    }

    #[test]
    fn test_windows_attribute_only() {
        let hider = Hider::new(MemAttribute::default());
        let (_dir, path) = scratch("temp", hider.attribute(), true);
        assert!(!hider.is_hidden(&path).unwrap());
        assert!(hider.should_be_hidden(&path).unwrap());
    }

    #[test]
    fn test_windows_prefixed_attributed() {
        let hider = Hider::new(MemAttribute::default());
        let (_dir, path) = scratch(".temp", hider.attribute(), true);
        assert!(hider.is_hidden(&path).unwrap());
        assert!(hider.should_be_hidden(&path).unwrap());
    }

    #[test]
    fn test_windows_query_missing() {
        let hider = Hider::new(MemAttribute::default());
        let dir = tempfile::tempdir().unwrap();
        for name in ["fake", ".fake"] {
            let path = dir.path().join(name);
            assert!(hider.is_hidden(&path).unwrap_err().is_not_found());
            assert!(hider.should_be_hidden(&path).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn test_windows_hide_sets_attribute() {
        let hider = Hider::new(MemAttribute::default());
        let (dir, path) = scratch("temp", hider.attribute(), false);
        let hidden = hider.hide(&path).unwrap();
        assert_eq!(hidden, dir.path().join(".temp"));
        assert!(!path.exists());
        assert!(hider.attribute().read_hidden(&hidden).unwrap());
        assert!(hider.is_hidden(&hidden).unwrap());
    }

    #[test]
    fn test_windows_hide_attribute_only() {
        let hider = Hider::new(MemAttribute::default());
        let (dir, path) = scratch("temp", hider.attribute(), true);
        let hidden = hider.hide(&path).unwrap();
        assert_eq!(hidden, dir.path().join(".temp"));
        assert!(hider.is_hidden(&hidden).unwrap());
    }

    #[test]
    fn test_windows_reveal_clears_attribute() {
        let hider = Hider::new(MemAttribute::default());
        let (dir, path) = scratch(".temp", hider.attribute(), true);
        let shown = hider.reveal(&path).unwrap();
        assert_eq!(shown, dir.path().join("temp"));
        assert!(!hider.attribute().read_hidden(&shown).unwrap());
        assert!(!hider.should_be_hidden(&shown).unwrap());
    }

    #[test]
    fn test_windows_reveal_attribute_only() {
        let hider = Hider::new(MemAttribute::default());
        let (_dir, path) = scratch("temp", hider.attribute(), true);
        let shown = hider.reveal(&path).unwrap();
        assert_eq!(shown, path);
        assert!(!hider.should_be_hidden(&shown).unwrap());
    }

    #[test]
    fn test_hide_missing_skips_attribute() {
        let hider = Hider::new(MemAttribute::default());
        let dir = tempfile::tempdir().unwrap();
        let err = hider.hide(dir.path().join("fake")).unwrap_err();
        assert!(matches!(err, HideError::Rename { .. }));
        assert!(err.is_not_found());
        assert!(hider.attribute().hidden.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_windows_async_matches_sync() {
        let hider = Hider::new(MemAttribute::default());
        let (dir, path) = scratch("temp", hider.attribute(), false);
        assert!(!hider.is_hidden_async(&path).await.unwrap());
        let hidden = hider.hide_async(&path).await.unwrap();
        assert_eq!(hidden, dir.path().join(".temp"));
        assert!(hider.is_hidden_async(&hidden).await.unwrap());
        let state = hider.stat_async(&hidden).await.unwrap();
        assert_eq!(
            state,
            HiddenState {
                unix: true,
                windows: true
            }
        );
        let shown = hider.reveal_async(&hidden).await.unwrap();
        assert!(!hider.should_be_hidden_async(&shown).await.unwrap());
    }

    #[tokio::test]
    async fn test_windows_async_missing() {
        let hider = Hider::new(MemAttribute::default());
        let dir = tempfile::tempdir().unwrap();
        let err = hider.is_hidden_async(dir.path().join(".fake")).await;
        assert!(err.unwrap_err().is_not_found());
        let err = hider.reveal_async(dir.path().join(".fake")).await;
        assert!(err.unwrap_err().is_not_found());
    }
}
