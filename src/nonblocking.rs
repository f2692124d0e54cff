//! Async forms of the crate-level operations.
//!
//! Each function runs its blocking counterpart on the tokio blocking pool,
//! so it must be called from within a tokio runtime.  Once started, an
//! operation runs to completion even if its future is dropped.
use std::path::{Path, PathBuf};

use crate::attribute::PlatformAttribute;
use crate::error::Result;
use crate::hider::{HiddenState, Hider};

fn platform() -> Hider<PlatformAttribute> {
    Hider::new(PlatformAttribute::default())
}

pub async fn stat<P: AsRef<Path>>(path: P) -> Result<HiddenState> {
    platform().stat_async(path).await
}

pub async fn is_hidden<P: AsRef<Path>>(path: P) -> Result<bool> {
    platform().is_hidden_async(path).await
}

pub async fn should_be_hidden<P: AsRef<Path>>(path: P) -> Result<bool> {
    platform().should_be_hidden_async(path).await
}

pub async fn hide<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    platform().hide_async(path).await
}

pub async fn reveal<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    platform().reveal_async(path).await
}
