//! Output path resolution
//!
//! Existing artifacts are never overwritten: a taken path gets an
//! incrementing `_copyN` suffix until a free one is found, so repeated
//! identical runs produce `report.xlsx`, `report_copy1.xlsx`, ...

use std::path::{Path, PathBuf};

/// Resolve a free path for `base.ext` inside `dir`
pub fn next_available(dir: &Path, base: &str, ext: &str) -> PathBuf {
    let mut path = dir.join(format!("{}.{}", base, ext));
    let mut counter = 1;
    while path.exists() {
        path = dir.join(format!("{}_copy{}.{}", base, counter, ext));
        counter += 1;
    }
    path
}
