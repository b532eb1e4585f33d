//! Filename validation and resolution against the config directory

use std::path::{Component, Path, PathBuf};

use super::GatewayError;

/// Required suffix for servable files
pub const YAML_SUFFIX: &str = ".yaml";

/// Reject missing names, non-YAML names and anything containing `..`.
///
/// This is a substring test, not normalization. `a..b.yaml` is rejected too.
pub fn validate_file_name(file: Option<&str>) -> Result<&str, GatewayError> {
    match file {
        Some(name) if name.ends_with(YAML_SUFFIX) && !name.contains("..") => Ok(name),
        _ => Err(GatewayError::InvalidFileName),
    }
}

/// Join `base` with the normal components of `file_name`.
///
/// Root, prefix and `.` components are dropped, so an absolute name such as
/// `/etc/app.yaml` still lands under `base`.
pub fn resolve(base: &Path, file_name: &str) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in Path::new(file_name).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
    path
}

/// Whether `canonical_file` lies under `canonical_base`. Both must already be canonical.
pub fn is_contained(canonical_base: &Path, canonical_file: &Path) -> bool {
    canonical_file.starts_with(canonical_base) && canonical_file != canonical_base
}
