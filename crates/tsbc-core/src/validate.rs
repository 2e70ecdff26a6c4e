//! Normalizers and validators for user-supplied choices
//!
//! Normalizers only fill in defaults; they never reject. Validators answer
//! membership questions against the [`registry`](crate::registry). Callers
//! decide what an invalid value means.

use std::path::{Component, Path};

use crate::registry::{self, DEFAULT_PACKAGE_MANAGER, PROJECT_TYPES};

/// Default an absent project type to the first catalog entry
pub fn normalize_project_type(candidate: Option<&str>) -> String {
    match candidate {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => registry::default_project_type().to_string(),
    }
}

/// Default an absent package manager to `npm`
pub fn normalize_package_manager(candidate: Option<&str>) -> String {
    match candidate {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_PACKAGE_MANAGER.to_string(),
    }
}

/// True iff `candidate` is exactly `npm`, `yarn` or `pnpm`
pub fn is_valid_package_manager(candidate: &str) -> bool {
    registry::package_manager(candidate).is_some()
}

/// True iff `candidate` is a catalog entry
pub fn is_valid_project_type(candidate: &str) -> bool {
    PROJECT_TYPES.contains(&candidate)
}

/// True iff `candidate` names a single directory below the working directory
///
/// Empty names, `.`, `..`, absolute paths and anything with a separator are
/// rejected.
pub fn is_valid_project_name(candidate: &str) -> bool {
    if candidate.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(candidate).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}
