//! Window identity set and stacking validation.

use crate::schema::DeskwinConfig;

use super::helpers::validate_unique;

/// Validate the identity set and the floor/seed relationship.
pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &DeskwinConfig) {
    let windows = &config.windows;

    if windows.identities.is_empty() {
        errors.push("windows.identities must not be empty".into());
    }

    for key in &windows.identities {
        if key.as_str().trim().is_empty() {
            errors.push("windows.identities contains an empty key".into());
        }
    }

    validate_unique(
        errors,
        "windows.identities",
        windows.identities.iter().map(|k| k.as_str()),
    );

    let seed = windows.resolved_seed();
    if seed <= windows.floor {
        errors.push(format!(
            "windows.seed = {seed} must be greater than windows.floor = {}",
            windows.floor
        ));
    }
}
