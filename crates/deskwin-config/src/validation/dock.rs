//! Dock validation: unique ids, and every openable app maps to a window.

use crate::schema::DeskwinConfig;

use super::helpers::validate_unique;

pub(crate) fn validate_dock(errors: &mut Vec<String>, config: &DeskwinConfig) {
    let apps = &config.dock.apps;

    validate_unique(errors, "dock.apps", apps.iter().map(|a| a.id.as_str()));

    for app in apps {
        if app.id.trim().is_empty() {
            errors.push("dock.apps contains an entry with an empty id".into());
            continue;
        }
        let known = config
            .windows
            .identities
            .iter()
            .any(|key| key.as_str() == app.id);
        if app.can_open && !known {
            errors.push(format!(
                "dock app '{}' can open but is not a window identity",
                app.id
            ));
        }
    }
}
