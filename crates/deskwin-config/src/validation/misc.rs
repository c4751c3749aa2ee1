//! Validation for the snapshot channel settings.

use crate::schema::DeskwinConfig;

use super::helpers::validate_range;

pub(crate) fn validate_events(errors: &mut Vec<String>, config: &DeskwinConfig) {
    validate_range(errors, "events.capacity", config.events.capacity, 1, 4096);
}
