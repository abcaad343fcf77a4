//! Validation for the `[session]` section.

use crate::schema::ParleyConfig;

use super::helpers::{validate_non_blank, validate_range};

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &ParleyConfig) {
    let session = &config.session;

    validate_range(errors, "session.max_history", session.max_history, 1, 1000);
    validate_non_blank(errors, "session.persona", &session.persona);
}
