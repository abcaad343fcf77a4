//! Validation for the `[api]` section.

use crate::schema::ParleyConfig;

use super::helpers::{validate_non_blank, validate_range, validate_range_f64};

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ParleyConfig) {
    let api = &config.api;

    if !(api.endpoint.starts_with("https://") || api.endpoint.starts_with("http://")) {
        errors.push(format!(
            "api.endpoint = {:?} must be an http(s) URL",
            api.endpoint
        ));
    }
    validate_non_blank(errors, "api.model", &api.model);
    validate_non_blank(errors, "api.api_key_env", &api.api_key_env);
    validate_range(errors, "api.max_tokens", api.max_tokens, 1, 32768);
    validate_range_f64(errors, "api.temperature", api.temperature, 0.0, 2.0);
    validate_range_f64(errors, "api.top_p", api.top_p, 0.0, 1.0);
    validate_range(errors, "api.timeout_secs", api.timeout_secs, 1, 600);
}
