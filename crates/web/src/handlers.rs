use std::collections::HashMap;

use axum::{extract::State, response::Html, Form};
use tracing::{error, warn};

use device_registry_core::application::registration::submit_registration;
use device_registry_core::domain::registration::RegistrationForm;

use crate::pages;
use crate::state::AppState;

/// Renders the registration form. No preconditions: the form is served
/// even in degraded mode.
pub async fn index() -> Html<&'static str> {
    Html(pages::INDEX)
}

/// Handles a form submission. Every outcome is a 200 with an HTML body;
/// failures render as error pages instead of HTTP error codes, and nothing
/// propagates past this boundary.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let sink = match state.sink() {
        Ok(sink) => sink,
        Err(report) => {
            warn!("submission rejected, no spreadsheet connection: {report:?}");
            return Html(pages::configuration_error(&report.to_string()));
        }
    };

    let form = match RegistrationForm::from_fields(fields) {
        Ok(form) => form,
        Err(report) => {
            warn!("submission rejected: {report}");
            return Html(pages::submission_error(&report.to_string()));
        }
    };

    match submit_registration(sink.as_ref(), form).await {
        Ok(_) => Html(pages::success()),
        Err(report) => {
            error!("failed to store registration: {report:?}");
            Html(pages::submission_error(&report.to_string()))
        }
    }
}
