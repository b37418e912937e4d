use thiserror::Error;

/// Everything that can go wrong between the form and the spreadsheet.
///
/// The first three variants are produced at connect time and put the server
/// into degraded mode; the last two are produced per request. Callers match
/// on the variant instead of parsing message text.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Configuration error: {details}")]
    Configuration { details: String },
    #[error("Authentication with the spreadsheet service failed: {details}")]
    Authentication { details: String },
    #[error("Spreadsheet '{spreadsheet_id}' was not found or is not shared with the service account")]
    SheetNotFound { spreadsheet_id: String },
    #[error("Missing form field '{field}'")]
    MissingField { field: &'static str },
    #[error("Spreadsheet call failed: {details}")]
    RemoteCall { details: String },
}
