/// Spreadsheet connection settings.
///
/// The service-account key itself is never part of the config file; only the
/// name of the environment variable holding it is.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    #[serde(default = "default_credentials_env")]
    pub credentials_env: Box<str>,
    /// When true, a failed connection aborts startup instead of putting the
    /// server into degraded mode.
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_credentials_env() -> Box<str> {
    "GOOGLE_CREDENTIALS_JSON".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_omitted() {
        let config: SpreadsheetConfig =
            serde_json::from_str(r#"{"spreadsheet_id": "abc123"}"#).unwrap();
        assert_eq!(config.spreadsheet_id.as_ref(), "abc123");
        assert_eq!(config.credentials_env.as_ref(), "GOOGLE_CREDENTIALS_JSON");
        assert!(!config.fail_fast);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: SpreadsheetConfig = serde_json::from_str(
            r#"{"spreadsheet_id": "abc123", "credentials_env": "SHEETS_KEY", "fail_fast": true}"#,
        )
        .unwrap();
        assert_eq!(config.credentials_env.as_ref(), "SHEETS_KEY");
        assert!(config.fail_fast);
    }
}
