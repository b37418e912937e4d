use std::collections::HashMap;

use chrono::{DateTime, Local};
use error_stack::report;

use crate::error::RegistryError;

/// Every stored registration carries this literal in the status column.
pub const STATUS_VERIFIED: &str = "verified";

/// Server-side submission timestamp format, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The three fields a device owner submits through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub mac_address: String,
    pub api_key: String,
    pub end_date: String,
}

impl RegistrationForm {
    /// Builds a form from the submitted field map. Field names match the
    /// HTML form inputs: `mac`, `apikey`, `enddate`. Presence is the only
    /// validation performed.
    pub fn from_fields(
        mut fields: HashMap<String, String>,
    ) -> error_stack::Result<Self, RegistryError> {
        let mut take = |field: &'static str| {
            fields
                .remove(field)
                .ok_or_else(|| report!(RegistryError::MissingField { field }))
        };

        Ok(RegistrationForm {
            mac_address: take("mac")?,
            api_key: take("apikey")?,
            end_date: take("enddate")?,
        })
    }
}

/// One row of the remote sheet: the submitted fields plus the status
/// literal and the server-side timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub mac_address: String,
    pub api_key: String,
    pub end_date: String,
    pub status: String,
    pub timestamp: String,
}

impl RegistrationRecord {
    pub fn new(form: RegistrationForm, submitted_at: DateTime<Local>) -> Self {
        RegistrationRecord {
            mac_address: form.mac_address,
            api_key: form.api_key,
            end_date: form.end_date,
            status: STATUS_VERIFIED.to_string(),
            timestamp: submitted_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Cells in the column order of the remote sheet:
    /// `[mac, api_key, end_date, status, timestamp]`.
    pub fn row(&self) -> [&str; 5] {
        [
            &self.mac_address,
            &self.api_key,
            &self.end_date,
            &self.status,
            &self.timestamp,
        ]
    }
}
