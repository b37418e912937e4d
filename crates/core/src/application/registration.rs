use chrono::Local;
use tracing::{info, instrument};

use crate::domain::registration::{RegistrationForm, RegistrationRecord};
use crate::error::RegistryError;
use crate::ports::registration_sink::RegistrationSink;

/// Turns an accepted form into a timestamped record and appends it to the
/// sink. Returns the stored record so callers can log or display it.
#[instrument(skip_all, fields(mac = %form.mac_address))]
pub async fn submit_registration(
    sink: &dyn RegistrationSink,
    form: RegistrationForm,
) -> error_stack::Result<RegistrationRecord, RegistryError> {
    let record = RegistrationRecord::new(form, Local::now());
    sink.append_registration(&record).await?;
    info!("registration appended");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use error_stack::report;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        rows: Mutex<Vec<RegistrationRecord>>,
        fail_with: Option<String>,
    }

    #[async_trait::async_trait]
    impl RegistrationSink for RecordingSink {
        async fn append_registration(
            &self,
            record: &RegistrationRecord,
        ) -> error_stack::Result<(), RegistryError> {
            if let Some(message) = &self.fail_with {
                return Err(report!(RegistryError::RemoteCall {
                    details: message.clone(),
                }));
            }
            self.rows.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn form() -> RegistrationForm {
        let fields: HashMap<String, String> = [
            ("mac", "AA:BB:CC:DD:EE:FF"),
            ("apikey", "xyz123"),
            ("enddate", "2025-12-31"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        RegistrationForm::from_fields(fields).unwrap()
    }

    #[tokio::test]
    async fn appends_exactly_one_timestamped_row() {
        let sink = RecordingSink::default();
        let record = submit_registration(&sink, form()).await.unwrap();

        let rows = sink.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], record);
        assert_eq!(record.status, "verified");
        assert!(NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn sink_failure_propagates_and_appends_nothing() {
        let sink = RecordingSink {
            rows: Mutex::new(Vec::new()),
            fail_with: Some("quota exceeded".to_string()),
        };
        let report = submit_registration(&sink, form()).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            RegistryError::RemoteCall { .. }
        ));
        assert!(sink.rows.lock().unwrap().is_empty());
    }
}
