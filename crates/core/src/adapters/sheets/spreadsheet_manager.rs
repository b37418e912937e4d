use error_stack::{report, Report, ResultExt};
use google_sheets4::{api::ValueRange, hyper, hyper_rustls, Sheets};
use std::fmt::Debug;
use tracing::{info, instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::registration::RegistrationRecord;
use crate::error::RegistryError;
use crate::ports::registration_sink::RegistrationSink;

use super::{auth, http_client, value_range_factory::ValueRangeFactory};

/// Live handle to the configured spreadsheet. Built once at startup and
/// shared read-only with request handling for the life of the process.
pub struct SpreadsheetManager {
    config: SpreadsheetConfig,
    hub: Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    worksheet_title: String,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ spreadsheet_id: {:?}, worksheet: {:?} }}",
            self.config.spreadsheet_id, self.worksheet_title
        )
    }
}

impl SpreadsheetManager {
    /// Authenticates against the Sheets API and opens the configured
    /// spreadsheet. Rows are appended to the first worksheet, whose title
    /// is resolved here.
    #[instrument(name = "SpreadsheetManager::connect", skip_all, fields(spreadsheet_id = %config.spreadsheet_id))]
    pub async fn connect(
        config: SpreadsheetConfig,
    ) -> error_stack::Result<Self, RegistryError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        let worksheet_title = Self::first_worksheet_title(&hub, &config).await?;
        info!(worksheet = %worksheet_title, "connected to spreadsheet");

        Ok(SpreadsheetManager {
            config,
            hub,
            worksheet_title,
        })
    }

    pub fn worksheet_title(&self) -> &str {
        &self.worksheet_title
    }

    async fn first_worksheet_title(
        hub: &Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
        config: &SpreadsheetConfig,
    ) -> error_stack::Result<String, RegistryError> {
        let (_, spreadsheet) = hub
            .spreadsheets()
            .get(&config.spreadsheet_id)
            .doit()
            .await
            .map_err(|e| open_error(e, &config.spreadsheet_id))?;

        spreadsheet
            .sheets
            .and_then(|sheets| sheets.into_iter().next())
            .and_then(|sheet| sheet.properties)
            .and_then(|properties| properties.title)
            .ok_or_else(|| {
                report!(RegistryError::SheetNotFound {
                    spreadsheet_id: config.spreadsheet_id.to_string(),
                })
            })
            .attach_printable("spreadsheet has no worksheets")
    }
}

#[async_trait::async_trait]
impl RegistrationSink for SpreadsheetManager {
    #[instrument(skip_all, fields(mac = %record.mac_address))]
    async fn append_registration(
        &self,
        record: &RegistrationRecord,
    ) -> error_stack::Result<(), RegistryError> {
        let value_range = ValueRange::from_single_row(&record.row());
        let range = format!("'{}'!A1", self.worksheet_title);

        self.hub
            .spreadsheets()
            .values_append(value_range, &self.config.spreadsheet_id, &range)
            .value_input_option("USER_ENTERED")
            .insert_data_option("INSERT_ROWS")
            .doit()
            .await
            .map(|_| ())
            .map_err(|e| {
                report!(RegistryError::RemoteCall {
                    details: e.to_string(),
                })
            })
            .attach_printable_lazy(|| {
                format!("failed to append row to '{}'", self.worksheet_title)
            })
    }
}

/// Maps an open-time API failure onto the error taxonomy: 404 means the
/// spreadsheet does not exist (or is not shared with the service account),
/// 401/403 and token trouble mean the identity was rejected.
fn open_error(error: google_sheets4::Error, spreadsheet_id: &str) -> Report<RegistryError> {
    use google_sheets4::Error;

    let not_found = || {
        report!(RegistryError::SheetNotFound {
            spreadsheet_id: spreadsheet_id.to_string(),
        })
    };

    match error {
        Error::BadRequest(value) => match value["error"]["code"].as_i64() {
            Some(404) => not_found(),
            Some(401 | 403) => report!(RegistryError::Authentication {
                details: value["error"]["message"]
                    .as_str()
                    .unwrap_or("access denied")
                    .to_string(),
            }),
            _ => report!(RegistryError::RemoteCall {
                details: value.to_string(),
            }),
        },
        Error::MissingToken(source) => report!(RegistryError::Authentication {
            details: source.to_string(),
        }),
        Error::Failure(response) => match response.status().as_u16() {
            404 => not_found(),
            401 | 403 => report!(RegistryError::Authentication {
                details: format!("spreadsheet service returned {}", response.status()),
            }),
            status => report!(RegistryError::RemoteCall {
                details: format!("spreadsheet service returned {}", status),
            }),
        },
        other => report!(RegistryError::RemoteCall {
            details: other.to_string(),
        }),
    }
}
