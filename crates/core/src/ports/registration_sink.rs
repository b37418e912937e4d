use crate::domain::registration::RegistrationRecord;
use crate::error::RegistryError;

/// Destination for accepted registrations. The production implementation
/// appends to a Google spreadsheet; tests substitute a recording mock.
#[async_trait::async_trait]
pub trait RegistrationSink: Send + Sync {
    /// Appends one registration as a single row. The append is assumed
    /// atomic on the remote side; no ordering is guaranteed across
    /// concurrent callers.
    async fn append_registration(
        &self,
        record: &RegistrationRecord,
    ) -> error_stack::Result<(), RegistryError>;
}
