use std::sync::Arc;

use error_stack::Report;

use device_registry_core::error::RegistryError;
use device_registry_core::ports::registration_sink::RegistrationSink;

/// The handle-or-error pair produced by the startup connector, immutable
/// for the life of the process. Cloning is cheap; every request sees the
/// same state, so no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    connection: Result<Arc<dyn RegistrationSink>, Report<RegistryError>>,
}

impl AppState {
    pub fn new(connection: Result<Arc<dyn RegistrationSink>, Report<RegistryError>>) -> Self {
        AppState {
            inner: Arc::new(Inner { connection }),
        }
    }

    pub fn sink(&self) -> Result<&Arc<dyn RegistrationSink>, &Report<RegistryError>> {
        self.inner.connection.as_ref()
    }
}
