pub mod error;
pub mod mock;
pub mod query;
pub mod transport;

pub use error::BackendError;
pub use query::{SortDirection, TableHandle};
pub use transport::{ApiMethod, ApiRequest, Transport};

use std::sync::Arc;

use serde_json::Value;

use crate::config::AppConfig;
use transport::HttpTransport;

/// Single configured handle to the hosted backend. All data access flows
/// through it; it owns no business logic.
#[derive(Clone)]
pub struct Backend {
    transport: Arc<dyn Transport>,
}

impl Backend {
    /// Connect over HTTP using the configured project URL and anon key.
    pub fn connect(config: &AppConfig) -> Result<Self, BackendError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(config)?),
        })
    }

    /// Build a backend over any transport. Tests inject `mock::MockBackend`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Start a table-scoped query or mutation.
    pub fn from(&self, table: &str) -> TableHandle {
        TableHandle::new(Arc::clone(&self.transport), table)
    }

    /// Invoke a named backend procedure with a fixed parameter object.
    pub async fn rpc(&self, function: &str, params: Value) -> Result<Value, BackendError> {
        let request =
            ApiRequest::new(ApiMethod::Post, format!("rpc/{}", function)).with_body(params);
        self.transport.execute(request).await
    }
}
