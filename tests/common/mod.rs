use std::sync::Arc;

use uniadmin_rust::backend::mock::MockBackend;
use uniadmin_rust::backend::{Backend, Transport};

/// Backend wired to an in-memory mock transport, plus a handle to the mock
/// for seeding rows, injecting failures and counting requests.
pub struct TestContext {
    pub backend: Backend,
    pub mock: Arc<MockBackend>,
}

pub fn context() -> TestContext {
    let mock = Arc::new(MockBackend::new());
    let transport: Arc<dyn Transport> = mock.clone();
    TestContext {
        backend: Backend::with_transport(transport),
        mock,
    }
}
