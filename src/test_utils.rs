use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use crate::services::api::transport::{ApiRequest, ApiResponse, HttpTransport, TransportError};
use crate::services::api::ProjectsClient;
use crate::services::events::RecordingSink;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body.as_bytes().to_vec())));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".into())))
    }
}

/// Client against `http://backend.test` with a recording sink.
pub fn fake_client(transport: FakeTransport) -> (ProjectsClient<FakeTransport>, Arc<RecordingSink>) {
    init_test_logger();
    let sink = Arc::new(RecordingSink::new());
    let client = ProjectsClient::new(transport, "http://backend.test/", sink.clone());
    (client, sink)
}
