use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use docgen_lib::services::api::transport::{
    ApiRequest, ApiResponse, HttpTransport, TransportError,
};
use docgen_lib::services::api::ProjectsClient;
use docgen_lib::services::events::RecordingSink;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn with_responses(responses: Vec<(u16, &str)>) -> Self {
        Self {
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| ApiResponse::new(status, body.as_bytes().to_vec()))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError("unexpected request".into()))
    }
}

pub fn client(
    responses: Vec<(u16, &str)>,
) -> (ProjectsClient<ScriptedTransport>, Arc<RecordingSink>) {
    init_test_logger();
    let sink = Arc::new(RecordingSink::new());
    let client = ProjectsClient::new(
        ScriptedTransport::with_responses(responses),
        "http://localhost:8000",
        sink.clone(),
    );
    (client, sink)
}
