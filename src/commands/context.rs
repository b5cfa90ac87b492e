use std::sync::Arc;

use crate::services::api::{HttpTransport, ProjectsClient, ReqwestTransport};
use crate::services::config::AppConfig;
use crate::services::locks::upload_lock::UploadLock;
use crate::services::events::{EventSink, LogSink};
use crate::types::errors::AppResult;

/// Everything a command needs, built once per invocation.
pub struct AppContext<T: HttpTransport> {
    pub config: AppConfig,
    pub client: ProjectsClient<T>,
    pub upload_lock: UploadLock,
}

impl<T: HttpTransport> AppContext<T> {
    pub fn new(config: AppConfig, client: ProjectsClient<T>) -> Self {
        Self {
            config,
            client,
            upload_lock: UploadLock::new(),
        }
    }
}

impl AppContext<ReqwestTransport> {
    /// Production context: reqwest transport, events forwarded to `log`.
    /// Fails on an unusable base URL.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        config.validated_api_url()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        let events: Arc<dyn EventSink> = Arc::new(LogSink);
        let client = ProjectsClient::new(transport, config.api_base_url.clone(), events);
        Ok(Self::new(config, client))
    }
}
