use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::models::{
    ErrorDetail, GenerateDocsResponse, ProjectDetailResponse, ProjectSummary, UploadReceipt,
    UploadResponse,
};
use super::transport::{ApiRequest, ApiResponse, HttpTransport, RequestBody, TransportError};
use crate::services::archive::ArchiveBlob;
use crate::services::docs::Documentation;
use crate::services::events::{ClientEvent, EventSink};
use crate::services::tree::TreeNode;
use crate::types::errors::{AppError, AppResult};

const UPLOAD_FIELD: &str = "file";
const ZIP_MIME: &str = "application/zip";

/// Client for the five backend endpoints.
///
/// Every exchange is reported to the injected [`EventSink`]; the client
/// itself never writes to a global logger.
pub struct ProjectsClient<T: HttpTransport> {
    transport: T,
    base_url: String,
    events: Arc<dyn EventSink>,
}

impl<T: HttpTransport> ProjectsClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, events: Arc<dyn EventSink>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            events,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn events(&self) -> &Arc<dyn EventSink> {
        &self.events
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let method = request.method;
        let url = request.url.clone();
        self.events.emit(ClientEvent::RequestSent {
            method,
            url: url.clone(),
        });

        match self.transport.send(request).await {
            Ok(response) => {
                self.events.emit(ClientEvent::ResponseReceived {
                    method,
                    url,
                    status: response.status,
                });
                Ok(response)
            }
            Err(e) => {
                self.events.emit(ClientEvent::TransportFailed {
                    method,
                    url,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Send a read-style request and decode a successful JSON body.
    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<R> {
        let response = self.fetch(request).await?;
        response
            .json()
            .map_err(|e| AppError::Fetch(format!("Invalid response body: {e}")))
    }

    async fn fetch(&self, request: ApiRequest) -> AppResult<ApiResponse> {
        let response = self
            .exchange(request)
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;
        if !response.is_success() {
            return Err(AppError::Fetch(failure_detail(&response)));
        }
        Ok(response)
    }

    /// `POST /api/projects` with the archive as the `file` part.
    pub async fn upload(&self, blob: &ArchiveBlob) -> AppResult<UploadReceipt> {
        let project = blob.project_name.clone();
        let request = ApiRequest::post(
            self.endpoint("projects"),
            RequestBody::Multipart {
                field: UPLOAD_FIELD.to_string(),
                file_name: blob.file_name(),
                mime: ZIP_MIME.to_string(),
                bytes: blob.bytes.clone(),
            },
        );

        let outcome = match self.exchange(request).await {
            Err(e) => Err(e.to_string()),
            Ok(response) if !response.is_success() => Err(response.status_text()),
            Ok(response) => match response.json::<UploadResponse>() {
                Err(e) => Err(format!("Invalid response body: {e}")),
                Ok(body) if body.is_success() => Ok(body.identifier()),
                Ok(body) => Err(body.error.unwrap_or_else(|| "Upload failed".to_string())),
            },
        };

        match outcome {
            Ok(project_id) => {
                self.events.emit(ClientEvent::UploadAccepted {
                    project: project.clone(),
                    project_id: project_id.clone(),
                });
                Ok(UploadReceipt {
                    project_name: project,
                    project_id,
                })
            }
            Err(reason) => {
                self.events.emit(ClientEvent::UploadRejected {
                    project,
                    reason: reason.clone(),
                });
                Err(AppError::UploadFailed(reason))
            }
        }
    }

    pub async fn list_projects(&self) -> AppResult<Vec<ProjectSummary>> {
        self.fetch_json(ApiRequest::get(self.endpoint("projects")))
            .await
    }

    pub async fn delete_project(&self, project_id: &str) -> AppResult<()> {
        let url = self.endpoint(&format!("projects/{}", urlencoding::encode(project_id)));
        self.fetch(ApiRequest::delete(url)).await.map(|_| ())
    }

    /// `POST /api/generate-docs/{name}`.
    pub async fn generate_docs(&self, project_name: &str) -> AppResult<Documentation> {
        if project_name.trim().is_empty() {
            return Err(AppError::Fetch("Project name is undefined".into()));
        }

        let url = self.endpoint(&format!(
            "generate-docs/{}",
            urlencoding::encode(project_name)
        ));
        let body: GenerateDocsResponse = self
            .fetch_json(ApiRequest::post(url, RequestBody::Empty))
            .await?;

        if body.status.as_deref() != Some("success") {
            return Err(AppError::Fetch(
                body.error
                    .unwrap_or_else(|| "Failed to generate documentation".to_string()),
            ));
        }
        body.documentation
            .ok_or_else(|| AppError::Fetch("Documentation is missing".into()))
    }

    /// Documentation already embedded in the listing is returned as is;
    /// otherwise it is generated.
    pub async fn documentation_for(&self, project: &ProjectSummary) -> AppResult<Documentation> {
        if let Some(existing) = project.embedded_documentation() {
            self.events.emit(ClientEvent::DocumentationReused {
                project: project.name.clone(),
            });
            return Ok(existing.clone());
        }
        self.generate_docs(&project.name).await
    }

    /// `GET /api/projects/{id}`, returning the structure tree.
    pub async fn project_structure(&self, project_id: &str) -> AppResult<TreeNode> {
        let url = self.endpoint(&format!("projects/{}", urlencoding::encode(project_id)));
        let body: ProjectDetailResponse = self.fetch_json(ApiRequest::get(url)).await?;
        body.project
            .and_then(|project| project.structure)
            .ok_or_else(|| AppError::Fetch("Project structure is missing".into()))
    }
}

/// The backend's `detail` message when the body carries one, else the
/// status reason phrase.
fn failure_detail(response: &ApiResponse) -> String {
    response
        .json::<ErrorDetail>()
        .ok()
        .and_then(ErrorDetail::message)
        .unwrap_or_else(|| response.status_text())
}
