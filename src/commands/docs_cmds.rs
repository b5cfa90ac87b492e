use crate::commands::context::AppContext;
use crate::services::api::HttpTransport;
use crate::services::docs::Documentation;
use crate::types::errors::AppResult;

/// Documentation for `project`. Docs embedded in the project listing are
/// reused; otherwise the backend generates them.
pub async fn project_documentation<T: HttpTransport>(
    ctx: &AppContext<T>,
    project: &str,
) -> AppResult<Documentation> {
    let projects = ctx.client.list_projects().await?;
    match projects.iter().find(|p| p.name == project) {
        Some(summary) => ctx.client.documentation_for(summary).await,
        None => {
            log::debug!("'{}' not in listing, generating directly", project);
            ctx.client.generate_docs(project).await
        }
    }
}
