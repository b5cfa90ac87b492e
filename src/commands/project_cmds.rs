use std::fmt::Write;

use crate::commands::context::AppContext;
use crate::services::api::{HttpTransport, ProjectSummary};
use crate::types::errors::AppResult;

pub async fn list_projects<T: HttpTransport>(
    ctx: &AppContext<T>,
) -> AppResult<Vec<ProjectSummary>> {
    ctx.client.list_projects().await
}

pub async fn delete_project<T: HttpTransport>(ctx: &AppContext<T>, project: &str) -> AppResult<()> {
    ctx.client.delete_project(project).await?;
    log::info!("Deleted project '{}'", project);
    Ok(())
}

/// One line per project: name, status, and the description when known.
pub fn format_projects(projects: &[ProjectSummary]) -> String {
    if projects.is_empty() {
        return "No projects yet\nUpload a project folder to get started\n".to_string();
    }

    let mut out = String::new();
    for project in projects {
        let status = project.status.as_deref().unwrap_or("unknown");
        let _ = write!(out, "{}  [{}]", project.name, status);
        if let Some(description) = project
            .info
            .as_ref()
            .and_then(|info| info.description.as_deref())
        {
            let first_line = description.lines().next().unwrap_or_default();
            let _ = write!(out, "  {first_line}");
        }
        out.push('\n');
    }
    out
}
