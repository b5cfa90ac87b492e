pub mod cli;
pub mod context;
pub mod docs_cmds;
pub mod project_cmds;
pub mod tree_cmds;
pub mod upload_cmds;

use serde::Serialize;

use crate::services::api::HttpTransport;
use crate::services::config::AppConfig;
use crate::services::docs::format_documentation;
use crate::services::tree::{format_rows, RenderOptions, TreeNode};
use cli::{Cli, Commands};
use context::AppContext;
use tree_cmds::TreeSource;

/// Load configuration and run one command. Only commands that talk to the
/// backend build an HTTP client.
pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?.with_overrides(&cli.overrides())?;
    let output = if cli.command.needs_backend() {
        let ctx = AppContext::from_config(config)?;
        execute(&ctx, cli.command, cli.json).await?
    } else {
        execute_local(&config, cli.command, cli.json).await?
    };
    print!("{output}");
    Ok(())
}

/// Run a command that needs no backend (`pack`, `tree --file`).
pub async fn execute_local(
    config: &AppConfig,
    command: Commands,
    json: bool,
) -> anyhow::Result<String> {
    match command {
        Commands::Pack { dir, output } => {
            let report = upload_cmds::pack_folder(&dir, output.as_deref()).await?;
            render(json, &report, |r| {
                format!(
                    "Packed '{}' ({} files, {} bytes) -> {}\n",
                    r.project_name, r.file_count, r.size_bytes, r.output_path
                )
            })
        }
        Commands::Tree {
            file: Some(path),
            collapse,
            ..
        } => {
            let root = tree_cmds::read_tree_file(&path).await?;
            render_tree_rows(config, root, &collapse, json)
        }
        other => anyhow::bail!("{other:?} needs the backend"),
    }
}

/// Run one command and return what should be printed.
pub async fn execute<T: HttpTransport>(
    ctx: &AppContext<T>,
    command: Commands,
    json: bool,
) -> anyhow::Result<String> {
    if !command.needs_backend() {
        return execute_local(&ctx.config, command, json).await;
    }

    match command {
        Commands::Upload { dir } => {
            let receipt = upload_cmds::upload_folder(ctx, &dir).await?;
            render(json, &receipt, |r| match &r.project_id {
                Some(id) => format!("Uploaded '{}' (id: {})\n", r.project_name, id),
                None => format!("Uploaded '{}'\n", r.project_name),
            })
        }
        Commands::List => {
            let projects = project_cmds::list_projects(ctx).await?;
            render(json, &projects, |p| project_cmds::format_projects(p))
        }
        Commands::Delete { project } => {
            project_cmds::delete_project(ctx, &project).await?;
            render(json, &serde_json::json!({ "deleted": project }), |_| {
                format!("Deleted '{project}'\n")
            })
        }
        Commands::Docs { project } => {
            let docs = docs_cmds::project_documentation(ctx, &project).await?;
            render(json, &docs, format_documentation)
        }
        Commands::Tree { project, file, collapse } => {
            let source = TreeSource::from_args(project, file)?;
            let root = tree_cmds::load_tree(ctx, &source).await?;
            render_tree_rows(&ctx.config, root, &collapse, json)
        }
        other => execute_local(&ctx.config, other, json).await,
    }
}

fn render_tree_rows(
    config: &AppConfig,
    root: TreeNode,
    collapse: &[String],
    json: bool,
) -> anyhow::Result<String> {
    let view = tree_cmds::build_view(root, RenderOptions::from(config), collapse);
    let rows = view.rows()?;
    render(json, &rows, |r| format_rows(r))
}

fn render<S: Serialize + ?Sized>(
    json: bool,
    value: &S,
    text: impl FnOnce(&S) -> String,
) -> anyhow::Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(value)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(text(value))
    }
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
