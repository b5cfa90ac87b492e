use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(about = "Upload project folders to the documentation generator and browse the results", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend origin, overrides DOCGEN_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    pub max_tree_depth: Option<usize>,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            max_tree_depth: self.max_tree_depth,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Zip a folder locally without uploading it.
    Pack {
        dir: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Zip a folder and submit it to the backend.
    Upload { dir: PathBuf },

    /// List processed projects.
    List,

    Delete { project: String },

    /// Show documentation for a project, generating it when needed.
    Docs { project: String },

    /// Render a project structure tree.
    Tree {
        /// Project id to fetch from the backend.
        project: Option<String>,

        /// Read the structure from a local JSON file instead.
        #[arg(long, conflicts_with = "project")]
        file: Option<PathBuf>,

        /// Directory keys to show collapsed (e.g. `root/src`).
        #[arg(long, value_delimiter = ',')]
        collapse: Vec<String>,
    },
}

impl Commands {
    /// `pack` and `tree --file` work without the backend.
    pub fn needs_backend(&self) -> bool {
        !matches!(
            self,
            Commands::Pack { .. } | Commands::Tree { file: Some(_), .. }
        )
    }
}
