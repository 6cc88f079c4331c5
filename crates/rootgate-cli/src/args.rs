use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "rootgate",
    version,
    about = "Heuristic device-integrity assessment for the local host"
)]
pub struct Args {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON checklist overriding the builtin evidence lists
    #[arg(long)]
    pub checklist: Option<PathBuf>,

    /// Treat this directory as the filesystem root under assessment
    #[arg(long, default_value = "/")]
    pub sysroot: PathBuf,

    /// Installed-package index (resolved under the sysroot)
    #[arg(long)]
    pub package_list: Option<PathBuf>,

    /// Build properties file carrying ro.build.tags (resolved under the sysroot)
    #[arg(long)]
    pub build_prop: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
