use anyhow::Result;
use clap::Parser;

use rootgate_core::checklist::Checklist;
use rootgate_core::env::HostEnvironment;
use rootgate_core::report::{model::ToolInfo, render};

mod args;

fn main() -> Result<()> {
    env_logger::init();

    let args = args::Args::parse();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let (checklist, provenance) = match &args.checklist {
        Some(path) => Checklist::from_json_file(path)?,
        None => (Checklist::builtin(), Checklist::builtin_info()),
    };

    let mut env = HostEnvironment::new(&args.sysroot);
    if let Some(path) = &args.package_list {
        env = env.with_package_index(path);
    }
    if let Some(path) = &args.build_prop {
        env = env.with_build_prop(path);
    }

    let report = rootgate_core::assess(&env, &checklist, provenance, tool);

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    std::process::exit(report.verdict.exit_code);
}
