//! modeler-cli: Web Modeler API 的命令行工具
//!
//! Usage:
//!   modeler-cli info                         Show API version and permissions
//!   modeler-cli project <id>                 Show a project and its direct children
//!   modeler-cli file <id>                    Show a file with its content
//!   modeler-cli folder <id>                  Show a folder and its direct children
//!   modeler-cli milestone <id>               Show a milestone
//!   modeler-cli compare <baseline> <other>   Print the milestone comparison link
//!   modeler-cli search-projects [name]       Search projects by name

use anyhow::Context;
use modeler_client::types::{ProjectFilter, ProjectSearch};
use modeler_client::{EnvTokenProvider, ModelerClient, ModelerConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => run(cmd, &args[2..]).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"modeler-cli: Web Modeler API command-line tool

USAGE:
    modeler-cli <COMMAND> [ARGS]

COMMANDS:
    info                        Show API version and permissions
    project <id>                Show a project and its direct children
    file <id>                   Show a file with its content
    folder <id>                 Show a folder and its direct children
    milestone <id>              Show a milestone
    compare <baseline> <other>  Print the milestone comparison link
    search-projects [name]      Search projects, optionally by name
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    CAMUNDA_MODELER_BASE_URL    API root (default https://modeler.cloud.camunda.io/api)
    CAMUNDA_MODELER_TOKEN       Bearer token (if none is stored in the keyring)
    MODELER_HTTP_TIMEOUT_SECS   Request timeout in seconds
    MODELER_PROXY_URL           Proxy for all requests
    RUST_LOG                    Log filter, e.g. modeler_client=debug"#
    );
}

fn cmd_version() {
    println!("modeler-cli {}", env!("CARGO_PKG_VERSION"));
}

async fn run(cmd: &str, args: &[String]) -> anyhow::Result<()> {
    let client = ModelerClient::new(
        ModelerConfig::from_env().with_user_agent_suffix("modeler-cli"),
        Arc::new(EnvTokenProvider::new()),
    )?;

    match cmd {
        "info" => print_json(&client.get_info().await?),
        "project" => print_json(&client.get_project(arg(args, 0, "project id")?).await?),
        "file" => print_json(&client.get_file(arg(args, 0, "file id")?).await?),
        "folder" => print_json(&client.get_folder(arg(args, 0, "folder id")?).await?),
        "milestone" => print_json(&client.get_milestone(arg(args, 0, "milestone id")?).await?),
        "compare" => {
            let link = client
                .get_milestone_comparison(
                    arg(args, 0, "baseline milestone id")?,
                    arg(args, 1, "milestone id")?,
                )
                .await?;
            println!("{link}");
            Ok(())
        }
        "search-projects" => {
            let search = ProjectSearch::new(ProjectFilter {
                name: args.first().cloned(),
                ..Default::default()
            });
            print_json(&client.search_projects(&search).await?)
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command: {other}")
        }
    }
}

fn arg<'a>(args: &'a [String], index: usize, what: &str) -> anyhow::Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing argument: <{what}>"))
}

fn print_json<T: Serialize>(value: &Option<T>) -> anyhow::Result<()> {
    match value {
        Some(v) => println!("{}", serde_json::to_string_pretty(v)?),
        None => println!("(no content)"),
    }
    Ok(())
}
