use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

mod args;
mod bootstrap;
mod di;
mod report;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(args::normalize_args(std::env::args_os()));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Lookup failed");
            println!("ERROR\t{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    debug!("dnsq v{}", env!("CARGO_PKG_VERSION"));

    let request = cli.to_request(&config);
    print!("{}", report::render_banner(&request));

    let use_case = di::resolve_query_use_case();
    let resolution = use_case.execute(&request).await?;

    print!("{}", report::render_resolution(&resolution));
    Ok(())
}
