pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

/// Parse arguments and dispatch to the selected command
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input_directory,
            output,
            workers,
            latency_ms,
        } => {
            commands::execute_process(commands::ProcessConfig {
                input_directory,
                output,
                workers,
                latency_ms,
            })
            .await
        }
        Commands::Benchmark {
            input_directory,
            output,
            workers,
            latency_ms,
        } => {
            commands::execute_benchmark(commands::BenchmarkConfig {
                input_directory,
                output,
                workers,
                latency_ms,
            })
            .await
        }
    }
}
