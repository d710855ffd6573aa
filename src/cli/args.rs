use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "doc_extract")]
#[command(about = "A tool for parallel document table extraction")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process all documents in a directory with a bounded worker pool
    Process {
        /// Directory containing input documents
        input_directory: PathBuf,

        /// Output directory for extracted text artifacts
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,

        /// Number of parallel workers (default: CPU count x 2)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Simulated extraction latency in milliseconds
        #[arg(long, default_value = "100")]
        latency_ms: u64,
    },

    /// Run the scalability sweep across worker-count configurations
    Benchmark {
        /// Directory containing input documents
        input_directory: PathBuf,

        /// Root directory for benchmark outputs and reports
        #[arg(short, long, default_value = "benchmarks")]
        output: PathBuf,

        /// Worker counts to test (baseline W=1 is always included)
        #[arg(short, long, value_delimiter = ',', default_value = "2,3,5,8,10")]
        workers: Vec<usize>,

        /// Simulated extraction latency in milliseconds
        #[arg(long, default_value = "100")]
        latency_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process_command() {
        let cli = Cli::parse_from(["doc_extract", "process", "inputs", "--workers", "4"]);
        match cli.command {
            Commands::Process {
                input_directory,
                workers,
                latency_ms,
                ..
            } => {
                assert_eq!(input_directory, PathBuf::from("inputs"));
                assert_eq!(workers, Some(4));
                assert_eq!(latency_ms, 100);
            }
            _ => panic!("Expected process command"),
        }
    }

    #[test]
    fn test_parse_benchmark_worker_list() {
        let cli = Cli::parse_from(["doc_extract", "benchmark", "inputs", "--workers", "2,4,8"]);
        match cli.command {
            Commands::Benchmark { workers, .. } => {
                assert_eq!(workers, vec![2, 4, 8]);
            }
            _ => panic!("Expected benchmark command"),
        }
    }
}
