pub mod benchmark;
pub mod process;

pub use benchmark::{execute_benchmark, BenchmarkConfig};
pub use process::{execute_process, ProcessConfig};
