//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_rack, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveResult, solve_rack};
