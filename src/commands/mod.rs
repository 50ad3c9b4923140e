//! Command implementations
//!
//! Pure command logic returning result structs; printing lives in `output`.

mod benchmark;
mod solve;
mod train;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveResult, TurnRecord, run_solve};
pub use train::{TrainSummary, run_train};
