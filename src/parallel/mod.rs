pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, evaluate_batch, score_batch, BatchEntry};
pub use pool::WorkerPool;
