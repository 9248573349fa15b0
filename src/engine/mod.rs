mod batch;

pub use batch::{BatchResult, BatchScanner};
