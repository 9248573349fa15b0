// Session resampling and candle-shape classification
pub mod classifier;
pub mod resampler;

pub use classifier::{classify, classify_summary};
pub use resampler::{ResampleError, Resampler};
