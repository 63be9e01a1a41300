pub mod normalizer;
pub mod pipeline;

pub use normalizer::{decode_details, decode_stats, normalize};
pub use pipeline::run_injection;
