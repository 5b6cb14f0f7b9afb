pub mod min_distance;
pub mod pairwise;

pub use min_distance::{sample_with_minimum_distance, SampleError};
pub use pairwise::{pairwise, Pairwise};
