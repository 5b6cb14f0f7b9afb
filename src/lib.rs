//! Utilities for simulating mutations in sequences.
//!
//! The core of the crate is [`sample_with_minimum_distance`], which picks `k` distinct
//! positions in `1..n` that are more than `d` apart, uniformly over all such combinations.
//!
//! ```
//! use mutsim_utils::{pairwise, sample_with_minimum_distance};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut positions = sample_with_minimum_distance(10, 3, 2, &mut rng).unwrap();
//! positions.sort();
//! assert!(pairwise(&positions).all(|(a, b)| b - a > 2));
//! ```
//!
//! The rest are helpers of the command-line tool: FASTA loading ([`fasta`]), file checksums
//! ([`hashing`]), status lines ([`messages`]) and log setup ([`logging`]).

pub mod error;
pub mod fasta;
pub mod hashing;
pub mod logging;
pub mod messages;
pub mod sampling;


pub use error::{Error, Result};
pub use fasta::{load_fasta, Fasta, FastaError, FastaRecord};
pub use hashing::file_md5;
pub use sampling::{pairwise, sample_with_minimum_distance, Pairwise, SampleError};
