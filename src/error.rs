//! Error type covering every fallible operation of the crate.

use crate::fasta::FastaError;
use crate::sampling::SampleError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Fasta(#[from] FastaError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
