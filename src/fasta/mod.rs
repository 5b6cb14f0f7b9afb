pub mod parser;
pub mod record;

pub use parser::{load_fasta, load_fasta_with, FastaError, FastaOptions, FastaReader};
pub use record::{Fasta, FastaRecord};
