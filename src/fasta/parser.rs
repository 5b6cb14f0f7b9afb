use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fasta::{Fasta, FastaRecord};

/// Errors raised when reading a FASTA file.
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    /// Returned when two records share a name.
    #[error("FASTA {} contains duplicate header {name}", .path.display())]
    DuplicateHeader { path: PathBuf, name: String },

    /// Returned when sequence data appears before the first header.
    #[error("FASTA {} has sequence data before any header on line {line}", .path.display())]
    MissingHeader { path: PathBuf, line: usize },

    /// Returned when a header line holds no name.
    #[error("FASTA {} has an empty header on line {line}", .path.display())]
    EmptyHeader { path: PathBuf, line: usize },

    #[error("failed to read FASTA {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings for reading FASTA files.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FastaOptions {
    /// Whether residues are converted to upper case.
    uppercase: bool,
    /// Whether records are keyed by the whole header instead of its first word.
    long_names: bool,
}

impl Default for FastaOptions {
    fn default() -> Self {
        FastaOptions::new()
    }
}

impl FastaOptions {
    /// Defaults: residues are upper-cased, records are keyed by the first word of the header.
    pub fn new() -> FastaOptions {
        FastaOptions {
            uppercase: true,
            long_names: false,
        }
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn with_long_names(mut self, long_names: bool) -> Self {
        self.long_names = long_names;
        self
    }

    pub fn uppercase(&self) -> bool {
        self.uppercase
    }

    pub fn long_names(&self) -> bool {
        self.long_names
    }

    /// Splits a header line, without the leading `>`, into a name and a description.
    fn split_header(&self, header: &str) -> Option<(String, Option<String>)> {
        let header = header.trim();
        if self.long_names {
            return (!header.is_empty()).then(|| (String::from(header), None));
        }
        let (name, description) = match header.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (header, None),
        };
        if name.is_empty() {
            return None;
        }
        Some((
            String::from(name),
            description.filter(|d| !d.is_empty()).map(String::from),
        ))
    }
}

/// An iterator over the records of a FASTA file, without storing the whole file in memory.
/// Useful for large files.
pub struct FastaReader<R: BufRead> {
    lines: Lines<R>,
    /// The file the data is read from, for error messages.
    path: PathBuf,
    options: FastaOptions,
    /// The number of lines read so far.
    line: usize,
    /// The header of the record being read.
    header: Option<(String, Option<String>)>,
    seq: Vec<u8>,
    done: bool,
}

impl FastaReader<BufReader<File>> {
    /// Opens a FASTA file for reading.
    pub fn from_path(path: &Path, options: FastaOptions) -> Result<Self, FastaError> {
        let file = File::open(path).map_err(|source| FastaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FastaReader::new(BufReader::new(file), path, options))
    }
}

impl<R: BufRead> FastaReader<R> {
    /// Reads FASTA data from a reader. The path is only used in error messages.
    pub fn new(reader: R, path: &Path, options: FastaOptions) -> FastaReader<R> {
        FastaReader {
            lines: reader.lines(),
            path: path.to_path_buf(),
            options,
            line: 0,
            header: None,
            seq: Vec::new(),
            done: false,
        }
    }

    /// Builds a record from the accumulated sequence.
    fn make_record(&mut self, name: String, description: Option<String>) -> FastaRecord {
        let mut seq = std::mem::take(&mut self.seq);
        if self.options.uppercase {
            seq.make_ascii_uppercase();
        }
        FastaRecord {
            name,
            description,
            seq,
        }
    }

    /// Stops the iteration with an error.
    fn fail(&mut self, err: FastaError) -> Option<Result<FastaRecord, FastaError>> {
        self.done = true;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let raw_ln = match self.lines.next() {
                Some(Ok(raw_ln)) => raw_ln,
                Some(Err(source)) => {
                    let path = self.path.clone();
                    return self.fail(FastaError::Io { path, source });
                }
                None => {
                    // Yielding the last record.
                    self.done = true;
                    let (name, description) = self.header.take()?;
                    return Some(Ok(self.make_record(name, description)));
                }
            };
            self.line += 1;

            let ln = raw_ln.trim();
            if ln.is_empty() {
                continue;
            }
            if let Some(header) = ln.strip_prefix('>') {
                let Some(header) = self.options.split_header(header) else {
                    let err = FastaError::EmptyHeader {
                        path: self.path.clone(),
                        line: self.line,
                    };
                    return self.fail(err);
                };
                if let Some((name, description)) = self.header.replace(header) {
                    return Some(Ok(self.make_record(name, description)));
                }
            } else if self.header.is_some() {
                self.seq.extend_from_slice(ln.as_bytes());
            } else {
                let err = FastaError::MissingHeader {
                    path: self.path.clone(),
                    line: self.line,
                };
                return self.fail(err);
            }
        }
    }
}

impl Fasta {
    /// Reads all records from FASTA data. The path is only used in error messages.
    pub fn from_reader(
        reader: impl BufRead,
        path: &Path,
        options: FastaOptions,
    ) -> Result<Fasta, FastaError> {
        collect_records(FastaReader::new(reader, path, options), path)
    }
}

fn collect_records<R: BufRead>(reader: FastaReader<R>, path: &Path) -> Result<Fasta, FastaError> {
    let mut fasta = Fasta::new();
    for record in reader {
        fasta
            .insert(record?)
            .map_err(|dup| FastaError::DuplicateHeader {
                path: path.to_path_buf(),
                name: dup.name,
            })?;
    }
    Ok(fasta)
}

/// Loads a FASTA file, upper-casing residues and keying records by the first word of the header.
pub fn load_fasta(path: &Path) -> Result<Fasta, FastaError> {
    load_fasta_with(path, FastaOptions::default())
}

/// Loads a FASTA file with the given options.
pub fn load_fasta_with(path: &Path, options: FastaOptions) -> Result<Fasta, FastaError> {
    let fasta = collect_records(FastaReader::from_path(path, options)?, path)?;
    debug!(path = %path.display(), records = fasta.size(), "loaded FASTA");
    Ok(fasta)
}
