use std::fmt::{Display, Formatter};
use std::slice::Iter;

use fxhash::FxHashMap;

/// A single sequence read from a FASTA file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FastaRecord {
    /// The key of the record, the first word of its header.
    pub name: String,
    /// The rest of the header line, if any.
    pub description: Option<String>,
    /// The raw residues.
    pub seq: Vec<u8>,
}

impl FastaRecord {
    pub fn new(name: &str, description: Option<&str>, seq: &[u8]) -> FastaRecord {
        FastaRecord {
            name: String::from(name),
            description: description.map(String::from),
            seq: seq.to_vec(),
        }
    }

    /// The length of the sequence.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns the 0-based, end-exclusive slice `start..end` of the sequence.
    /// Bounds past the end of the sequence are clamped.
    pub fn fetch(&self, start: usize, end: usize) -> &[u8] {
        let end = end.min(self.len());
        &self.seq[start.min(end)..end]
    }
}

impl Display for FastaRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => writeln!(f, ">{} {}", self.name, description)?,
            None => writeln!(f, ">{}", self.name)?,
        }
        f.write_str(&String::from_utf8_lossy(&self.seq))
    }
}

/// The records of a FASTA file, in file order, indexed by name.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Fasta {
    records: Vec<FastaRecord>,
    index: FxHashMap<String, usize>,
}

impl Fasta {
    /// Initializes a new empty collection.
    pub fn new() -> Fasta {
        Fasta::default()
    }

    /// Adds a record to the collection.
    /// If a record with the same name exists, the collection is unchanged and the record is
    /// handed back.
    pub fn insert(&mut self, record: FastaRecord) -> Result<(), FastaRecord> {
        if self.index.contains_key(&record.name) {
            return Err(record);
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Gets a record by name.
    pub fn get(&self, name: &str) -> Option<&FastaRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    /// Returns the 0-based, end-exclusive slice `start..end` of the named sequence.
    pub fn fetch(&self, name: &str, start: usize, end: usize) -> Option<&[u8]> {
        self.get(name).map(|record| record.fetch(start, end))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The names of the records, in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn iter(&self) -> Iter<FastaRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Fasta {
    type Item = &'a FastaRecord;
    type IntoIter = Iter<'a, FastaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
