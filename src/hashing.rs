use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use md5::{Digest, Md5};

/// The size of the blocks the file is read in.
const CHUNK_SIZE: usize = 4096;

/// Calculates the MD5 hash of a file, as 32 lowercase hex digits.
/// The file is streamed, so it is never held in memory.
pub fn file_md5(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, File::open(path)?);
    let mut hasher = Md5::new();
    std::io::copy(&mut reader, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
