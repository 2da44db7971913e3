//! File utilities for log capture and artifact installation.

use std::{
    fs::{File, OpenOptions},
    io::{self, Read},
    path::Path,
};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

/// Open `path` for appending, creating the file if it does not exist.
///
/// Prior content is never truncated; every launch appends to the same stream.
pub fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Replace `destination` with the contents of `source` unconditionally.
///
/// The bytes are staged in a temporary file next to the destination and moved
/// into place with a rename, so a stale artifact is never observed
/// half-written. Permission bits are copied from the source so the installed
/// artifact stays executable.
pub fn replace_file(source: &Path, destination: &Path) -> io::Result<()> {
    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(parent)?;
    let mut reader = File::open(source)?;
    io::copy(&mut reader, staged.as_file_mut())?;

    let permissions = reader.metadata()?.permissions();
    staged.as_file().set_permissions(permissions)?;
    staged
        .persist(destination)
        .map_err(|err| err.error)?;
    Ok(())
}

/// Compute the lowercase hex SHA-256 digest of a file.
pub fn compute_sha256(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
