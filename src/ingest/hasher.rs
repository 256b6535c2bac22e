use std::fs::File;
use std::io;
use std::path::Path;

use sha1::{Digest, Sha1};

/// Length of a hex-encoded SHA-1 digest.
pub const DIGEST_HEX_LEN: usize = 40;

/// Content digest of the file at `path`: 40 lowercase hex characters.
///
/// The file is opened, copied through the hasher and closed before
/// returning; no handle outlives the call. Read errors are returned as-is
/// so the caller can abort its batch.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex_digest(hasher))
}

/// Content digest of an in-memory buffer, same format as [`hash_file`].
#[must_use]
pub fn hash_bytes(data: &[u8]) -> String {
    hex_digest(Sha1::new_with_prefix(data))
}

fn hex_digest(hasher: Sha1) -> String {
    format!("{:x}", hasher.finalize())
}
