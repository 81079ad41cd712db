use sha2::{Digest, Sha256};

/// Number of digest bytes kept for a task id. Ten hex characters is plenty
/// for deduplication within a single process.
const ID_BYTES: usize = 5;

/// Derives the content-addressed id for a task.
///
/// Hashes the task text concatenated with the decimal group id and keeps the
/// first five digest bytes, hex-encoded. Identical (text, group) pairs always
/// yield identical ids, which is what makes duplicate detection work.
pub fn derive(text: &str, group: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(group.to_string().as_bytes());
    hex::encode(&hasher.finalize()[..ID_BYTES])
}
