use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 64;

/// Filesystem-safe, deterministic file name for a cache key:
/// `{sanitized_key}--{short_hash(key)}.json`.
///
/// The hash keeps keys distinct when sanitizing maps them to the same stem.
pub fn cache_filename(key: &str) -> String {
    format!("{}--{}.json", sanitize_key(key), short_hash(key))
}

fn sanitize_key(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for c in key.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' };
        if c == '_' && stem.ends_with('_') {
            continue;
        }
        stem.push(c);
    }
    let mut stem = stem.trim_matches('_').to_string();
    stem.truncate(MAX_STEM_LEN);
    if stem.is_empty() {
        stem.push_str("entry");
    }
    stem
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
