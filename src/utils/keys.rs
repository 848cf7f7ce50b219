use chrono::Utc;

/// Storage key for an uploaded submission file. Characters of the original
/// filename outside `[A-Za-z0-9._-]` become `_`, so the extension's dot
/// survives for later hints.
pub fn submission_key(filename: &str) -> String {
    format!("submissions/{}-{}", Utc::now().timestamp_millis(), sanitize(filename))
}

fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

/// Extension hint derived from a storage key, e.g. `submissions/1-a.rs` → `rs`.
pub fn extension_hint(key: &str) -> Option<&str> {
    let filename = key.rsplit('/').next()?;
    let (_, extension) = filename.rsplit_once('.')?;

    if extension.is_empty() {
        None
    } else {
        Some(extension)
    }
}
