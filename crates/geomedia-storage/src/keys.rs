//! Shared key generation for storage backends.
//!
//! Key format: `users/{userId}/media/{timestamp_millis}_{filename}`.

use chrono::{DateTime, Utc};

/// Reduce a client-supplied filename to a safe final path component.
/// Path separators and parent references would otherwise let a key escape
/// its `users/{userId}/media/` prefix.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .replace("..", "");
    if base.is_empty() {
        "file".to_string()
    } else {
        base
    }
}

/// Generate a storage key for an upload by the given owner.
///
/// The millisecond timestamp prefix keeps repeated uploads of the same
/// filename from colliding. All backends must use this format.
pub fn upload_key(user_id: &str, filename: &str, uploaded_at: DateTime<Utc>) -> String {
    format!(
        "users/{}/media/{}_{}",
        user_id,
        uploaded_at.timestamp_millis(),
        sanitize_filename(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_upload_key_layout() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let key = upload_key("u1", "photo.jpg", at);
        assert_eq!(key, "users/u1/media/1700000000000_photo.jpg");
    }

    #[test]
    fn test_upload_key_strips_path_components() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let key = upload_key("u1", "../../etc/passwd", at);
        assert_eq!(key, "users/u1/media/1700000000000_passwd");
        assert!(!key.contains(".."));
    }

    #[test]
    fn test_upload_key_empty_filename_falls_back() {
        let at = Utc.timestamp_millis_opt(0).unwrap();
        let key = upload_key("u1", "", at);
        assert_eq!(key, "users/u1/media/0_file");
    }
}
