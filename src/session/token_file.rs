use std::io;
use std::path::{Path, PathBuf};

/// Durable storage for the operator's session token. A tiny JSON object
/// keyed by "user-token", read once at startup to seed the session and
/// rewritten on login/logout.
#[derive(Clone, Debug)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        TokenFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted token, if any. Unreadable or malformed files count as
    /// "no token" rather than an error.
    pub fn load(&self) -> Option<String> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        let json_val = serde_json::from_str::<serde_json::Value>(&text).ok()?;
        let token = json_val.get("user-token")?.as_str()?.to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        let body = serde_json::json!({ "user-token": token });
        std::fs::write(&self.path, serde_json::to_string_pretty(&body)?)
    }

    /// Delete the persisted token. Missing files are fine; other IO errors
    /// are logged and swallowed so logout can never fail on this path.
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), %e, "failed to remove session file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("session.json"));
        assert_eq!(file.load(), None);
        file.save("dummy").unwrap();
        assert_eq!(file.load(), Some("dummy".to_string()));
    }

    #[test]
    fn test_clear_removes_token() {
        let dir = tempfile::tempdir().unwrap();
        let file = TokenFile::new(dir.path().join("session.json"));
        file.save("dummy").unwrap();
        file.clear();
        assert_eq!(file.load(), None);
        // clearing twice is a no-op
        file.clear();
    }

    #[test]
    fn test_malformed_file_counts_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(TokenFile::new(&path).load(), None);
    }
}
