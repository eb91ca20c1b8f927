//! Durable secret storage.
//!
//! Stores the session token in `<base>/secrets.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::paths;

/// Fixed key the session token is stored under.
pub const TOKEN_KEY: &str = "userToken";

/// Durable key-value secret storage collaborator.
///
/// Implementations report faults as errors; they never corrupt the stored
/// value silently. `SessionStore` is the only caller for the token key.
pub trait TokenStore: Send + Sync {
    /// Reads the stored token. `Ok(None)` means no token is stored.
    ///
    /// # Errors
    /// Returns an error on any storage fault.
    fn get(&self) -> Result<Option<String>>;

    /// Stores the token, overwriting any previous value.
    ///
    /// # Errors
    /// Returns an error on any storage fault.
    fn set(&self, token: &str) -> Result<()>;

    /// Deletes the stored token. Deleting an absent token is not an error.
    ///
    /// # Errors
    /// Returns an error on any storage fault.
    fn delete(&self) -> Result<()>;
}

/// File-backed secret store.
///
/// A flat JSON string map so future secrets can share the file without a
/// format change; the session token is one key in it.
#[derive(Debug, Clone)]
pub struct SecretFile {
    path: PathBuf,
}

impl SecretFile {
    /// Creates a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a store at the default location under the mealdeck home.
    pub fn at_default_path() -> Self {
        Self::new(paths::secrets_path())
    }

    /// Returns the path this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read secrets from {}", self.path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse secrets from {}", self.path.display()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(entries).context("Failed to serialize secrets")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

impl TokenStore for SecretFile {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.load()?.get(TOKEN_KEY).cloned())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.save(&entries)
    }

    fn delete(&self) -> Result<()> {
        let mut entries = self.load()?;
        if entries.remove(TOKEN_KEY).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Returns a masked version of a token for display (first 8 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "***".to_string();
    }
    format!("{}...", &token[..8])
}
