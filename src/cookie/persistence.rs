use super::jar::CookieJar;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub trait Persistence: Sized {
    fn save_to_file(&self, path: &Path) -> Result<()>;
    fn load_from_file(path: &Path, now: DateTime<Utc>) -> Result<Self>;
}

impl Persistence for CookieJar {
    fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cookie directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string(self).context("Failed to serialize cookies")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write cookie file: {}", path.display()))?;

        debug!(path = %path.display(), cookies = self.len(), "cookie jar saved");
        Ok(())
    }

    /// A missing file is an empty jar; expired cookies are dropped on load.
    fn load_from_file(path: &Path, now: DateTime<Utc>) -> Result<Self> {
        if !path.exists() {
            return Ok(CookieJar::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cookie file: {}", path.display()))?;
        let mut jar: CookieJar = toml::from_str(&content)
            .with_context(|| format!("Failed to parse cookie file: {}", path.display()))?;

        let purged = jar.purge_expired(now);
        info!(path = %path.display(), cookies = jar.len(), purged, "cookie jar loaded");
        Ok(jar)
    }
}
