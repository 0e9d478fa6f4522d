use std::collections::HashMap;

#[cfg(feature = "fs")]
pub use file::JsonFileStorage;

/// Key-value persistence the task store writes through.
///
/// Implementations are expected to be synchronous: a successful `write` means
/// the value is durable before the call returns.
pub trait Storage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "fs")]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow};
    use tempfile::NamedTempFile;
    use tracing::{debug, info};

    use super::Storage;

    /// Stores each key as `<data_dir>/<key>.json`.
    #[derive(Debug, Clone)]
    pub struct JsonFileStorage {
        pub data_dir: PathBuf,
    }

    impl JsonFileStorage {
        #[tracing::instrument(skip(data_dir))]
        pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
            let data_dir = data_dir.to_path_buf();
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("failed to create {}", data_dir.display()))?;

            info!(data_dir = %data_dir.display(), "opened file storage");
            Ok(Self { data_dir })
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            self.data_dir.join(format!("{key}.json"))
        }
    }

    impl Storage for JsonFileStorage {
        #[tracing::instrument(skip(self))]
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            let path = self.path_for(key);
            if !path.exists() {
                debug!(file = %path.display(), "no stored value");
                return Ok(None);
            }

            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            Ok(Some(raw))
        }

        #[tracing::instrument(skip(self, value))]
        fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            let path = self.path_for(key);
            debug!(file = %path.display(), bytes = value.len(), "writing atomically");

            let mut temp = NamedTempFile::new_in(&self.data_dir)?;
            temp.write_all(value.as_bytes())?;
            temp.flush()?;
            temp.persist(&path)
                .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;
            Ok(())
        }
    }
}
