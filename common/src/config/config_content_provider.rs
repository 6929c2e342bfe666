use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Read {
                path: self.file_path.display().to_string(),
                source: err,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|err| ConfigError::Write {
            path: self.file_path.display().to_string(),
            source: err,
        })
    }
}

#[derive(Default)]
pub struct InMemoryConfigProvider {
    content: Mutex<Option<String>>,
}

impl InMemoryConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content: Mutex::new(content) }
    }
}

impl ConfigContentProvider for InMemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        let content = self.content.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(content.clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        let mut current = self.content.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(content.to_string());
        Ok(())
    }
}
