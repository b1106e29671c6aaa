use std::path::Path;
use std::path::PathBuf;

/// The game page could not be read at startup.
#[derive(Debug)]
pub struct TemplateError(PathBuf, std::io::Error);

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error loading template {}: {}", self.0.display(), self.1)
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.1)
    }
}

/// Browser client for the WebSocket game, read once when the server starts.
#[derive(Debug, Clone)]
pub struct Page(String);

impl From<&str> for Page {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

impl Page {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map(Self)
            .map_err(|e| TemplateError(path.to_path_buf(), e))
            .inspect(|_| log::info!("loaded game page {}", path.display()))
    }

    pub fn html(&self) -> &str {
        &self.0
    }
}
