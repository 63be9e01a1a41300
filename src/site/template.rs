use std::fs;
use std::path::{Path, PathBuf};

use super::SiteError;

/// Token the front-end build leaves where the pool data goes.
pub const PLACEHOLDER: &str = "__POOL_DATA_JSON__";

/// The built `index.html`, checked to contain the placeholder.
#[derive(Debug, Clone)]
pub struct Template {
    path: PathBuf,
    html: String,
    occurrences: usize,
}

impl Template {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref().to_path_buf();
        let html = fs::read_to_string(&path).map_err(|source| SiteError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_html(path, html)
    }

    pub fn from_html(path: PathBuf, html: String) -> Result<Self, SiteError> {
        let occurrences = html.matches(PLACEHOLDER).count();
        if occurrences == 0 {
            return Err(SiteError::MissingPlaceholder { path });
        }
        if occurrences > 1 {
            tracing::warn!(
                path = %path.display(),
                occurrences,
                "Placeholder appears more than once, replacing all"
            );
        }
        Ok(Self {
            path,
            html,
            occurrences,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    pub fn render(&self, payload: &str) -> String {
        self.html.replace(PLACEHOLDER, payload)
    }
}
