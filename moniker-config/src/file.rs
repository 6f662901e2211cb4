use std::path::{Path, PathBuf};

use moniker_engine::WellKnownTypes;

use crate::Result;

/// A moniker.toml file with both raw content and the parsed mapping table.
#[derive(Debug)]
pub struct MonikerToml {
    path: PathBuf,
    content: String,
    table: WellKnownTypes,
}

impl MonikerToml {
    /// Open and parse a moniker.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let table = crate::parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            table,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed mapping table.
    pub fn table(&self) -> &WellKnownTypes {
        &self.table
    }

    /// Consume the file, keeping only the table.
    pub fn into_table(self) -> WellKnownTypes {
        self.table
    }
}
