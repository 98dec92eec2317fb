use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// File name split into its parts. `extension` keeps the leading dot and is
/// empty when the name has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub name: String,
    pub stem: String,
    pub extension: String,
}

impl PathParts {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| Error::InvalidPath(format!("{} has no file name", path.display())))?;
        let name = to_utf8(name, path)?;
        let stem = to_utf8(path.file_stem().unwrap_or_default(), path)?;
        let extension = match path.extension() {
            Some(ext) => format!(".{}", to_utf8(ext, path)?),
            None => String::new(),
        };

        Ok(Self {
            name,
            stem,
            extension,
        })
    }
}

/// Joins `file_name` onto the current working directory.
pub fn file_in_cwd(file_name: &str) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(file_name))
}

fn to_utf8(part: &std::ffi::OsStr, path: &Path) -> Result<String> {
    part.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidPath(format!("{} is not valid UTF-8", path.display())))
}
