//! Persists rendered output, one file per format

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};

use super::config::OutputFormat;

/// Directory created under the working directory to hold the output files.
pub const OUTPUT_DIR_NAME: &str = "outtree";

pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writer targeting `./outtree`, resolved to an absolute path.
    pub fn in_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|source| Error::CreateOutputDir {
            path: PathBuf::from(OUTPUT_DIR_NAME),
            source,
        })?;
        Ok(Self::new(cwd.join(OUTPUT_DIR_NAME)))
    }

    /// Full path of the file a format is written to.
    pub fn path_for(&self, format: OutputFormat) -> PathBuf {
        self.dir.join(format.file_name())
    }

    /// Create the output directory if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::CreateOutputDir {
            path: self.dir.clone(),
            source,
        })
    }

    /// Write `contents` for `format`, replacing any previous file.
    pub fn write(&self, format: OutputFormat, contents: &str) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.path_for(format);
        fs::write(&path, contents).map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path().join("nested/outtree"));

        let path = writer.write(OutputFormat::Markdown, "- a\n").unwrap();

        assert_eq!(path, tmp.path().join("nested/outtree/tree.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "- a\n");
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let writer = OutputWriter::new(tmp.path());

        writer.write(OutputFormat::Text, "a much longer first version\n").unwrap();
        let path = writer.write(OutputFormat::Text, "short\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_fails_when_dir_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("outtree");
        fs::write(&blocker, "not a dir").unwrap();

        let err = OutputWriter::new(&blocker)
            .write(OutputFormat::Json, "[]")
            .unwrap_err();
        assert!(matches!(err, Error::CreateOutputDir { .. }), "{err}");
    }
}
