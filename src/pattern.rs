use std::fmt;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

/// A recursive glob anchored at a base directory, e.g. `/proj/lib/**/*.rb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePattern {
    base: PathBuf,
    glob: String,
    full: PathBuf,
}

impl FilePattern {
    pub fn new(base: impl Into<PathBuf>, glob: impl Into<String>) -> Self {
        let base = base.into();
        let glob = glob.into();
        let full = base.join(&glob);
        Self { base, glob, full }
    }

    /// Directory the glob is evaluated against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The glob relative to [`base`](Self::base).
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Base and glob joined into one path-shaped pattern.
    pub fn as_path(&self) -> &Path {
        &self.full
    }

    pub fn matcher(&self) -> Result<GlobMatcher, globset::Error> {
        Ok(GlobBuilder::new(&self.glob)
            .literal_separator(true)
            .build()?
            .compile_matcher())
    }

    /// Files under the base matching the glob, sorted by path.
    ///
    /// A base directory that does not exist yields no files.
    pub fn files(&self) -> Result<Vec<PathBuf>, FilePatternError> {
        if !self.base.is_dir() {
            return Ok(Vec::new());
        }

        let matcher = self.matcher()?;
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.base) {
            let entry = entry?;
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            let rel_path = entry.path().strip_prefix(&self.base).unwrap_or(entry.path());
            if matcher.is_match(rel_path) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full.display())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FilePatternError {
    #[error("invalid glob: {0}")]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
