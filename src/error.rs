use std::path::PathBuf;

/// Errors surfaced by [`ProjectContext`](crate::ProjectContext) and the test
/// environment setup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid project root: {0}")]
    InvalidPath(String),

    #[error("test framework bootstrap failed")]
    Bootstrap(#[source] anyhow::Error),

    #[error("registering shared examples failed")]
    SharedExamples(#[source] anyhow::Error),

    #[error("setup failed while loading {}", path.display())]
    SetupLoadFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("enumerating support files under {}", root.display())]
    SupportWalk {
        root: PathBuf,
        #[source]
        source: crate::pattern::FilePatternError,
    },

    #[error("legacy runtime quirks could not be applied")]
    Quirks(#[source] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
