use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use unql_lib::InputStream;

/// Where the query text comes from, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrigin {
    path: Option<PathBuf>,
    text: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("query is required: use a positional file argument, '-' for stdin, or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryOrigin {
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        Self { path, text }
    }

    pub fn load(&self) -> Result<LoadedQuery, LoadError> {
        if let Some(text) = &self.text {
            return Ok(LoadedQuery {
                name: "<query>".to_string(),
                content: Content::Text(text.clone()),
            });
        }

        match self.path.as_deref() {
            Some(path) if path.as_os_str() == "-" => load_stdin(),
            Some(path) => load_file(path),
            None => Err(LoadError::Missing),
        }
    }
}

/// Query text held in memory for the duration of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuery {
    name: String,
    content: Content,
}

/// Inline text is already decoded; files and stdin are raw bytes read as Latin-1.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Bytes(Vec<u8>),
}

impl LoadedQuery {
    /// Display name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stream(&self) -> unql_lib::Result<InputStream<'_>> {
        match &self.content {
            Content::Text(text) => InputStream::from_text(text),
            Content::Bytes(bytes) => InputStream::from_bytes(bytes),
        }
    }
}

fn load_stdin() -> Result<LoadedQuery, LoadError> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedQuery {
        name: "<stdin>".to_string(),
        content: Content::Bytes(buf),
    })
}

fn load_file(path: &Path) -> Result<LoadedQuery, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedQuery {
        name: path.display().to_string(),
        content: Content::Bytes(bytes),
    })
}
