//! UNQL front end: input stream, lexer, parser and a read-only tree accessor layer.
//!
//! # Example
//!
//! ```
//! use unql_lib::Driver;
//!
//! let mut out = Vec::new();
//! let mut labels = Vec::new();
//! let tree = Driver::new()
//!     .run("SELECT * WHERE abv > 7", &mut out, &mut |root: unql_lib::Node<'_>| {
//!         labels.push(root.label().to_string());
//!     })
//!     .expect("valid query");
//!
//! assert_eq!(labels, ["Root"]);
//! assert!(tree.root().child_count() >= 1);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod driver;
pub mod input;
pub mod parser;
pub mod tree;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use driver::{Driver, TreeFormat};
pub use input::{Encoding, InputStream};
pub use tree::{Node, SyntaxTree, TreeConsumer, TreePrinter};

/// Errors that can occur while driving a parse.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input buffer was absent or malformed. Detected before lexing.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// One or more grammar violations. The tally is `error_count()` of the diagnostics.
    #[error("query parsing failed with {} errors", .0.error_count())]
    SyntaxError(Diagnostics),

    #[error("failed to write tree dump: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Number of syntax errors, if this is a syntax failure.
    pub fn error_count(&self) -> Option<usize> {
        match self {
            Error::SyntaxError(diagnostics) => Some(diagnostics.error_count()),
            _ => None,
        }
    }
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` without dumping or walking the tree.
pub fn parse(source: &str) -> Result<SyntaxTree> {
    Driver::new().parse_str(source)
}

/// Entry point of the CLI-facing deployment: dump the tree to stdout, then hand the
/// root to `consumer`.
pub fn run<C>(source: &str, consumer: &mut C) -> Result<SyntaxTree>
where
    C: TreeConsumer + ?Sized,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Driver::new()
        .with_tree_dump(Some(TreeFormat::Text))
        .run(source, &mut out, consumer)
}
