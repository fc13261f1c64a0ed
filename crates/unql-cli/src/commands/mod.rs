pub mod ast;
pub mod check;
pub mod logging;
pub mod parse;
pub mod query_loader;
pub mod run_common;
pub mod walker;


use query_loader::LoadError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 4;
pub const EXIT_PARSE_FAILED: u8 = 5;

/// Failure of a subcommand. Diagnostics are already on stderr when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Query(#[from] unql_lib::Error),
}

impl CommandError {
    pub fn exit_status(&self) -> u8 {
        match self {
            CommandError::Load(_) => EXIT_FAILURE,
            CommandError::Query(unql_lib::Error::InvalidInput(_)) => EXIT_INVALID_INPUT,
            CommandError::Query(unql_lib::Error::SyntaxError(_))
            | CommandError::Query(unql_lib::Error::RecursionLimitExceeded) => EXIT_PARSE_FAILED,
            CommandError::Query(unql_lib::Error::Io(_)) => EXIT_FAILURE,
        }
    }
}

/// Prints the closing line for `err` and returns the process exit status.
pub fn report(err: &CommandError) -> u8 {
    match err {
        CommandError::Query(unql_lib::Error::SyntaxError(diagnostics)) => {
            eprintln!(
                "The parser returned {} errors, tree walking aborted.",
                diagnostics.error_count()
            );
        }
        _ => eprintln!("error: {err}"),
    }
    err.exit_status()
}
