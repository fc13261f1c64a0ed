//! Pieces shared by every subcommand: driver setup and diagnostics output.

use unql_lib::{Driver, InputStream};

pub fn driver(max_depth: Option<u32>) -> Driver {
    match max_depth {
        Some(depth) => Driver::new().with_recursion_fuel(Some(depth)),
        None => Driver::new(),
    }
}

/// Renders the diagnostics of a syntax failure against the query source.
pub fn print_diagnostics(err: &unql_lib::Error, input: &InputStream<'_>, name: &str, color: bool) {
    if let unql_lib::Error::SyntaxError(diagnostics) = err {
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .source(input.as_str())
                .path(name)
                .colored(color)
                .render()
        );
    }
}
