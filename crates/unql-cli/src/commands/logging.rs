//! Log subscriber for the CLI. Everything goes to stderr so stdout carries only the tree.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "UNQL_LOG";

const DEFAULT_FILTER: &str = "unql=info";
const GRAMMAR_DIRECTIVE: &str = "unql_lib::parser=trace";

pub fn init(debug_parsing: bool, ansi: bool) {
    let mut filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if debug_parsing {
        if let Ok(directive) = GRAMMAR_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
