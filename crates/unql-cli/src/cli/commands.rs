//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("unql")
        .about("Parse UNQL queries and walk their syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(check_command())
        .subcommand(ast_command())
}

/// Parse a query, print its tree and hand it to the walker.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse a query and walk its tree")
        .override_usage(
            "\
  unql parse <QUERY>
  unql parse -q <TEXT>
  unql parse -",
        )
        .after_help(
            r#"EXAMPLES:
  unql parse query.unql                 # parse a file
  unql parse -q 'SELECT * WHERE a > 1'  # inline query
  cat query.unql | unql parse -         # read stdin
  unql parse query.unql --format json   # JSON tree dump
  UNQL_LOG=warn unql parse query.unql   # silence the walker"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(no_dump_arg())
        .arg(format_arg())
        .arg(debug_parsing_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Validate a query.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  unql check <QUERY>
  unql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  unql check query.unql                 # silent on success
  unql check -q 'SELECT a ORDER a'      # reports the missing BY"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Show the tree of a query.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a query")
        .override_usage(
            "\
  unql ast <QUERY>
  unql ast -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  unql ast query.unql                   # typed tree
  unql ast query.unql --raw             # CST with whitespace
  unql ast -q 'SELECT a' --raw --spans  # CST with source positions"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}
