mod cli;
mod commands;

use std::process::ExitCode;

use cli::{AstParams, CheckParams, ParseParams, build_cli};

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::logging::init(params.debug_parsing, params.color.should_colorize());
            commands::parse::run(params.into())
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::logging::init(false, params.color.should_colorize());
            commands::check::run(params.into())
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::logging::init(false, params.color.should_colorize());
            commands::ast::run(params.into())
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(commands::report(&err)),
    }
}
