//! Validate a query without printing its tree.

use super::CommandError;
use super::query_loader::QueryOrigin;
use super::run_common;

pub struct CheckArgs {
    pub origin: QueryOrigin,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> Result<(), CommandError> {
    let query = args.origin.load()?;
    let input = query.stream()?;

    let result = run_common::driver(args.max_depth).parse_stream(&input);
    if let Err(err) = result {
        run_common::print_diagnostics(&err, &input, query.name(), args.color);
        return Err(CommandError::Query(err));
    }

    // Silent on success (like cargo check)
    Ok(())
}
