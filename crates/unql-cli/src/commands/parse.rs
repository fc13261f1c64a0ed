//! Parse a query, dump its tree and walk it.

use unql_lib::TreeFormat;

use super::CommandError;
use super::query_loader::QueryOrigin;
use super::run_common;
use super::walker::LoggingWalker;

pub struct ParseArgs {
    pub origin: QueryOrigin,
    pub dump: Option<TreeFormat>,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: ParseArgs) -> Result<(), CommandError> {
    let query = args.origin.load()?;
    let input = query.stream()?;

    let driver = run_common::driver(args.max_depth).with_tree_dump(args.dump);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut walker = LoggingWalker::new();

    match driver.run_stream(&input, &mut out, &mut walker) {
        Ok(_) => {
            tracing::debug!(nodes = walker.visited(), "walk finished");
            Ok(())
        }
        Err(err) => {
            run_common::print_diagnostics(&err, &input, query.name(), args.color);
            Err(err.into())
        }
    }
}
