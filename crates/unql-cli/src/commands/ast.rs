//! Show the syntax tree of a query.

use super::CommandError;
use super::query_loader::QueryOrigin;
use super::run_common;

pub struct AstArgs {
    pub origin: QueryOrigin,
    pub raw: bool,
    pub spans: bool,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) -> Result<(), CommandError> {
    let query = args.origin.load()?;
    let input = query.stream()?;

    let tree = match run_common::driver(args.max_depth).parse_stream(&input) {
        Ok(tree) => tree,
        Err(err) => {
            run_common::print_diagnostics(&err, &input, query.name(), args.color);
            return Err(err.into());
        }
    };

    let dump = tree
        .printer()
        .raw(args.raw)
        .with_trivia(args.raw)
        .with_spans(args.spans)
        .dump();
    print!("{dump}");
    Ok(())
}
