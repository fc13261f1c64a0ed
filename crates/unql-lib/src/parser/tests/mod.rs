mod grammar;
mod recovery;

use crate::input::InputStream;
use crate::parser::{Parse, parse};
use crate::tree::SyntaxTree;

fn parse_text(input: &str) -> Parse {
    parse(&InputStream::from_text(input).unwrap()).unwrap()
}

/// CST without trivia. Asserts the parse is clean.
fn dump_cst(input: &str) -> String {
    let parse = parse_text(input);
    assert!(
        parse.is_valid(),
        "unexpected errors: {}",
        parse.diagnostics().printer().render()
    );
    SyntaxTree::new(parse.syntax()).printer().raw(true).dump()
}

fn dump_cst_full(input: &str) -> String {
    let parse = parse_text(input);
    SyntaxTree::new(parse.syntax())
        .printer()
        .raw(true)
        .with_trivia(true)
        .dump()
}

/// CST of a parse that is expected to fail, errors and all.
fn dump_cst_invalid(input: &str) -> String {
    let parse = parse_text(input);
    assert!(!parse.is_valid(), "expected errors for {input:?}");
    SyntaxTree::new(parse.syntax()).printer().raw(true).dump()
}

/// One-line diagnostics. Asserts at least one error.
fn dump_diagnostics(input: &str) -> String {
    let parse = parse_text(input);
    assert!(!parse.is_valid(), "expected errors for {input:?}");
    parse.diagnostics().printer().render()
}
