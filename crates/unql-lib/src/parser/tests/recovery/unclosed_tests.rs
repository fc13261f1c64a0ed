use crate::parser::tests::{dump_cst_invalid, dump_diagnostics, parse_text};

#[test]
fn unclosed_paren() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * WHERE (a = 1"),
        @"error at 15..21: missing closing `)`; found end of input (related: `(` opened here at 15..16)"
    );
}

#[test]
fn unclosed_array() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT [1, 2"),
        @"error at 7..12: missing closing `]`; found end of input (related: `[` opened here at 7..8)"
    );
    insta::assert_snapshot!(dump_cst_invalid("SELECT [1, 2"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          ArrayLit
            BracketOpen "["
            Literal
              Int "1"
            Comma ","
            Literal
              Int "2"
    "#);
}

#[test]
fn unclosed_object() {
    insta::assert_snapshot!(
        dump_diagnostics(r#"SELECT {"a": 1"#),
        @r#"error at 7..14: missing closing `}`; found end of input (related: `{` opened here at 7..8)"#
    );
}

#[test]
fn unclosed_paren_before_next_clause() {
    insta::assert_snapshot!(dump_diagnostics("SELECT (1 WHERE a = "), @r"
    error at 7..15: missing closing `)`; found `WHERE` (related: `(` opened here at 7..8)
    error at 20..20: expected an expression after `=`
    ");
    assert_eq!(parse_text("SELECT (1 WHERE a = ").error_count(), 2);
}

#[test]
fn mismatched_closer() {
    let parse = parse_text("SELECT (a]");
    assert_eq!(parse.error_count(), 1);
    insta::assert_snapshot!(
        parse.diagnostics().printer().render(),
        @"error at 7..10: missing closing `)`; found `]` (related: `(` opened here at 7..8)"
    );
}
