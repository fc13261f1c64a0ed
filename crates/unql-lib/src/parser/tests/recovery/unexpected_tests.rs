use crate::parser::tests::{dump_cst_invalid, dump_diagnostics, parse_text};

#[test]
fn missing_select_keyword() {
    insta::assert_snapshot!(dump_diagnostics("* WHERE x = 1"), @"error at 0..1: expected `SELECT`: found `*`");
    insta::assert_snapshot!(dump_cst_invalid("* WHERE x = 1"), @r#"
    Root
      Error
        Star "*"
        KwWhere "WHERE"
        Id "x"
        Eq "="
        Int "1"
    "#);
}

#[test]
fn trailing_clause_out_of_order() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * LIMIT 10 WHERE a"),
        @"error at 18..23: unexpected input after the statement: `WHERE`"
    );
}

#[test]
fn trailing_garbage() {
    insta::assert_snapshot!(dump_diagnostics("SELECT * WHERE a # b"), @"error at 17..18: unrecognized input `#`");
}

#[test]
fn garbage_in_expression_position() {
    insta::assert_snapshot!(dump_diagnostics("SELECT * WHERE @"), @"error at 15..16: unrecognized input `@`");
    insta::assert_snapshot!(dump_cst_invalid("SELECT * WHERE @"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          Error
            Garbage "@"
    "#);
}

#[test]
fn chained_comparison() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * WHERE a = 1 = 2"),
        @"error at 21..22: unexpected token: `=` cannot follow another comparison"
    );
}

#[test]
fn unquoted_member_key() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT {a: 1}"),
        @"error at 8..9: expected a string key: found `a`"
    );
}

#[test]
fn one_error_per_position() {
    // Both the missing projection and the trailing input point at `)`.
    let parse = parse_text("SELECT )");
    assert_eq!(parse.error_count(), 1);
}

#[test]
fn original_invalid_queries_fail() {
    for input in ["SELECT", "SELECT WHERE x = 1", "* WHERE x = 1", "SELECT * WHERE"] {
        assert!(parse_text(input).error_count() >= 1, "{input}");
    }
}

#[test]
fn not_as_comparison_operand() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT a = NOT b"),
        @"error at 11..14: unexpected token: `NOT` cannot be an operand of `=`; wrap it in parentheses"
    );
    insta::assert_snapshot!(dump_cst_invalid("SELECT a = NOT b"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          BinaryExpr
            Property
              Id "a"
            Eq "="
            PrefixExpr
              KwNot "NOT"
              Property
                Id "b"
    "#);
}

#[test]
fn not_as_arithmetic_operand() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT a + NOT b"),
        @"error at 11..14: unexpected token: `NOT` cannot be an operand of `+`; wrap it in parentheses"
    );
}
