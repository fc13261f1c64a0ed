use crate::parser::tests::{dump_cst_invalid, dump_diagnostics, parse_text};

#[test]
fn empty_input() {
    insta::assert_snapshot!(dump_diagnostics(""), @"error at 0..0: expected `SELECT`: found end of input");
    insta::assert_snapshot!(dump_cst_invalid(""), @"Root");
}

#[test]
fn whitespace_only_input() {
    insta::assert_snapshot!(
        dump_diagnostics("   \n"),
        @"error at 4..4: expected `SELECT`: found end of input"
    );
}

#[test]
fn select_without_projection() {
    insta::assert_snapshot!(dump_diagnostics("SELECT"), @"error at 6..6: expected an expression after `SELECT`");
}

#[test]
fn select_followed_by_where() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT WHERE x = 1"),
        @"error at 7..12: expected an expression after `SELECT`"
    );
    assert_eq!(parse_text("SELECT WHERE x = 1").error_count(), 1);
}

#[test]
fn where_without_condition() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * WHERE"),
        @"error at 14..14: expected an expression after `WHERE`"
    );
}

#[test]
fn missing_right_operand() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * WHERE a AND"),
        @"error at 20..20: expected an expression after `AND`"
    );
}

#[test]
fn missing_by_after_order() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * ORDER name"),
        @"error at 15..19: expected `BY` after `ORDER`"
    );
    insta::assert_snapshot!(dump_cst_invalid("SELECT * ORDER name"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        OrderClause
          KwOrder "ORDER"
          SortTerm
            Property
              Id "name"
    "#);
}

#[test]
fn dangling_dot_in_property() {
    insta::assert_snapshot!(
        dump_diagnostics("SELECT * WHERE x."),
        @"error at 17..17: expected a property name after `.`"
    );
}

#[test]
fn missing_colon_in_member() {
    insta::assert_snapshot!(dump_diagnostics(r#"SELECT {"a" 1}"#), @"error at 12..13: expected `:`");
}

#[test]
fn minus_without_number() {
    insta::assert_snapshot!(dump_diagnostics("SELECT -x"), @"error at 8..9: expected an expression after `-`");
    assert_eq!(parse_text("SELECT -x").error_count(), 1);
}
