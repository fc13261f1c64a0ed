use indoc::indoc;

use crate::parser::tests::{dump_cst_full, parse_text};

#[test]
fn whitespace_preserved() {
    insta::assert_snapshot!(dump_cst_full("SELECT * WHERE x = 1"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Whitespace " "
          Star "*"
        Whitespace " "
        WhereClause
          KwWhere "WHERE"
          Whitespace " "
          BinaryExpr
            Property
              Id "x"
            Whitespace " "
            Eq "="
            Whitespace " "
            Literal
              Int "1"
    "#);
}

#[test]
fn trailing_newline_attached_to_root() {
    let input = indoc! {"
        SELECT *
    "};

    insta::assert_snapshot!(dump_cst_full(input), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Whitespace " "
          Star "*"
      Whitespace "\n"
    "#);
}

#[test]
fn leading_whitespace_attached_to_root() {
    insta::assert_snapshot!(dump_cst_full("  SELECT *"), @r#"
    Root
      Whitespace "  "
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Whitespace " "
          Star "*"
    "#);
}

#[test]
fn source_text_round_trips() {
    for input in [
        "",
        "SELECT * WHERE x = 1",
        "  select  *\n\twhere (a OR  b)\n",
        "SELECT [1, 2",
        "* WHERE x = 1",
        "SELECT * WHERE a # b",
        "SELECT {\"a\" 1}",
    ] {
        let parse = parse_text(input);
        assert_eq!(parse.syntax().text().to_string(), input);
    }
}
