use indoc::indoc;

use crate::parser::tests::{dump_cst, parse_text};

#[test]
fn select_star_where() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE x = 1"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            Property
              Id "x"
            Eq "="
            Literal
              Int "1"
    "#);
}

#[test]
fn select_star_only() {
    insta::assert_snapshot!(dump_cst("SELECT *"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
    "#);
}

#[test]
fn select_expression() {
    insta::assert_snapshot!(dump_cst("SELECT beer.name"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Property
            Id "beer"
            Dot "."
            Id "name"
    "#);
}

#[test]
fn all_clauses() {
    let input = indoc! {"
        SELECT *
        WHERE abv > 7 AND type = 'beer'
        ORDER BY name DESC, abv
        LIMIT 10
        OFFSET 20
    "};

    insta::assert_snapshot!(dump_cst(input), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            BinaryExpr
              Property
                Id "abv"
              Gt ">"
              Literal
                Int "7"
            KwAnd "AND"
            BinaryExpr
              Property
                Id "type"
              Eq "="
              Literal
                Str "'beer'"
        OrderClause
          KwOrder "ORDER"
          KwBy "BY"
          SortTerm
            Property
              Id "name"
            KwDesc "DESC"
          Comma ","
          SortTerm
            Property
              Id "abv"
        LimitClause
          KwLimit "LIMIT"
          Literal
            Int "10"
        OffsetClause
          KwOffset "OFFSET"
          Literal
            Int "20"
    "#);
}

#[test]
fn clauses_are_optional_and_independent() {
    for input in [
        "SELECT * LIMIT 5",
        "SELECT * OFFSET 5",
        "SELECT * ORDER BY a ASC",
        "SELECT * WHERE a LIMIT 1 OFFSET 2",
        "SELECT name ORDER BY name LIMIT ?",
    ] {
        let parse = parse_text(input);
        assert!(parse.is_valid(), "{input}: {}", parse.diagnostics().printer().render());
    }
}

#[test]
fn keywords_are_case_insensitive() {
    insta::assert_snapshot!(dump_cst("select * where X = 1 order by X desc"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "select"
          Star "*"
        WhereClause
          KwWhere "where"
          BinaryExpr
            Property
              Id "X"
            Eq "="
            Literal
              Int "1"
        OrderClause
          KwOrder "order"
          KwBy "by"
          SortTerm
            Property
              Id "X"
            KwDesc "desc"
    "#);
}

#[test]
fn typed_view_of_statement() {
    let parse = parse_text("SELECT * WHERE abv > 7 ORDER BY name DESC LIMIT 3");
    let stmt = parse.root().unwrap().stmt().unwrap();

    assert!(stmt.select().unwrap().is_star());
    assert!(stmt.where_clause().is_some());
    assert!(stmt.offset().is_none());

    let terms: Vec<_> = stmt.order().unwrap().terms().collect();
    assert_eq!(terms.len(), 1);
    assert!(terms[0].is_descending());
}
