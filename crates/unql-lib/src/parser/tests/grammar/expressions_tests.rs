use crate::parser::tests::dump_cst;

#[test]
fn multiplication_binds_tighter_than_addition() {
    insta::assert_snapshot!(dump_cst("SELECT a + b * c - d"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          BinaryExpr
            BinaryExpr
              Property
                Id "a"
              Plus "+"
              BinaryExpr
                Property
                  Id "b"
                Star "*"
                Property
                  Id "c"
            Minus "-"
            Property
              Id "d"
    "#);
}

#[test]
fn not_or_and_precedence() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE NOT a OR b AND c"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            PrefixExpr
              KwNot "NOT"
              Property
                Id "a"
            KwOr "OR"
            BinaryExpr
              Property
                Id "b"
              KwAnd "AND"
              Property
                Id "c"
    "#);
}

#[test]
fn not_applies_to_whole_comparison() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE NOT a = 1"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          PrefixExpr
            KwNot "NOT"
            BinaryExpr
              Property
                Id "a"
              Eq "="
              Literal
                Int "1"
    "#);
}

#[test]
fn parentheses_override_precedence() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE (a OR b) AND c"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            ParenExpr
              ParenOpen "("
              BinaryExpr
                Property
                  Id "a"
                KwOr "OR"
                Property
                  Id "b"
              ParenClose ")"
            KwAnd "AND"
            Property
              Id "c"
    "#);
}

#[test]
fn arithmetic_inside_comparison() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE price * 2 >= limit_value % 3"), @r#"
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
                Id "price"
              Star "*"
              Literal
                Int "2"
            Gte ">="
            BinaryExpr
              Property
                Id "limit_value"
              Percent "%"
              Literal
                Int "3"
    "#);
}

#[test]
fn left_associative_subtraction() {
    insta::assert_snapshot!(dump_cst("SELECT a - b - c"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          BinaryExpr
            BinaryExpr
              Property
                Id "a"
              Minus "-"
              Property
                Id "b"
            Minus "-"
            Property
              Id "c"
    "#);
}

#[test]
fn comparison_operator_spellings() {
    for op in ["=", "==", "!=", "<>", "<", "<=", ">", ">="] {
        let input = format!("SELECT * WHERE a {op} 1");
        let cst = dump_cst(&input);
        assert!(cst.contains("BinaryExpr"), "{input}");
    }
}

#[test]
fn nested_property_path_with_keyword_segment() {
    insta::assert_snapshot!(dump_cst("SELECT doc.order.limit"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Property
            Id "doc"
            Dot "."
            KwOrder "order"
            Dot "."
            KwLimit "limit"
    "#);
}

#[test]
fn subtracting_negative_number() {
    insta::assert_snapshot!(dump_cst("SELECT a - -1"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          BinaryExpr
            Property
              Id "a"
            Minus "-"
            Literal
              Minus "-"
              Int "1"
    "#);
}

#[test]
fn parenthesized_not_as_comparison_operand() {
    insta::assert_snapshot!(dump_cst("SELECT a = (NOT b)"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          BinaryExpr
            Property
              Id "a"
            Eq "="
            ParenExpr
              ParenOpen "("
              PrefixExpr
                KwNot "NOT"
                Property
                  Id "b"
              ParenClose ")"
    "#);
}

#[test]
fn not_after_and() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE a AND NOT b"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            Property
              Id "a"
            KwAnd "AND"
            PrefixExpr
              KwNot "NOT"
              Property
                Id "b"
    "#);
}
