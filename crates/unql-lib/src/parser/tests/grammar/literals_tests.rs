use crate::parser::LiteralKind;
use crate::parser::ast::Expr;
use crate::parser::tests::{dump_cst, parse_text};

#[test]
fn scalar_literals() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE active = TRUE AND id = ? AND gone = null"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          Star "*"
        WhereClause
          KwWhere "WHERE"
          BinaryExpr
            BinaryExpr
              BinaryExpr
                Property
                  Id "active"
                Eq "="
                Literal
                  KwTrue "TRUE"
              KwAnd "AND"
              BinaryExpr
                Property
                  Id "id"
                Eq "="
                Literal
                  Question "?"
            KwAnd "AND"
            BinaryExpr
              Property
                Id "gone"
              Eq "="
              Literal
                KwNull "null"
    "#);
}

#[test]
fn negative_number() {
    insta::assert_snapshot!(dump_cst("SELECT * WHERE x > -2.5"), @r#"
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
            Gt ">"
            Literal
              Minus "-"
              Real "2.5"
    "#);
}

#[test]
fn array_literal() {
    insta::assert_snapshot!(dump_cst("SELECT [1, 2.5, 'x']"), @r#"
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
              Real "2.5"
            Comma ","
            Literal
              Str "'x'"
            BracketClose "]"
    "#);
}

#[test]
fn empty_containers() {
    insta::assert_snapshot!(dump_cst("SELECT [{}]"), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          ArrayLit
            BracketOpen "["
            ObjectLit
              BraceOpen "{"
              BraceClose "}"
            BracketClose "]"
    "#);
}

#[test]
fn object_literal() {
    insta::assert_snapshot!(dump_cst(r#"SELECT {"name": name, "n": -1}"#), @r#"
    Root
      SelectStmt
        SelectClause
          KwSelect "SELECT"
          ObjectLit
            BraceOpen "{"
            Member
              Str "\"name\""
              Colon ":"
              Property
                Id "name"
            Comma ","
            Member
              Str "\"n\""
              Colon ":"
              Literal
                Minus "-"
                Int "1"
            BraceClose "}"
    "#);
}

#[test]
fn typed_literals() {
    let parse = parse_text(r#"SELECT [1, 2.5, "s", true, false, null, ?, -3]"#);
    let select = parse.root().unwrap().stmt().unwrap().select().unwrap();
    let Some(Expr::Array(array)) = select.expr() else {
        panic!("expected array");
    };

    let literals: Vec<_> = array
        .items()
        .map(|item| match item {
            Expr::Literal(lit) => (lit.kind().unwrap(), lit.text()),
            other => panic!("unexpected {other:?}"),
        })
        .collect();

    assert_eq!(
        literals,
        [
            (LiteralKind::Int, "1".to_string()),
            (LiteralKind::Real, "2.5".to_string()),
            (LiteralKind::Str, "\"s\"".to_string()),
            (LiteralKind::True, "true".to_string()),
            (LiteralKind::False, "false".to_string()),
            (LiteralKind::Null, "null".to_string()),
            (LiteralKind::Param, "?".to_string()),
            (LiteralKind::Int, "-3".to_string()),
        ]
    );
}

#[test]
fn typed_object_members() {
    let parse = parse_text(r#"SELECT {"brewery": b.name, "abv": 5}"#);
    let select = parse.root().unwrap().stmt().unwrap().select().unwrap();
    let Some(Expr::Object(object)) = select.expr() else {
        panic!("expected object");
    };

    let keys: Vec<_> = object.members().filter_map(|m| m.key_text()).collect();
    assert_eq!(keys, ["brewery", "abv"]);

    let first = object.members().next().unwrap();
    let Some(Expr::Property(path)) = first.value() else {
        panic!("expected property");
    };
    assert_eq!(path.path(), "b.name");
}
