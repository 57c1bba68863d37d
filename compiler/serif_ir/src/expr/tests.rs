use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_literals() {
    assert_eq!(Expr::Integer(10).to_string(), "NumC(10)");
    assert_eq!(Expr::string("a b").to_string(), "StrC(\"a b\")");
    assert_eq!(Expr::ident("x").to_string(), "IdC(\"x\")");
}

#[test]
fn test_display_call() {
    let call = Expr::call(
        Expr::ident("f"),
        vec![Expr::ident("a"), Expr::Integer(1)],
    );
    assert_eq!(call.to_string(), "FuncC(IdC(\"f\"), (IdC(\"a\"), NumC(1)))");
}

#[test]
fn test_display_index() {
    let index = Expr::index(
        Expr::ident("arr"),
        vec![Expr::ident("i"), Expr::Integer(2)],
    );
    assert_eq!(index.to_string(), "IndexC(IdC(\"arr\")[IdC(\"i\")][NumC(2)])");
}

#[test]
fn test_display_compound() {
    let expr = Expr::Sequence(vec![
        Expr::bind(
            Expr::ident("A"),
            Expr::Add(vec![Expr::ident("B"), Expr::negate(Expr::ident("C"))]),
        ),
        Expr::if_else(Expr::ident("A"), Expr::Integer(1), Expr::string("no")),
    ]);
    assert_eq!(
        expr.to_string(),
        "SeqC(BindC(IdC(\"A\"), AddC(IdC(\"B\"), NegC(IdC(\"C\")))), \
         IfC(IdC(\"A\"), NumC(1), StrC(\"no\")))"
    );
}

#[test]
fn test_as_ident() {
    assert_eq!(Expr::ident("n").as_ident(), Some("n"));
    assert_eq!(Expr::Integer(3).as_ident(), None);
    assert_eq!(Expr::string("n").as_ident(), None);
}
