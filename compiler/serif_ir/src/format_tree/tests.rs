use super::*;
use pretty_assertions::assert_eq;

fn render(tree: &FormatTree, id: NodeId) -> String {
    tree.display(id).to_string()
}

fn push(tree: &mut FormatTree, parent: NodeId, tag: FormatTag) -> NodeId {
    tree.push_node(parent, FormatNode::new(tag))
}

#[test]
fn test_display_linear_nesting() {
    let mut tree = FormatTree::new();
    let root = tree.alloc(FormatNode::new(FormatTag::Document));
    let statement = push(&mut tree, root, FormatTag::Statement);
    let token = tree.add_string_unsplit(statement, "testString");

    assert_eq!(render(&tree, token), "\"testString\"");
    assert_eq!(render(&tree, statement), "statement(\"testString\")");
    assert_eq!(render(&tree, root), "document(statement(\"testString\"))");
}

#[test]
fn test_display_branching() {
    let mut tree = FormatTree::new();
    let root = tree.alloc(FormatNode::new(FormatTag::Document));
    let statement = push(&mut tree, root, FormatTag::Statement);
    let under = push(&mut tree, statement, FormatTag::Under);
    tree.add_string(under, "x");
    let italic = push(&mut tree, under, FormatTag::Italic);
    tree.add_string(italic, "y");
    let strike = push(&mut tree, italic, FormatTag::Strike);
    tree.add_string(strike, "z");

    assert_eq!(
        render(&tree, root),
        "document(statement(under(\"x\", italic(\"y\", strike(\"z\")))))"
    );
}

#[test]
fn test_display_payload_tags() {
    let mut tree = FormatTree::new();
    let statement = tree.alloc(FormatNode::new(FormatTag::Statement));
    let bold = push(&mut tree, statement, FormatTag::Bold);
    tree.add_string(bold, "cond");
    let size = tree.push_node(bold, FormatNode::with_value(FormatTag::Size, 12));
    let under = push(&mut tree, size, FormatTag::Under);
    tree.add_string(under, "a");
    let italic = push(&mut tree, under, FormatTag::Italic);
    tree.add_string(italic, "a one");
    tree.add_string(size, ",");
    tree.add_string(size, "Mult");
    let sup = push(&mut tree, size, FormatTag::Super);
    tree.add_string(sup, "a");
    let color = tree.push_node(sup, FormatNode::with_value(FormatTag::Color, 10));
    tree.add_string(color, "tenVal");
    tree.add_string(bold, "Arr");
    let sub = push(&mut tree, bold, FormatTag::Sub);
    tree.add_string(sub, "b");

    assert_eq!(
        render(&tree, statement),
        "statement(bold(\"cond\", size12(under(\"a\", italic(\"a\", \"one\")), \",\", \"Mult\", \
         super(\"a\", color10(\"tenVal\"))), \"Arr\", sub(\"b\")))"
    );
}

#[test]
fn test_display_font_strips_spaces() {
    let mut tree = FormatTree::new();
    let font = tree.alloc(FormatNode::font("Courier New"));
    tree.add_string_unsplit(font, "hello world");

    assert_eq!(render(&tree, font), "fontCourierNew(\"hello world\")");
}

#[test]
fn test_display_args_nodes() {
    let mut tree = FormatTree::new();
    let base = tree.alloc(FormatNode::token("f"));
    let a = tree.alloc(FormatNode::token("a"));
    let b = tree.alloc(FormatNode::token("b"));
    let call = tree.with_args(ArgsKind::Function, base, vec![a, b]);
    assert_eq!(render(&tree, call), "function(\"f\", (\"a\", \"b\"))");
    assert_eq!(tree.parent(base), Some(call));
    assert_eq!(tree.parent(a), Some(call));

    let arr = tree.alloc(FormatNode::token("Arr"));
    let i = tree.alloc(FormatNode::token("i"));
    let index = tree.with_args(ArgsKind::Index, arr, vec![i]);
    assert_eq!(render(&tree, index), "index(\"Arr\", (\"i\"))");
}

#[test]
fn test_prune_removes_childless_formatting() {
    let mut tree = FormatTree::new();
    let root = tree.alloc(FormatNode::new(FormatTag::Document));
    let statement = push(&mut tree, root, FormatTag::Statement);
    let under = push(&mut tree, statement, FormatTag::Under);
    tree.add_string(under, "x");
    let italic = push(&mut tree, under, FormatTag::Italic);
    tree.add_string(italic, "y");
    let strike = push(&mut tree, italic, FormatTag::Strike);
    tree.add_string(strike, "z");
    let color = tree.push_node(italic, FormatNode::with_value(FormatTag::Color, 15));
    tree.push_node(under, FormatNode::with_value(FormatTag::Size, 12));

    assert_eq!(
        render(&tree, root),
        "document(statement(under(\"x\", italic(\"y\", strike(\"z\"), color15()), size12())))"
    );

    tree.prune(root);
    let pruned = "document(statement(under(\"x\", italic(\"y\", strike(\"z\")))))";
    assert_eq!(render(&tree, root), pruned);
    assert_eq!(tree.parent(color), None);

    tree.prune(root);
    assert_eq!(render(&tree, root), pruned);
}

#[test]
fn test_prune_cascades_to_emptied_parents() {
    let mut tree = FormatTree::new();
    let statement = tree.alloc(FormatNode::new(FormatTag::Statement));
    let bold = push(&mut tree, statement, FormatTag::Bold);
    let italic = push(&mut tree, bold, FormatTag::Italic);
    push(&mut tree, italic, FormatTag::Strike);
    tree.add_string(statement, "kept");

    tree.prune(statement);
    assert_eq!(render(&tree, statement), "statement(\"kept\")");
}

#[test]
fn test_add_string_splitting() {
    let mut tree = FormatTree::new();
    let sup = tree.alloc(FormatNode::new(FormatTag::Super));
    assert_eq!(render(&tree, sup), "super()");

    assert!(tree.add_string(sup, "").is_empty());
    assert_eq!(render(&tree, sup), "super()");

    tree.add_string(sup, "word");
    assert_eq!(render(&tree, sup), "super(\"word\")");

    tree.add_string(sup, " \ttest\n");
    assert_eq!(render(&tree, sup), "super(\"word\", \"test\")");

    let added = tree.add_string(sup, " \u{b}foo . bar\r,\n");
    assert_eq!(added.len(), 3);
    assert_eq!(
        render(&tree, sup),
        "super(\"word\", \"test\", \"foo\", \"bar\", \",\")"
    );
}

#[test]
fn test_add_string_unsplit_keeps_whitespace() {
    let mut tree = FormatTree::new();
    let font = tree.alloc(FormatNode::font("Mono"));
    let token = tree.add_string_unsplit(font, " a b. ");
    assert_eq!(tree.token_text(token), Some(" a b. "));
}

#[test]
fn test_is_childless() {
    let mut tree = FormatTree::new();
    let root = tree.alloc(FormatNode::new(FormatTag::Document));
    assert!(tree.is_childless(root));

    let statement = push(&mut tree, root, FormatTag::Statement);
    assert!(!tree.is_childless(root));
    assert!(tree.is_childless(statement));
}

#[test]
fn test_is_token() {
    let mut tree = FormatTree::new();
    let comma = tree.alloc(FormatNode::token(","));
    let bold = tree.alloc(FormatNode::new(FormatTag::Bold));
    assert!(tree.is_token(comma, ","));
    assert!(!tree.is_token(comma, "x"));
    assert!(!tree.is_token(bold, ","));
    assert_eq!(tree.token_text(bold), None);
}

#[test]
fn test_node_id_debug() {
    assert_eq!(format!("{:?}", NodeId::new(7)), "NodeId(7)");
    assert_eq!(NodeId::new(7).index(), 7);
}

#[test]
fn test_alloc_assigns_dense_ids() {
    let mut tree = FormatTree::new();
    assert!(tree.is_empty());
    let first = tree.alloc(FormatNode::token("a"));
    let second = tree.alloc(FormatNode::token("b"));
    assert_eq!((first.index(), second.index()), (0, 1));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.token_text(second), Some("b"));
    assert_eq!(tree.node(first).parent, None);
}
