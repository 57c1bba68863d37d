//! Property tests for the format tree builder.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use serif_ir::{FormatTag, FormatTree, NodeId, Style};
use serif_parse::{build_statement, StyledRun, PRECEDENCE};

fn arb_style() -> impl Strategy<Value = Style> {
    (
        any::<[bool; 6]>(),
        prop_oneof![Just(11u32), Just(14), Just(18)],
        prop_oneof![Just(0u32), Just(0xFF_0000), Just(7)],
        prop_oneof![Just(String::new()), Just("Mono".to_string())],
    )
        .prop_map(|(flags, size, color, font)| Style {
            bold: flags[0],
            italic: flags[1],
            underline: flags[2],
            strike: flags[3],
            sub: flags[4],
            superscript: flags[5],
            size,
            color,
            font,
        })
}

fn arb_runs() -> impl Strategy<Value = Vec<StyledRun>> {
    prop::collection::vec(
        ("[a-c ]{1,4}", arb_style()).prop_map(|(text, style)| StyledRun::new(text, style)),
        1..8,
    )
}

fn all_leaves_are_tokens(tree: &FormatTree, id: NodeId) -> bool {
    tree.children(id).iter().all(|&child| {
        if tree.is_childless(child) {
            tree.tag(child) == FormatTag::String
        } else {
            all_leaves_are_tokens(tree, child)
        }
    })
}

/// The style that differs from plain text in exactly `tag`.
fn style_with(tag: FormatTag) -> Style {
    let plain = Style::plain();
    match tag {
        FormatTag::Size => plain.with_size(14),
        FormatTag::Bold => plain.with_bold(),
        FormatTag::Sub => plain.with_sub(),
        FormatTag::Super => plain.with_super(),
        FormatTag::Strike => plain.with_strike(),
        FormatTag::Italic => plain.with_italic(),
        FormatTag::Under => plain.with_underline(),
        FormatTag::Color => plain.with_color(0x00_FF00),
        FormatTag::Font => plain.with_font("Mono"),
        _ => plain,
    }
}

fn merge(style: &mut Style, tag: FormatTag) {
    let with = style_with(tag);
    match tag {
        FormatTag::Size => style.size = with.size,
        FormatTag::Bold => style.bold = true,
        FormatTag::Sub => style.sub = true,
        FormatTag::Super => style.superscript = true,
        FormatTag::Strike => style.strike = true,
        FormatTag::Italic => style.italic = true,
        FormatTag::Under => style.underline = true,
        FormatTag::Color => style.color = with.color,
        FormatTag::Font => style.font = with.font,
        _ => {}
    }
}

fn opening(tag: FormatTag) -> String {
    match tag {
        FormatTag::Size => "size14(".to_string(),
        FormatTag::Color => "color65280(".to_string(),
        FormatTag::Font => "fontMono(".to_string(),
        _ => format!("{}(", tag.label()),
    }
}

proptest! {
    #[test]
    fn prune_is_idempotent(runs in arb_runs()) {
        let mut tree = FormatTree::new();
        let statement = build_statement(&mut tree, &runs);
        let once = tree.display(statement).to_string();
        tree.prune(statement);
        prop_assert_eq!(tree.display(statement).to_string(), once);
    }

    #[test]
    fn built_tree_ends_in_tokens(runs in arb_runs()) {
        let mut tree = FormatTree::new();
        let statement = build_statement(&mut tree, &runs);
        prop_assert!(all_leaves_are_tokens(&tree, statement));
    }

    #[test]
    fn nesting_follows_precedence(mask in any::<[bool; 9]>()) {
        let chosen: Vec<FormatTag> = PRECEDENCE
            .iter()
            .zip(mask)
            .filter_map(|(&tag, on)| on.then_some(tag))
            .collect();
        prop_assume!(!chosen.is_empty());

        let mut style = Style::plain();
        for &tag in &chosen {
            merge(&mut style, tag);
        }
        let runs = [
            StyledRun::plain("x "),
            StyledRun::new("y", style),
            StyledRun::plain(" z"),
        ];
        let mut tree = FormatTree::new();
        let statement = build_statement(&mut tree, &runs);

        let mut expected = String::from("statement(\"x\", ");
        for &tag in &chosen {
            expected.push_str(&opening(tag));
        }
        expected.push_str("\"y\"");
        expected.push_str(&")".repeat(chosen.len()));
        expected.push_str(", \"z\")");
        prop_assert_eq!(tree.display(statement).to_string(), expected);
    }
}
