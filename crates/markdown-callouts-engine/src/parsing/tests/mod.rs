//! End-to-end tests for the block pipeline with callouts installed.
//!
//! Every parsed tree is run through [`invariants::check`] before the
//! test-specific assertions.

mod invariants;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::error::ParseError;
use crate::parsing::callouts::{CalloutExtension, IconTable};
use crate::parsing::{Document, Markdown, parse_document};

fn parse(md: &str) -> Document {
    let doc = parse_document(md).unwrap();
    invariants::check(&doc.root);
    doc
}

fn outline(md: &str) -> Vec<String> {
    parse(md).outline()
}

#[test]
fn warning_callout_html() {
    let html = parse("> [!warning]- Be careful\n> body line\n").to_html();
    insta::assert_snapshot!(html, @r#"
    <div class="callout" data-callout="warning" data-callout-fold="-">
    <div class="callout-title">
    <div class="callout-icon">⚠️</div>
    <div class="callout-title-inner">Be careful</div>
    </div>
    <div class="callout-content">
    <p>body line</p>
    </div>
    </div>
    "#);
}

#[test]
fn bare_marker_has_title_only() {
    let doc = parse("> [!note]");
    let callout = &doc.root.children[0];
    assert_eq!(callout.children.len(), 1);
    assert_eq!(doc.outline(), vec!["📝 Note [note]"]);
}

#[test]
fn custom_kind_falls_back_to_default_icon() {
    assert_eq!(outline("> [!custom] Mine\n> text"), vec!["📝 Mine [custom]", "  text"]);
}

#[rstest]
#[case("> [!tip]+ Open", "💡 Open [tip, expanded]")]
#[case("> [!tip]- Shut", "💡 Shut [tip, collapsed]")]
#[case("> [!tip] - Dash", "💡 - Dash [tip]")]
#[case("> [!TIP]", "💡 Tip [tip]")]
fn fold_markers_and_titles(#[case] md: &str, #[case] line: &str) {
    assert_eq!(outline(md), vec![line]);
}

#[test]
fn nested_callouts() {
    let md = "> [!note] Outer\n> > [!tip] Inner\n> > deep";
    assert_eq!(outline(md), vec!["📝 Outer [note]", "  💡 Inner [tip]", "    deep"]);
}

#[test]
fn callout_inside_plain_blockquote_stays_a_quote() {
    let md = "> plain\n>\n> > [!note] Not a callout";
    assert_eq!(outline(md), vec!["> plain", "> > [!note] Not a callout"]);
}

#[test]
fn multi_paragraph_body() {
    let md = "> [!info]\n> one\n>\n> two";
    assert_eq!(outline(md), vec!["ℹ️ Info [info]", "  one", "  two"]);
}

#[test]
fn leading_paragraph_in_same_block() {
    let md = "Intro\n> [!info] Heads up\n> detail";
    assert_eq!(outline(md), vec!["Intro", "ℹ️ Heads up [info]", "  detail"]);
}

#[test]
fn sibling_callouts_in_one_block() {
    let md = "> [!note] One\n> a\nbetween\n> [!tip] Two\n> b";
    assert_eq!(
        outline(md),
        vec!["📝 One [note]", "  a", "between", "💡 Two [tip]", "  b"]
    );
}

#[test]
fn heading_takes_precedence_and_requeues_rest() {
    let md = "# Title\n> [!note] x";
    assert_eq!(outline(md), vec!["# Title", "📝 x [note]"]);
}

#[test]
fn fenced_code_is_a_raw_zone() {
    let doc = parse("```\n> [!note] x\n```");
    assert!(doc.root.find_by_class("callout").is_none());
    assert_eq!(doc.to_html(), "<pre><code>&gt; [!note] x\n</code></pre>\n");
}

#[test]
fn fenced_code_inside_callout_body() {
    let md = "> [!example]\n> ```rust\n> let x = 1;\n> ```";
    assert_eq!(
        outline(md),
        vec!["📋 Example [example]", "  ```rust", "  let x = 1;", "  ```"]
    );
}

#[test]
fn plain_quotes_separated_by_blank_line_merge() {
    assert_eq!(outline("> one\n\n> two"), vec!["> one", "> two"]);
}

#[test]
fn quote_after_callout_is_not_merged_into_it() {
    let doc = parse("> [!note]\n\n> plain");
    let tags: Vec<_> = doc.root.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(tags, vec!["div", "blockquote"]);
}

#[test]
fn crlf_input() {
    assert_eq!(outline("> [!tip] T\r\n> body\r\n"), vec!["💡 T [tip]", "  body"]);
}

#[test]
fn near_limit_leaves_marker_as_text() {
    let doc = Markdown::new()
        .with_extension(CalloutExtension::default())
        .with_max_nesting(1)
        .parse("> [!note] x")
        .unwrap();
    assert_eq!(doc.to_html(), "<p>&gt; [!note] x</p>\n");
}

#[test]
fn deep_quote_nesting_degrades_instead_of_failing() {
    let md = format!("{}deep", "> ".repeat(100));
    let doc = parse_document(&md).unwrap();
    let html = doc.to_html();
    assert!(html.starts_with("<blockquote>"));
    assert!(html.contains("deep"));
}

#[test]
fn deep_callout_nesting_degrades_instead_of_failing() {
    let mut md = String::new();
    for level in 0..64 {
        md.push_str(&"> ".repeat(level));
        md.push_str("> [!note] level\n");
    }
    let doc = parse(&md);
    assert!(doc.root.find_all_by_class("callout").len() < 64);
}

#[test]
fn nesting_error_surfaces_from_facade() {
    let result = Markdown::new()
        .with_extension(CalloutExtension::default())
        .with_max_nesting(0)
        .parse("> [!note]");
    assert_eq!(result, Err(ParseError::NestingTooDeep { depth: 1, limit: 0 }));
}

#[test]
fn without_extension_callouts_are_blockquotes() {
    let html = Markdown::new().convert("> [!note] x").unwrap();
    assert_eq!(html, "<blockquote>\n<p>[!note] x</p>\n</blockquote>\n");
}

#[test]
fn configured_icons_are_used() {
    let icons = IconTable::new()
        .with_icon("warning", "🚧")
        .with_default_icon("•");
    let doc = Markdown::new()
        .with_extension(CalloutExtension::new(icons))
        .parse("> [!warning]\n\n> [!mystery]")
        .unwrap();
    invariants::check(&doc.root);
    assert_eq!(doc.outline(), vec!["🚧 Warning [warning]", "• Mystery [mystery]"]);
}

#[test]
fn mixed_document() {
    let md = "\
# Notes

Some intro text.

> [!question] Why?
> Because.

---

> a quote
";
    assert_eq!(
        outline(md),
        vec![
            "# Notes",
            "Some intro text.",
            "❓ Why? [question]",
            "  Because.",
            "---",
            "> a quote",
        ]
    );
}

proptest! {
    #[test]
    fn arbitrary_input_parses_without_error(md in "[ >\\[\\]!a-zA-Z#`~*_+\\-\\n\\r\té]{0,200}") {
        let doc = parse_document(&md);
        prop_assert!(doc.is_ok(), "{:?}", doc);
        if let Ok(doc) = doc {
            invariants::check(&doc.root);
        }
    }

    #[test]
    fn deeply_quoted_callouts_never_error(depth in 0usize..80, title in "[a-z ]{0,10}") {
        let md = format!("{}> [!note] {title}\n{}> body", "> ".repeat(depth), "> ".repeat(depth));
        prop_assert!(parse_document(&md).is_ok());
    }
}
