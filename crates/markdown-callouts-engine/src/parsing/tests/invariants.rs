use crate::parsing::callouts::builder::{
    CALLOUT_CLASS, CONTENT_CLASS, ICON_CLASS, KIND_ATTR, TITLE_CLASS, TITLE_INNER_CLASS,
};
use crate::parsing::tree::Element;

/// Validates the shape of every callout in a parsed tree.
///
/// Asserts that:
/// - `data-callout` is present and lowercase
/// - The first child is the title row holding exactly an icon and a title
/// - At most one further child exists, and it is the content container
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(root: &Element) {
    if root.has_class(CALLOUT_CLASS) {
        check_callout(root);
    }
    for callout in root.find_all_by_class(CALLOUT_CLASS) {
        check_callout(callout);
    }
}

fn check_callout(el: &Element) {
    let kind = el.attr(KIND_ATTR);
    assert!(kind.is_some(), "callout without {KIND_ATTR}: {el:?}");
    assert_eq!(kind.map(str::to_lowercase).as_deref(), kind, "kind not lowercase");

    let title = el.children.first();
    assert!(
        title.is_some_and(|t| t.has_class(TITLE_CLASS)),
        "first child is not the title row: {el:?}"
    );
    let classes: Vec<_> = title
        .map(|t| t.children.iter().filter_map(|c| c.attr("class")).collect())
        .unwrap_or_default();
    assert_eq!(classes, vec![ICON_CLASS, TITLE_INNER_CLASS], "title row children");

    assert!(el.children.len() <= 2, "callout has stray children: {el:?}");
    if let Some(content) = el.children.get(1) {
        assert!(content.has_class(CONTENT_CLASS), "second child is not content");
        assert!(!content.children.is_empty(), "content container is empty");
    }
}
