use crate::parsing::callouts::builder::{
    CALLOUT_CLASS, CONTENT_CLASS, FOLD_ATTR, ICON_CLASS, KIND_ATTR, TITLE_INNER_CLASS,
};
use crate::parsing::tree::Element;

/// A plain-text sketch of the document, one entry per rendered line.
///
/// Callouts show as `icon title [kind, fold]` with their content indented;
/// blockquote content is prefixed with `> `.
pub fn outline(root: &Element) -> Vec<String> {
    let mut lines = Vec::new();
    for child in &root.children {
        walk(child, "", &mut lines);
    }
    lines
}

fn walk(el: &Element, prefix: &str, lines: &mut Vec<String>) {
    if el.has_class(CALLOUT_CLASS) {
        callout(el, prefix, lines);
        return;
    }

    match el.tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = el.tag[1..].parse::<usize>().unwrap_or(1);
            lines.push(format!(
                "{prefix}{} {}",
                "#".repeat(level),
                el.text.as_deref().unwrap_or("")
            ));
        }
        "p" => {
            for line in el.text.as_deref().unwrap_or("").lines() {
                lines.push(format!("{prefix}{line}"));
            }
        }
        "hr" => lines.push(format!("{prefix}---")),
        "pre" => {
            let code = el.children.first();
            let lang = code
                .and_then(|c| c.attr("class"))
                .and_then(|c| c.strip_prefix("language-"))
                .unwrap_or("");
            lines.push(format!("{prefix}```{lang}"));
            for line in code.and_then(|c| c.text.as_deref()).unwrap_or("").lines() {
                lines.push(format!("{prefix}{line}"));
            }
            lines.push(format!("{prefix}```"));
        }
        "blockquote" => {
            let inner = format!("{prefix}> ");
            for child in &el.children {
                walk(child, &inner, lines);
            }
        }
        _ => {
            for child in &el.children {
                walk(child, prefix, lines);
            }
        }
    }
}

fn text_of<'a>(el: &'a Element, class: &str) -> &'a str {
    el.find_by_class(class)
        .and_then(|e| e.text.as_deref())
        .unwrap_or("")
}

fn callout(el: &Element, prefix: &str, lines: &mut Vec<String>) {
    let kind = el.attr(KIND_ATTR).unwrap_or("");
    let fold = match el.attr(FOLD_ATTR) {
        Some("-") => ", collapsed",
        Some("+") => ", expanded",
        _ => "",
    };
    lines.push(format!(
        "{prefix}{} {} [{kind}{fold}]",
        text_of(el, ICON_CLASS),
        text_of(el, TITLE_INNER_CLASS)
    ));

    let inner = format!("{prefix}  ");
    if let Some(content) = el.children.iter().find(|c| c.has_class(CONTENT_CLASS)) {
        for child in &content.children {
            walk(child, &inner, lines);
        }
    }
}
