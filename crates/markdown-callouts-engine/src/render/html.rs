use crate::parsing::tree::Element;

const VOID_TAGS: &[&str] = &["hr", "br"];

/// Serialises the children of `root` as HTML, one block element per line.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    for child in &root.children {
        write_block(child, &mut out);
    }
    out
}

fn write_open_tag(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}

fn write_block(el: &Element, out: &mut String) {
    write_open_tag(el, out);
    if VOID_TAGS.contains(&el.tag.as_str()) {
        out.push_str(" />\n");
        return;
    }
    out.push('>');

    if el.tag == "pre" {
        // Whitespace inside <pre> is significant: no newlines around the code.
        for child in &el.children {
            write_inline(child, out);
        }
    } else {
        if let Some(text) = &el.text {
            out.push_str(&html_escape::encode_text(text));
        }
        if !el.children.is_empty() {
            out.push('\n');
            for child in &el.children {
                write_block(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push_str(">\n");
}

fn write_inline(el: &Element, out: &mut String) {
    write_open_tag(el, out);
    out.push('>');
    if let Some(text) = &el.text {
        out.push_str(&html_escape::encode_text(text));
    }
    for child in &el.children {
        write_inline(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}
