//! HTML serialization of element trees
//!
//! Hooks and click handlers have no markup representation and are dropped.

use super::{Element, VNode};

/// Tags written without a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

/// Serialize a tree to HTML markup
pub fn to_html(node: &VNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize optional output; `None` becomes an empty string
pub fn to_html_opt(node: Option<&VNode>) -> String {
    node.map(to_html).unwrap_or_default()
}

fn write_node(node: &VNode, out: &mut String) {
    match node {
        VNode::Text(text) => out.push_str(&escape(text)),
        VNode::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    let classes = class_list(el);
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape(&classes.join(" ")));
        out.push('"');
    }

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    if VOID_TAGS.contains(&el.tag.as_str()) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

/// Static classes followed by enabled flags, without duplicates
fn class_list(el: &Element) -> Vec<&str> {
    let mut classes: Vec<&str> = el.classes.iter().map(String::as_str).collect();
    for (name, on) in &el.class_flags {
        if *on && !classes.contains(&name.as_str()) {
            classes.push(name);
        }
    }
    classes
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::h;

    #[test]
    fn test_nested_markup() {
        let tree = h("div.player")
            .child(h("div.icon").text("✓"))
            .child(h("strong").text("Best move!"))
            .build();

        assert_eq!(
            to_html(&tree),
            "<div class=\"player\"><div class=\"icon\">✓</div><strong>Best move!</strong></div>"
        );
    }

    #[test]
    fn test_class_flags_merged() {
        let shown = h("a.button").class_flag("show", true).build();
        let hidden = h("a.button").class_flag("show", false).build();

        assert_eq!(to_html(&shown), "<a class=\"button show\"></a>");
        assert_eq!(to_html(&hidden), "<a class=\"button\"></a>");
    }

    #[test]
    fn test_void_tag() {
        let tree = h("span").text("Carlsen").child(h("br")).build();
        assert_eq!(to_html(&tree), "<span>Carlsen<br /></span>");
    }

    #[test]
    fn test_attrs_are_escaped() {
        let tree = h("a").attr("href", "/a\"b").text("<x> & y").build();
        assert_eq!(to_html(&tree), "<a href=\"/a&quot;b\">&lt;x&gt; &amp; y</a>");
    }

    #[test]
    fn test_none_is_empty() {
        assert_eq!(to_html_opt(None), "");
    }
}
