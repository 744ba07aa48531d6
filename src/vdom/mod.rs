//! Element tree produced by the view builders
//!
//! Views never touch a terminal or a browser directly. They return a tree of
//! [`VNode`]s which a host (the terminal [`Renderer`](crate::tui::Renderer) or
//! the [`html`] serializer) turns into output. Click handlers and lifecycle
//! hooks are plain injected values, so building a tree has no side effects.

pub mod html;
pub mod store;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub use store::WidgetStore;

/// Output of views that may legitimately render nothing
pub type MaybeVNode = Option<VNode>;

/// A node in the element tree
#[derive(Clone, Debug)]
pub enum VNode {
    Element(Box<Element>),
    Text(String),
}

/// Click handler injected into an element
///
/// Hosts decide when to call it; views only wire it up.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A callback that does nothing
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn emit(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Context handed to lifecycle hooks
///
/// `id` is the element's stable identity in the tree (position path, with
/// keys replacing indices where present). Hooks keep any widget state they
/// build in `widgets` under that identity.
pub struct Mount<'a> {
    pub id: &'a str,
    pub element: &'a Element,
    pub widgets: &'a mut WidgetStore,
}

/// Lifecycle hook run by the host after an element is placed
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn(&mut Mount<'_>) + Send + Sync>);

impl Hook {
    pub fn new(f: impl Fn(&mut Mount<'_>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, mount: &mut Mount<'_>) {
        (self.0)(mount)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}

/// Insert/update lifecycle hooks of an element
#[derive(Clone, Debug, Default)]
pub struct Hooks {
    /// Run the first frame an element identity appears
    pub insert: Option<Hook>,
    /// Run on every later frame the identity is still present
    pub update: Option<Hook>,
}

/// An element with tag, classes, attributes and children
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: String,
    /// Classes fixed by the selector (`div.a.b`)
    pub classes: Vec<String>,
    /// Classes toggled at render time
    pub class_flags: Vec<(String, bool)>,
    pub attrs: BTreeMap<String, String>,
    pub key: Option<String>,
    pub hooks: Hooks,
    pub on_click: Option<Callback>,
    pub children: Vec<VNode>,
}

impl Element {
    /// Whether the element carries `name`, either statically or as an enabled flag
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
            || self
                .class_flags
                .iter()
                .any(|(c, on)| *on && c == name)
    }

    /// Elements are hidden only when a `show` flag is explicitly off
    pub fn is_shown(&self) -> bool {
        !self
            .class_flags
            .iter()
            .any(|(c, on)| c == "show" && !*on)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    /// All elements carrying `class`, in document order
    pub fn find_all_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            if let VNode::Element(el) = child {
                el.find_all_by_class(class, out);
            }
        }
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

impl VNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VNode::Element(el) => Some(el),
            VNode::Text(_) => None,
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.as_element().and_then(|el| el.find_by_class(class))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        if let VNode::Element(el) = self {
            el.find_all_by_class(class, &mut out);
        }
        out
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Text(text) => out.push_str(text),
            VNode::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        VNode::Text(text)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        VNode::Text(text.to_string())
    }
}

impl From<ElementBuilder> for VNode {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}

/// Start building an element from a `tag.class.class` selector
///
/// An empty tag defaults to `div`.
pub fn h(selector: &str) -> ElementBuilder {
    let mut parts = selector.split('.');
    let tag = match parts.next() {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => "div".to_string(),
    };
    let classes = parts.filter(|c| !c.is_empty()).map(str::to_string).collect();

    ElementBuilder {
        element: Element {
            tag,
            classes,
            class_flags: Vec::new(),
            attrs: BTreeMap::new(),
            key: None,
            hooks: Hooks::default(),
            on_click: None,
            children: Vec::new(),
        },
    }
}

/// Fluent builder returned by [`h`]
#[derive(Debug)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Append a child node
    pub fn child(mut self, node: impl Into<VNode>) -> Self {
        self.element.children.push(node.into());
        self
    }

    /// Append several children
    pub fn children<N: Into<VNode>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.element.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VNode::Text(text.into()))
    }

    /// Toggle a class at render time
    pub fn class_flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.element.class_flags.push((name.into(), on));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.element.attrs.insert(name.into(), value.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.element.key = Some(key.into());
        self
    }

    pub fn on_insert(mut self, hook: Hook) -> Self {
        self.element.hooks.insert = Some(hook);
        self
    }

    pub fn on_update(mut self, hook: Hook) -> Self {
        self.element.hooks.update = Some(hook);
        self
    }

    pub fn on_click(mut self, callback: Callback) -> Self {
        self.element.on_click = Some(callback);
        self
    }

    pub fn build(self) -> VNode {
        VNode::Element(Box::new(self.element))
    }
}
