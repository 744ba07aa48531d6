use std::collections::HashSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tracing::{trace, warn};

use crate::config::ThemeConfig;
use crate::miniboard::{figurine, MiniBoard};
use crate::vdom::{Element, Mount, VNode, WidgetStore};

/// Tags laid out on their own lines
const BLOCK_TAGS: &[&str] = &["div", "p"];

/// Renders an element tree to a ratatui buffer
///
/// Elements are laid out as text lines: block tags start a new line, other
/// tags flow inline, and elements whose `show` flag is off are skipped.
/// Mini-boards are drawn from the widget store.
///
/// Each element is identified by its position (child indices, or its key
/// when it has one). Lifecycle hooks run against the previous frame: the
/// insert hook for identities not mounted last frame, the update hook for
/// those that were. Widgets of identities that left the tree are dropped.
pub struct Renderer {
    /// Identities with hooks mounted in the previous frame
    mounted: HashSet<String>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            mounted: HashSet::new(),
        }
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(
        &mut self,
        tree: &VNode,
        widgets: &mut WidgetStore,
        theme: &ThemeConfig,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let lines = self.layout(tree, widgets, theme);
        Paragraph::new(lines).render(area, buf);
    }

    /// Mount the tree and lay it out as lines
    pub fn layout(
        &mut self,
        tree: &VNode,
        widgets: &mut WidgetStore,
        theme: &ThemeConfig,
    ) -> Vec<Line<'static>> {
        let mut frame = Frame {
            widgets,
            previous: &self.mounted,
            seen: HashSet::new(),
            theme,
            lines: Vec::new(),
            current: Vec::new(),
        };
        frame.walk(tree, "0", Style::default());
        frame.flush();

        let Frame {
            widgets,
            seen,
            lines,
            ..
        } = frame;
        widgets.retain(|id| seen.contains(id));
        trace!("RENDER: {} lines, {} mounted", lines.len(), seen.len());
        self.mounted = seen;
        lines
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout state of a single render pass
struct Frame<'a> {
    widgets: &'a mut WidgetStore,
    previous: &'a HashSet<String>,
    seen: HashSet<String>,
    theme: &'a ThemeConfig,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl Frame<'_> {
    fn walk(&mut self, node: &VNode, id: &str, style: Style) {
        match node {
            VNode::Text(text) => self.current.push(Span::styled(text.clone(), style)),
            VNode::Element(el) => self.walk_element(el, id, style),
        }
    }

    fn walk_element(&mut self, el: &Element, id: &str, style: Style) {
        if !el.is_shown() {
            return;
        }
        self.mount(el, id);

        if el.tag == "br" {
            self.flush();
            return;
        }
        if el.has_class("mini-board") {
            self.flush();
            self.draw_board(id);
            return;
        }

        let block = BLOCK_TAGS.contains(&el.tag.as_str());
        if block {
            self.flush();
        }
        let style = self.style_for(el, style);

        if el.tag == "piece" {
            self.current.push(Span::styled(piece_glyph(el).to_string(), style));
        }
        let button = el.tag == "a" && el.has_class("button");
        if button {
            self.current.push(Span::styled("[", style));
        }
        let mut keys = HashSet::new();
        for (i, child) in el.children.iter().enumerate() {
            self.walk(child, &child_id(id, i, child, &mut keys), style);
        }
        if button {
            self.current.push(Span::styled("] ", style));
        }

        if block {
            self.flush();
        }
    }

    fn mount(&mut self, el: &Element, id: &str) {
        if el.hooks.insert.is_none() && el.hooks.update.is_none() {
            return;
        }
        let hook = if self.previous.contains(id) {
            el.hooks.update.as_ref()
        } else {
            el.hooks.insert.as_ref()
        };
        if let Some(hook) = hook {
            hook.call(&mut Mount {
                id,
                element: el,
                widgets: &mut *self.widgets,
            });
        }
        self.seen.insert(id.to_string());
    }

    fn style_for(&self, el: &Element, base: Style) -> Style {
        let mut style = base;
        if el.has_class("good") || el.has_class("complete") {
            style = style.fg(self.theme.good_fg);
        }
        if el.has_class("fail") || el.has_class("failed") {
            style = style.fg(self.theme.fail_fg);
        }
        if el.has_class("button") {
            style = style.fg(self.theme.selection_fg).add_modifier(Modifier::BOLD);
        }
        if el.has_class("active") {
            style = style.add_modifier(Modifier::REVERSED);
        }
        match el.tag.as_str() {
            "strong" => style.add_modifier(Modifier::BOLD),
            "em" => style.add_modifier(Modifier::ITALIC),
            "a" if !el.has_class("button") => style.add_modifier(Modifier::UNDERLINED),
            _ => style,
        }
    }

    fn draw_board(&mut self, id: &str) {
        let Some(board) = self.widgets.get::<MiniBoard>(id) else {
            self.lines.push(Line::from("(no board)"));
            return;
        };
        let dark_bg = self.theme.dark_square_bg();
        for row in board.rows() {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|square| {
                    let bg = if square.highlighted {
                        self.theme.last_move_bg
                    } else if square.dark {
                        dark_bg
                    } else {
                        self.theme.light_square_bg
                    };
                    let glyph = square.piece.map(figurine).unwrap_or(' ');
                    Span::styled(format!("{} ", glyph), Style::default().fg(Color::Black).bg(bg))
                })
                .collect();
            self.lines.push(Line::from(spans));
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }
}

/// Identity of a child: its key when it has one, else its index
///
/// A key repeated among siblings also gets the index so each child keeps
/// its own widget.
fn child_id<'a>(parent: &str, index: usize, child: &'a VNode, keys: &mut HashSet<&'a str>) -> String {
    match child.as_element().and_then(|el| el.key.as_deref()) {
        Some(key) if keys.insert(key) => format!("{}.#{}", parent, key),
        Some(key) => {
            warn!("RENDER: duplicate key {} under {}", key, parent);
            format!("{}.#{}.{}", parent, key, index)
        }
        None => format!("{}.{}", parent, index),
    }
}

fn piece_glyph(el: &Element) -> char {
    if el.has_class("black") {
        '♚'
    } else {
        '♔'
    }
}
