use bt_core::Status;
use bt_nodes::{Node, NodeKind};

use crate::style::{paint, status_glyph, RenderStyle, BLUE, BOLD};

/// Glyph shown next to the status of a non-leaf node.
pub fn kind_glyph(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Sequence => "→",
        NodeKind::Selector => "?",
        NodeKind::Parallel => "⇉",
        NodeKind::Decorator => "δ",
        NodeKind::Action | NodeKind::Condition => "",
    }
}

/// Leading whitespace for a line at column `indent`, with a `┊` guide every `width` columns.
pub fn indent_guide(indent: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    (0..indent)
        .map(|i| if (i + width - 1) % width == 0 { '┊' } else { ' ' })
        .collect()
}

/// One line per node, depth first, without a trailing newline.
///
/// Only reads names, kinds, statuses and children.
pub fn render_tree(root: &dyn Node, style: &RenderStyle) -> String {
    let mut lines = Vec::new();
    render_node(root, 0, style, &mut lines);
    lines.join("\n")
}

fn render_node(node: &dyn Node, indent: usize, style: &RenderStyle, lines: &mut Vec<String>) {
    let guide = indent_guide(indent, style.indent);
    let status = status_glyph(node.status(), style.color);
    let running = node.status() == Status::Running;

    let line = match node.kind() {
        kind if kind.is_leaf() => {
            let (open, close) = if kind == NodeKind::Condition {
                ("<", ">?")
            } else {
                ("", "")
            };
            let flag = if running {
                paint(" <---- RUNNING", BLUE, style.color)
            } else {
                String::new()
            };
            format!("{guide}[{status}] {open}{}{close}{flag}", node.name())
        }
        NodeKind::Decorator => {
            let flag = if running { " <-- RUNNING" } else { "" };
            format!(
                "{guide}[{status}][{}] {}{flag}",
                kind_glyph(NodeKind::Decorator),
                node.name()
            )
        }
        kind => format!(
            "{guide}[{status}][{}] {}",
            kind_glyph(kind),
            paint(node.name(), BOLD, style.color)
        ),
    };
    lines.push(line);

    for child in node.children() {
        render_node(&**child, indent + style.indent, style, lines);
    }
}
