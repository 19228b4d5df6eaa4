//! SVG visualization of an arranged container tree.
//!
//! Draws the root container as a panel, scaled to fit, with every
//! non-collapsed descendant's rect on top of it. Containers are outlined,
//! leaves are filled, and each box is labelled with its name and size.
//!
//! # Example
//!
//! ```
//! use boxlayout::{Alignment, Container, FixedView, LayoutContext, Rect, Size, StackView};
//! use boxlayout::svg::render_container_svg;
//!
//! let mut row = StackView::horizontal("toolbar");
//! row.add(FixedView::new("back", Size::new(24.0, 24.0)), Alignment::CENTER_LEFT);
//! row.add(FixedView::new("title", Size::new(120.0, 20.0)), Alignment::CENTER);
//! row.layout(Rect::new(0.0, 0.0, 400.0, 40.0), &LayoutContext::default()).unwrap();
//!
//! let svg = render_container_svg(&row);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("title"));
//! ```

use crate::container::Container;
use crate::geometry::{Pos, Rect, Size};

/// Maximum pixel width of the panel.
const MAX_PANEL_W: f64 = 600.0;
/// Maximum pixel height of the panel.
const MAX_PANEL_H: f64 = 400.0;
/// Horizontal margin.
const MARGIN_X: f64 = 40.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the title area above the panel.
const LABEL_H: f64 = 22.0;

/// One box to draw, in root-local coordinates.
struct Node {
    label: String,
    rect: Rect,
    depth: usize,
    container: bool,
}

/// Render a complete SVG document of `root` and its arranged descendants.
///
/// Uses the rects assigned by the last arrangement pass; call
/// [`Container::layout`] first.
pub fn render_container_svg(root: &dyn Container) -> String {
    let mut nodes = Vec::new();
    collect_nodes(root, Pos::ZERO, 1, &mut nodes);
    let title = format!("{} {}", display_name(root.name()), size_label(root.rect().size()));
    render_nodes(&title, root.rect().size(), &nodes)
}

/// Walk the tree, translating each child into root-local coordinates.
fn collect_nodes(container: &dyn Container, origin: Pos, depth: usize, out: &mut Vec<Node>) {
    for cell in container.base().cells().iter().filter(|c| !c.collapsed) {
        let view = cell.view();
        let rect = view.rect().translated(origin);
        let child = view.as_container();
        out.push(Node {
            label: display_name(view.name()).to_string(),
            rect,
            depth,
            container: child.is_some(),
        });
        if let Some(child) = child {
            collect_nodes(child, rect.pos(), depth + 1, out);
        }
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

fn size_label(size: Size) -> String {
    format!("{}×{}", trim(size.width), trim(size.height))
}

/// Format without a trailing `.0` for whole numbers.
fn trim(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width;
    let h = size.height;
    if w <= 0.0 || h <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_nodes(title: &str, frame: Size, nodes: &[Node]) -> String {
    let (pw, ph, scale) = scale_to_fit(frame);
    let total_w = pw + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + ph + MARGIN_TOP;

    let mut svg = String::with_capacity(2048 + nodes.len() * 256);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32,
        total_h as u32,
        total_w,
        total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .title { font-size: 13px; font-weight: bold; fill: #333; }
  .name { font-size: 10px; fill: #222; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .container { fill: none; stroke: #2c6faa; stroke-width: 1.5; stroke-dasharray: 4,2; }
  .leaf { fill: #6ba3d6; fill-opacity: 0.6; stroke: #2c6faa; stroke-width: 1; }
  @media (prefers-color-scheme: dark) {
    .title { fill: #e0e0e0; }
    .name { fill: #eee; }
    .frame { fill: #2d2d2d; stroke: #555; }
    .container { stroke: #5a9fd4; }
    .leaf { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##);

    let center_x = total_w / 2.0;
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="title" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(title)
    ));
    svg.push('\n');

    let panel_x = MARGIN_X;
    let panel_y = MARGIN_TOP + LABEL_H;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="frame" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    for node in nodes {
        let x = panel_x + node.rect.x * scale;
        let y = panel_y + node.rect.y * scale;
        let w = node.rect.width * scale;
        let h = node.rect.height * scale;
        let class = if node.container { "container" } else { "leaf" };
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}" data-depth="{}"/>"#,
            x, y, w, h, class, node.depth
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="name">{} {}</text>"#,
            x + 2.0,
            y + 11.0,
            escape_xml(&node.label),
            size_label(node.rect.size())
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
