//! Typed drawable scene description and its SVG serialization.
//!
//! The scene is the renderer's only output: a flat node list over the small
//! primitive set {image, circle, text, rect, linear-gradient}. Hosts with a
//! richer surface consume the nodes directly; hosts that just want markup
//! call [`Scene::to_svg`].

use std::fmt;

use serde::Serialize;

use crate::color::Color;

/// Scene width in logical units.
pub const SCENE_WIDTH: f64 = 300.0;
/// Scene height in logical units.
pub const SCENE_HEIGHT: f64 = 550.0;

/// Horizontal left-to-right gradient between two colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    /// Identifier the filled node references, unique within a scene.
    pub id: String,
    pub from: Color,
    pub to: Color,
}

/// Fill style for a shape or text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Paint {
    Solid(Color),
    LinearGradient(Gradient),
}

/// Horizontal anchoring of a text node relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// One drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Image {
        href: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: Paint,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: Anchor,
        fill: Paint,
        font_size: f64,
        bold: bool,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Paint,
    },
}

/// A fixed-size drawable scene: an optional root identifier plus nodes in
/// draw order.
///
/// Scenes are plain values. Equal inputs to the renderer produce equal
/// scenes, and equal scenes serialize to identical bytes, so hosts may diff,
/// cache, or replay them freely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub root_id: Option<String>,
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<Node>,
}

impl Scene {
    /// An empty scene at the standard widget size.
    pub fn new(root_id: Option<String>) -> Self {
        Self {
            root_id,
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Serialize the scene to standalone SVG markup.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Gradients referenced by any node, first use wins per id.
    fn gradient_defs(&self) -> Vec<&Gradient> {
        let mut defs: Vec<&Gradient> = Vec::new();
        for node in &self.nodes {
            let paint = match node {
                Node::Circle { fill, .. }
                | Node::Text { fill, .. }
                | Node::Rect { fill, .. } => fill,
                Node::Image { .. } => continue,
            };
            if let Paint::LinearGradient(gradient) = paint {
                if !defs.iter().any(|def| def.id == gradient.id) {
                    defs.push(gradient);
                }
            }
        }
        defs
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root_id {
            Some(id) => write!(f, "<svg id=\"{}\"", escape(id))?,
            None => f.write_str("<svg")?,
        }
        writeln!(
            f,
            " width=\"{w}px\" height=\"{h}px\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">",
            w = self.width,
            h = self.height,
        )?;

        let defs = self.gradient_defs();
        if !defs.is_empty() {
            writeln!(f, "  <defs>")?;
            for gradient in defs {
                writeln!(
                    f,
                    "    <linearGradient id=\"{}\" x1=\"0%\" y1=\"100%\" x2=\"100%\" y2=\"100%\">",
                    escape(&gradient.id)
                )?;
                writeln!(
                    f,
                    "      <stop offset=\"0%\" stop-color=\"{}\" stop-opacity=\"1\"/>",
                    gradient.from
                )?;
                writeln!(
                    f,
                    "      <stop offset=\"100%\" stop-color=\"{}\" stop-opacity=\"1\"/>",
                    gradient.to
                )?;
                writeln!(f, "    </linearGradient>")?;
            }
            writeln!(f, "  </defs>")?;
        }

        for node in &self.nodes {
            write_node(f, node)?;
        }
        f.write_str("</svg>")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Image {
            href,
            x,
            y,
            width,
            height,
        } => writeln!(
            f,
            "  <image href=\"{}\" x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"/>",
            escape(href)
        ),
        Node::Circle {
            cx,
            cy,
            radius,
            fill,
        } => writeln!(
            f,
            "  <circle cx=\"{cx}\" cy=\"{cy}\" r=\"{radius}\" fill=\"{}\"/>",
            fill_attr(fill)
        ),
        Node::Text {
            x,
            y,
            content,
            anchor,
            fill,
            font_size,
            bold,
        } => {
            let weight = if *bold { " font-weight=\"bold\"" } else { "" };
            writeln!(
                f,
                "  <text x=\"{x}\" y=\"{y}\" text-anchor=\"{}\" fill=\"{}\" font-size=\"{font_size}\"{weight}>{}</text>",
                anchor.as_svg(),
                fill_attr(fill),
                escape(content),
            )
        }
        Node::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => writeln!(
            f,
            "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>",
            fill_attr(fill)
        ),
    }
}

fn fill_attr(paint: &Paint) -> String {
    match paint {
        Paint::Solid(color) => color.to_string(),
        Paint::LinearGradient(gradient) => format!("url(#{})", gradient.id),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
