//! Renderer abstraction and the pressure-map scene composer.

use std::io::{self, Write};

#[cfg(any(test, feature = "testing"))]
use std::sync::{Arc, Mutex};

use crate::color::{pressure_color, Color};
use crate::position::PositionTable;
use crate::props::PressureProps;
use crate::reading::{validate_batch, InputError};
use crate::scene::{Anchor, Gradient, Node, Paint, Scene};

const OUTLINE_WIDTH: f64 = 300.0;
const OUTLINE_HEIGHT: f64 = 500.0;
const MARKER_RADIUS: f64 = 17.0;
const VALUE_LABEL_RISE: f64 = 20.0;
const NAME_LABEL_DROP: f64 = 5.0;
const VALUE_FONT_SIZE: f64 = 15.0;
const NAME_FONT_SIZE: f64 = 13.0;
const LEGEND_FONT_SIZE: f64 = 17.0;
const LEGEND_X: f64 = 40.0;
const LEGEND_Y: f64 = 500.0;
const LEGEND_WIDTH: f64 = 200.0;
const LEGEND_HEIGHT: f64 = 20.0;
const LEGEND_CAPTION_Y: f64 = 540.0;
const GRADIENT_ID: &str = "pressure-gradient";

const DEFAULT_OUTLINE_HREF: &str = "assets/feet.svg";

/// Renderer abstraction consumed by the shell runtime.
///
/// Implement this to integrate the widget with your rendering surface. The
/// [`render`](Self::render) method is called with fresh [`PressureProps`]
/// whenever the host's input changes.
pub trait Renderer {
    fn render(&mut self, props: PressureProps);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, props: PressureProps) {
        (**self).render(props)
    }
}

/// The pressure heatmap composer: props in, drawable scene out.
///
/// Stateless apart from its fixed configuration (the position table and the
/// outline asset reference). [`compose`](Self::compose) is a pure function;
/// calling it twice with equal props yields equal scenes.
///
/// # Example
///
/// ```rust
/// use plantar_map::{PressureMap, PressureProps, SensorReading};
///
/// let map = PressureMap::default();
/// let props = PressureProps::new(
///     Some("feet-pressure".to_string()),
///     vec![SensorReading { id: 1, name: "L0".to_string(), value: 430.0 }],
/// );
/// let scene = map.compose(&props).unwrap();
/// assert!(scene.to_svg().contains("circle"));
/// ```
#[derive(Debug, Clone)]
pub struct PressureMap {
    positions: PositionTable,
    outline_href: String,
}

impl Default for PressureMap {
    fn default() -> Self {
        Self::new(PositionTable::standard(), DEFAULT_OUTLINE_HREF)
    }
}

impl PressureMap {
    /// A composer with a custom position table or outline asset.
    ///
    /// The outline reference is passed through to the scene untouched; asset
    /// resolution belongs to the host build or runtime.
    pub fn new(positions: PositionTable, outline_href: impl Into<String>) -> Self {
        Self {
            positions,
            outline_href: outline_href.into(),
        }
    }

    /// Compose the 300×550 scene for a reading batch.
    ///
    /// The batch is validated first; a rejected batch produces no scene at
    /// all. Readings whose name has no position entry are skipped with a
    /// warning and the rest still render. An empty batch renders just the
    /// outline and the legend.
    pub fn compose(&self, props: &PressureProps) -> Result<Scene, InputError> {
        validate_batch(&props.sensor_data)?;

        let mut scene = Scene::new(props.root_id.clone());
        scene.push(Node::Image {
            href: self.outline_href.clone(),
            x: 0.0,
            y: 0.0,
            width: OUTLINE_WIDTH,
            height: OUTLINE_HEIGHT,
        });

        for reading in &props.sensor_data {
            let Some(center) = self.positions.position(&reading.name) else {
                tracing::warn!(
                    id = reading.id,
                    name = %reading.name,
                    "no position entry for sensor, skipping reading"
                );
                continue;
            };
            scene.push(Node::Circle {
                cx: center.x,
                cy: center.y,
                radius: MARKER_RADIUS,
                fill: Paint::Solid(pressure_color(reading.value)),
            });
            scene.push(Node::Text {
                x: center.x,
                y: center.y - VALUE_LABEL_RISE,
                content: format_value(reading.value),
                anchor: Anchor::Middle,
                fill: Paint::Solid(Color::LABEL),
                font_size: VALUE_FONT_SIZE,
                bold: true,
            });
            scene.push(Node::Text {
                x: center.x,
                y: center.y + NAME_LABEL_DROP,
                content: reading.name.clone(),
                anchor: Anchor::Middle,
                fill: Paint::Solid(Color::LABEL),
                font_size: NAME_FONT_SIZE,
                bold: true,
            });
        }

        self.push_legend(&mut scene);
        Ok(scene)
    }

    fn push_legend(&self, scene: &mut Scene) {
        scene.push(Node::Rect {
            x: LEGEND_X,
            y: LEGEND_Y,
            width: LEGEND_WIDTH,
            height: LEGEND_HEIGHT,
            fill: Paint::LinearGradient(Gradient {
                id: GRADIENT_ID.to_string(),
                from: Color::SCALE_LOW,
                to: Color::SCALE_HIGH,
            }),
        });
        scene.push(Node::Text {
            x: LEGEND_X,
            y: LEGEND_CAPTION_Y,
            content: "Low [0]".to_string(),
            anchor: Anchor::Start,
            fill: Paint::Solid(Color::CAPTION),
            font_size: LEGEND_FONT_SIZE,
            bold: false,
        });
        scene.push(Node::Text {
            x: LEGEND_X + LEGEND_WIDTH + 10.0,
            y: LEGEND_CAPTION_Y,
            content: "High [1100+]".to_string(),
            anchor: Anchor::End,
            fill: Paint::Solid(Color::CAPTION),
            font_size: LEGEND_FONT_SIZE,
            bold: false,
        });
    }
}

/// Value labels print the way the feed wrote them: integers without a
/// trailing `.0`, anything else with its full decimal expansion.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < (i64::MAX as f64) {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// A [`Renderer`] that composes scenes and writes them as SVG markup.
///
/// Suits hosts whose surface is a document: each render appends one complete
/// `<svg>` element to the writer. Rejected batches are logged and render
/// nothing, per the all-or-nothing input contract.
pub struct SvgRenderer<W: io::Write> {
    map: PressureMap,
    out: W,
}

impl<W: io::Write> SvgRenderer<W> {
    pub fn new(map: PressureMap, out: W) -> Self {
        Self { map, out }
    }
}

impl<W: io::Write> Renderer for SvgRenderer<W> {
    fn render(&mut self, props: PressureProps) {
        match self.map.compose(&props) {
            Ok(scene) => {
                if let Err(err) = writeln!(self.out, "{scene}") {
                    tracing::error!(%err, "failed to write scene");
                }
            }
            Err(err) => tracing::error!(%err, "rejected reading batch"),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered props for assertions.
///
/// Only available with the `testing` feature. Use it with
/// [`TestShellRuntime`](crate::TestShellRuntime) to capture and inspect the
/// props each render produced.
pub struct TestRenderer {
    renders: Arc<Mutex<Vec<PressureProps>>>,
}

#[cfg(any(test, feature = "testing"))]
struct InternalTestRenderer {
    renders: Arc<Mutex<Vec<PressureProps>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for InternalTestRenderer {
    fn render(&mut self, props: PressureProps) {
        self.renders.lock().expect("capture lock poisoned").push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clone for TestRenderer {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl Renderer for TestRenderer {
    fn render(&mut self, props: PressureProps) {
        self.renders.lock().expect("capture lock poisoned").push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for TestRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl TestRenderer {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A boxed renderer sharing this capture storage, for handing to the
    /// runtime while the test keeps inspecting renders.
    pub fn boxed(&self) -> Box<dyn Renderer + Send> {
        Box::new(InternalTestRenderer {
            renders: self.renders.clone(),
        })
    }

    /// Number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().expect("capture lock poisoned").len()
    }

    /// Inspect the captured renders with a closure.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<PressureProps>) -> R,
    {
        let renders = self.renders.lock().expect("capture lock poisoned");
        f(&renders)
    }
}
