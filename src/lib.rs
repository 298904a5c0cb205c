//! A foot-pressure heatmap widget: sensor readings in, a drawable scene of
//! colored markers out.
//!
//! The widget renders a reading batch as fixed-position markers over a foot
//! outline, colored along a green-to-red pressure scale, with a gradient
//! legend underneath. Rendering is a pure function of its props; the crate
//! also ships a small host shell (unidirectional data flow, replace-state
//! callback) that re-renders whenever its input changes.
//!
//! ## Example
//!
//! ```rust
//! use plantar_map::{PressureMap, PressureProps, SensorReading};
//!
//! let map = PressureMap::default();
//! let props = PressureProps::new(
//!     Some("feet-pressure".to_string()),
//!     vec![
//!         SensorReading { id: 1, name: "L0".to_string(), value: 0.0 },
//!         SensorReading { id: 2, name: "R2".to_string(), value: 1100.0 },
//!     ],
//! );
//!
//! let scene = map.compose(&props).unwrap();
//! println!("{}", scene.to_svg());
//! ```
//!
//! To run the widget reactively, implement [`Renderer`] for your surface
//! (or use [`SvgRenderer`]) and drive it with a [`ShellRuntime`]; see
//! `src/bin/mock_host.rs` for the wired-up mock host page.

// Module declarations
mod color;
mod effect;
mod emitter;
mod position;
mod props;
mod reading;
mod renderer;
mod runtime;
mod scene;
mod shell;

// Public re-exports
pub use color::{pressure_color, Color, MAX_PRESSURE};
pub use effect::Effect;
pub use emitter::Emitter;
pub use position::{Point, PositionTable};
pub use props::PressureProps;
pub use reading::{validate_batch, InputError, SensorReading};
pub use renderer::{PressureMap, Renderer, SvgRenderer};
pub use runtime::ShellRuntime;
pub use scene::{Anchor, Gradient, Node, Paint, Scene, SCENE_HEIGHT, SCENE_WIDTH};
pub use shell::{DemoShell, ShellEvent, ShellLogic, ShellModel, ShellState};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestShellDriver, TestShellRuntime};
