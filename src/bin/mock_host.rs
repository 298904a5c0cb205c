//! Mock host page: feeds the widget a canned reading batch and prints the
//! scenes it renders as SVG.
//!
//! Usage:
//!   cargo run --bin mock_host > pressure.svg
//!
//! The first scene is the empty mount; the second is the re-render after the
//! mock batch arrives, the same way a live feed would drive the widget.

use anyhow::Result;
use plantar_map::{DemoShell, PressureMap, SensorReading, ShellModel, ShellRuntime, SvgRenderer};

const MOCK_BATCH: &str = r#"[
    {"id": 1, "name": "L0", "value": 120},
    {"id": 2, "name": "L1", "value": 430},
    {"id": 3, "name": "L2", "value": 890},
    {"id": 4, "name": "R0", "value": 0},
    {"id": 5, "name": "R1", "value": 550},
    {"id": 6, "name": "R2", "value": 1240}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let readings: Vec<SensorReading> = serde_json::from_str(MOCK_BATCH)?;
    let shell = DemoShell::new(readings).with_root_id("feet-pressure");
    let renderer = SvgRenderer::new(PressureMap::default(), std::io::stdout());

    let mut runtime = ShellRuntime::new(ShellModel::default(), shell, renderer);
    runtime.run_until_idle();

    Ok(())
}
