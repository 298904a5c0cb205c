//! The renderer's input contract.

use crate::reading::SensorReading;
use crate::shell::ShellState;

/// Props handed to the renderer on every render.
///
/// The only externally meaningful interface of the widget: an optional scene
/// root identifier, the reading batch in draw order, and the replace-state
/// callback the host shell threads through. The rendering logic never
/// invokes `set_props`; it exists for interactive hosts that mount controls
/// next to the heatmap.
pub struct PressureProps {
    pub root_id: Option<String>,
    pub sensor_data: Vec<SensorReading>,
    pub set_props: Box<dyn Fn(ShellState) + Send>,
}

impl PressureProps {
    /// Props with a no-op replace-state callback.
    ///
    /// This is the whole contract for hosts that only want scenes out; the
    /// shell swaps in a live callback when it derives props itself.
    pub fn new(root_id: Option<String>, sensor_data: Vec<SensorReading>) -> Self {
        Self {
            root_id,
            sensor_data,
            set_props: Box::new(|_| {}),
        }
    }
}

impl Default for PressureProps {
    fn default() -> Self {
        Self::new(None, Vec::new())
    }
}
