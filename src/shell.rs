//! The host shell: replaceable page state and the logic contract driving
//! the widget.

use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::emitter::Emitter;
use crate::props::PressureProps;
use crate::reading::SensorReading;

/// The host page's single replaceable state record.
///
/// Replaced wholesale through the `set_props` callback and never consumed by
/// the rendering logic; it exists for page chrome mounted next to the
/// heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub value: String,
    pub label: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            value: String::new(),
            label: "Type Here".to_string(),
        }
    }
}

/// Everything that can happen to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Replace the whole state record (the `set_props` hook).
    ReplaceState(ShellState),
    /// A fresh reading batch arrived from the feed.
    ReadingsArrived(Vec<SensorReading>),
}

/// The shell's model: page state plus the batch currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellModel {
    pub state: ShellState,
    pub readings: Vec<SensorReading>,
}

/// Shell logic contract: three pure functions over concrete shell types.
///
/// - [`init`](Self::init) prepares the model and any startup effects
/// - [`update`](Self::update) reduces `(event, model)` to `(model, effect)`
/// - [`view`](Self::view) derives the renderer's props from the model
///
/// The runtime re-runs `view` and renders after every update, so rendering
/// stays a pure function of the current input; there is no scheduling
/// inside the widget itself.
pub trait ShellLogic {
    fn init(&self, model: ShellModel) -> (ShellModel, Effect);

    fn update(&self, event: ShellEvent, model: &ShellModel) -> (ShellModel, Effect);

    fn view(&self, model: &ShellModel, emitter: &Emitter) -> PressureProps;
}

/// The mock host page: feeds a canned batch on startup, then just mirrors
/// whatever state it is handed.
///
/// # Example
///
/// ```rust
/// use plantar_map::{DemoShell, SensorReading};
///
/// let shell = DemoShell::new(vec![
///     SensorReading { id: 1, name: "L0".to_string(), value: 250.0 },
/// ])
/// .with_root_id("feet-pressure");
/// ```
pub struct DemoShell {
    root_id: Option<String>,
    mock_readings: Vec<SensorReading>,
}

impl DemoShell {
    pub fn new(mock_readings: Vec<SensorReading>) -> Self {
        Self {
            root_id: None,
            mock_readings,
        }
    }

    /// Tag the scenes this shell produces with a root identifier.
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = Some(root_id.into());
        self
    }
}

impl ShellLogic for DemoShell {
    fn init(&self, model: ShellModel) -> (ShellModel, Effect) {
        let effect = if self.mock_readings.is_empty() {
            Effect::none()
        } else {
            Effect::just(ShellEvent::ReadingsArrived(self.mock_readings.clone()))
        };
        (model, effect)
    }

    fn update(&self, event: ShellEvent, model: &ShellModel) -> (ShellModel, Effect) {
        match event {
            ShellEvent::ReplaceState(state) => {
                let new_model = ShellModel {
                    state,
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
            ShellEvent::ReadingsArrived(readings) => {
                let new_model = ShellModel {
                    readings,
                    ..model.clone()
                };
                (new_model, Effect::none())
            }
        }
    }

    fn view(&self, model: &ShellModel, emitter: &Emitter) -> PressureProps {
        let emitter = emitter.clone();
        PressureProps {
            root_id: self.root_id.clone(),
            sensor_data: model.readings.clone(),
            set_props: Box::new(move |state| {
                emitter.emit(ShellEvent::ReplaceState(state));
            }),
        }
    }
}
