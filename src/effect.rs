//! Declarative effects for feeding events back into the shell.

use crate::emitter::Emitter;
use crate::shell::ShellEvent;

/// Declarative description of events to be processed.
///
/// Effects are returned from [`ShellLogic::init`](crate::ShellLogic::init)
/// and [`ShellLogic::update`](crate::ShellLogic::update) alongside the new
/// model. The mock host uses one to push its canned reading batch through
/// the same path a live feed would use.
///
/// # Example
///
/// ```rust
/// use plantar_map::{Effect, ShellEvent};
///
/// // Feed one batch on startup.
/// let effect = Effect::just(ShellEvent::ReadingsArrived(vec![]));
///
/// // No side effects.
/// let effect = Effect::none();
/// ```
pub struct Effect(Box<dyn Fn(&Emitter) + Send + 'static>);

impl Effect {
    fn new() -> Self {
        Self(Box::new(|_| {}))
    }

    pub fn execute(&self, emitter: &Emitter) {
        (self.0)(emitter);
    }

    /// An effect queueing a single event.
    pub fn just(event: ShellEvent) -> Self {
        Self(Box::new(move |emitter: &Emitter| {
            emitter.emit(event.clone());
        }))
    }

    /// An empty effect. Prefer this to signal "no side effects".
    pub fn none() -> Self {
        Self::new()
    }

    /// Combine multiple effects; all their events are queued in order.
    pub fn batch(effects: Vec<Effect>) -> Self {
        Self(Box::new(move |emitter: &Emitter| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}
