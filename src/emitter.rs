//! Event emitter for embedding the replace-state callback in props.

use crossbeam_channel::Sender;

use crate::shell::ShellEvent;

/// Handle for queueing shell events from props callbacks.
///
/// The shell's `view` clones this into the `set_props` callback it embeds in
/// [`PressureProps`](crate::PressureProps). It wraps a lock-free channel
/// sender, so it is cheap to clone and safe to invoke from any thread;
/// events are still processed sequentially by the runtime.
pub struct Emitter(pub(crate) Sender<ShellEvent>);

impl Clone for Emitter {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Emitter {
    pub(crate) fn new(sender: Sender<ShellEvent>) -> Self {
        Self(sender)
    }

    /// Queue an event for processing by the runtime.
    pub fn emit(&self, event: ShellEvent) {
        self.0.send(event).ok();
    }
}
