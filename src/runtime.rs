//! The shell runtime that drives rendering from the event queue.

use crossbeam_channel::Receiver;

use crate::emitter::Emitter;
use crate::renderer::Renderer;
use crate::shell::{ShellEvent, ShellLogic, ShellModel};

/// The runtime wiring the shell to the renderer.
///
/// It:
/// 1. Initializes the model and startup effects via [`ShellLogic::init`]
/// 2. Processes events through [`ShellLogic::update`]
/// 3. Reduces the model to [`PressureProps`](crate::PressureProps) via
///    [`ShellLogic::view`]
/// 4. Delivers the props to the [`Renderer`]
///
/// A single [`Emitter`] feeds the queue; events may be emitted from any
/// thread but are processed sequentially here, so each render is an
/// independent, synchronous pass over its own input. Effects execute inline
/// after the render they were returned with.
///
/// For testing with manual control, use [`TestShellRuntime`] with a
/// [`TestRenderer`](crate::TestRenderer).
pub struct ShellRuntime<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<ShellEvent>,
    model: ShellModel,
    emitter: Emitter,
}

impl<Logic, Render> ShellRuntime<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    /// Create a new runtime. Nothing renders until it is run.
    pub fn new(init_model: ShellModel, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = crossbeam_channel::unbounded();
        let emitter = Emitter::new(event_sender);

        ShellRuntime {
            logic,
            renderer,
            event_receiver,
            model: init_model,
            emitter,
        }
    }

    /// Initialize, render the initial props, then block processing events
    /// until every emitter is gone and the channel closes.
    pub fn run(&mut self) {
        self.start();
        loop {
            match self.event_receiver.recv() {
                Ok(event) => self.step(event),
                Err(_) => break, // Channel closed
            }
        }
    }

    /// Initialize, render, then process events until the queue is empty and
    /// return.
    ///
    /// For hosts that own their outer loop: call once at mount, then again
    /// whenever their scheduler decides queued input should be flushed.
    pub fn run_until_idle(&mut self) {
        self.start();
        self.process_queued_events();
    }

    fn start(&mut self) {
        let (init_model, init_effect) = self.logic.init(self.model.clone());

        let initial_props = self.logic.view(&init_model, &self.emitter);
        self.renderer.render(initial_props);
        self.model = init_model;

        init_effect.execute(&self.emitter);
    }

    fn step(&mut self, event: ShellEvent) {
        let (new_model, effect) = self.logic.update(event, &self.model);

        // Reduce to props and render before effects get a chance to queue
        // follow-up events.
        let props = self.logic.view(&new_model, &self.emitter);
        self.renderer.render(props);

        self.model = new_model;

        effect.execute(&self.emitter);
    }

    fn process_queued_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Returned by [`TestShellRuntime::run`]. Only available with the `testing`
/// feature.
pub struct TestShellDriver<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    runtime: ShellRuntime<Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Logic, Render> TestShellDriver<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    /// Process all queued events. Call after emitting events (e.g. through a
    /// captured `set_props` callback) to drive the loop in tests.
    pub fn process_events(&mut self) {
        self.runtime.process_queued_events();
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime with manual event processing control.
///
/// Unlike [`ShellRuntime::run`], emitted events are not processed until the
/// test calls [`TestShellDriver::process_events`], giving precise control
/// over event timing.
///
/// ```rust
/// use plantar_map::{DemoShell, ShellModel, TestRenderer, TestShellRuntime};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestShellRuntime::new(
///     ShellModel::default(),
///     DemoShell::new(vec![]),
///     renderer.boxed(),
/// );
/// let mut driver = runtime.run();
/// driver.process_events();
///
/// renderer.with_renders(|renders| {
///     assert!(renders[0].sensor_data.is_empty());
/// });
/// ```
pub struct TestShellRuntime<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    runtime: ShellRuntime<Logic, Render>,
}

#[cfg(any(test, feature = "testing"))]
impl<Logic, Render> TestShellRuntime<Logic, Render>
where
    Logic: ShellLogic,
    Render: Renderer,
{
    pub fn new(init_model: ShellModel, logic: Logic, renderer: Render) -> Self {
        TestShellRuntime {
            runtime: ShellRuntime::new(init_model, logic, renderer),
        }
    }

    /// Initialize the runtime, render the initial props, execute startup
    /// effects, and return a driver for manual event processing.
    pub fn run(mut self) -> TestShellDriver<Logic, Render> {
        self.runtime.start();

        TestShellDriver {
            runtime: self.runtime,
        }
    }
}
