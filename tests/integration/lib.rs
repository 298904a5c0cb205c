mod mock_shell;

use plantar_map::{Effect, Renderer, ShellModel, TestRenderer, TestShellDriver, TestShellRuntime};
pub(crate) use mock_shell::*;

mod feed_dispatch_tests;
mod render_capture_tests;

pub(crate) fn given_a_startup_effect(
    effect: Effect,
) -> (
    TestShellDriver<MockFeedShell, Box<dyn Renderer + Send>>,
    TestRenderer,
) {
    let renderer = TestRenderer::new();

    let mut mock_feed = MockFeedDependency::new();
    mock_feed.expect_on_startup().return_once(move || effect);

    let shell = MockFeedShell {
        feed: Box::new(mock_feed),
    };

    let runtime = TestShellRuntime::new(ShellModel::default(), shell, renderer.boxed());
    let driver = runtime.run();

    (driver, renderer)
}

pub(crate) fn given_no_startup_feed() -> (
    TestShellDriver<MockFeedShell, Box<dyn Renderer + Send>>,
    TestRenderer,
) {
    given_a_startup_effect(Effect::none())
}
