use plantar_map::{
    DemoShell, Renderer, SensorReading, ShellModel, ShellState, TestRenderer, TestShellDriver,
    TestShellRuntime,
};

fn sample_batch() -> Vec<SensorReading> {
    vec![
        SensorReading {
            id: 1,
            name: "L0".to_string(),
            value: 0.0,
        },
        SensorReading {
            id: 2,
            name: "R2".to_string(),
            value: 1100.0,
        },
    ]
}

// Test helper that runs the demo shell and returns both driver and renderer
fn run_shell(
    mock_readings: Vec<SensorReading>,
) -> (
    TestShellDriver<DemoShell, Box<dyn Renderer + Send>>,
    TestRenderer,
) {
    let renderer = TestRenderer::new();
    let shell = DemoShell::new(mock_readings).with_root_id("feet-pressure");

    let runtime = TestShellRuntime::new(ShellModel::default(), shell, renderer.boxed());
    let driver = runtime.run();

    (driver, renderer)
}

#[test]
fn given_no_mock_readings_when_ran_should_render_empty_props() {
    let (_driver, renderer) = run_shell(vec![]);

    assert_eq!(renderer.count(), 1);
    renderer.with_renders(|renders| {
        assert!(renders[0].sensor_data.is_empty());
        assert_eq!(renders[0].root_id.as_deref(), Some("feet-pressure"));
    });
}

#[test]
fn given_mock_readings_when_ran_should_feed_them_through_the_startup_effect() {
    let (mut driver, renderer) = run_shell(sample_batch());

    driver.process_events();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert!(renders[0].sensor_data.is_empty());
        assert_eq!(renders[1].sensor_data, sample_batch());
    });
}

#[test]
fn given_initial_props_when_set_props_invoked_should_rerender_with_readings_intact() {
    let (mut driver, renderer) = run_shell(sample_batch());

    driver.process_events();

    renderer.with_renders(|renders| {
        (renders[1].set_props)(ShellState {
            value: "42".to_string(),
            label: "pressed".to_string(),
        });
    });

    driver.process_events();

    // The state swap re-renders, and the batch on screen is untouched.
    assert_eq!(renderer.count(), 3);
    renderer.with_renders(|renders| {
        assert_eq!(renders[2].sensor_data, sample_batch());
    });
}
