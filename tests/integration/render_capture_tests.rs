use super::{given_no_startup_feed, ROOT_ID};
use plantar_map::ShellState;

#[test]
fn given_the_mock_shell_should_tag_props_with_the_root_id() {
    let (_driver, renderer) = given_no_startup_feed();

    renderer.with_renders(|renders| {
        assert_eq!(renders[0].root_id.as_deref(), Some(ROOT_ID));
    });
}

#[test]
fn given_initial_props_when_set_props_invoked_should_render_again() {
    let (mut driver, renderer) = given_no_startup_feed();

    renderer.with_renders(|renders| {
        (renders[0].set_props)(ShellState {
            value: "7".to_string(),
            label: "updated".to_string(),
        });
    });

    driver.process_events();

    // The replaced state never reaches the visual output, but the swap still
    // re-renders with the batch intact.
    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert!(renders[1].sensor_data.is_empty());
    });
}

#[test]
fn given_successive_replacements_each_should_render_again() {
    let (mut driver, renderer) = given_no_startup_feed();

    renderer.with_renders(|renders| {
        (renders[0].set_props)(ShellState {
            value: "1".to_string(),
            label: "first".to_string(),
        });
    });
    driver.process_events();

    renderer.with_renders(|renders| {
        (renders[1].set_props)(ShellState {
            value: "2".to_string(),
            label: "second".to_string(),
        });
    });
    driver.process_events();

    assert_eq!(renderer.count(), 3);
}
