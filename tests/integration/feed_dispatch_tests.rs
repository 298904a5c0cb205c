use super::{given_a_startup_effect, given_no_startup_feed};
use plantar_map::{Effect, SensorReading, ShellEvent};

fn batch(first_id: i64, value: f64) -> Vec<SensorReading> {
    vec![
        SensorReading {
            id: first_id,
            name: "L0".to_string(),
            value,
        },
        SensorReading {
            id: first_id + 1,
            name: "R0".to_string(),
            value,
        },
    ]
}

#[test]
fn given_no_startup_feed_should_render_initial_props_once() {
    let (_driver, renderer) = given_no_startup_feed();

    assert_eq!(renderer.count(), 1);
    renderer.with_renders(|renders| {
        assert!(renders[0].sensor_data.is_empty());
    });
}

#[test]
fn given_a_startup_batch_should_render_the_readings() {
    let readings = batch(1, 430.0);
    let (mut driver, renderer) =
        given_a_startup_effect(Effect::just(ShellEvent::ReadingsArrived(readings.clone())));

    driver.process_events();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| {
        assert!(renders[0].sensor_data.is_empty());
        assert_eq!(renders[1].sensor_data, readings);
    });
}

#[test]
fn given_a_batch_of_feed_effects_should_apply_all_in_order() {
    let first = batch(1, 120.0);
    let second = batch(3, 990.0);
    let (mut driver, renderer) = given_a_startup_effect(Effect::batch(vec![
        Effect::just(ShellEvent::ReadingsArrived(first.clone())),
        Effect::just(ShellEvent::ReadingsArrived(second.clone())),
    ]));

    driver.process_events();

    // One render per arriving batch, each replacing the last wholesale:
    // 1. Initial render (no readings)
    // 2. After the first batch
    // 3. After the second batch
    assert_eq!(renderer.count(), 3);
    renderer.with_renders(|renders| {
        assert!(renders[0].sensor_data.is_empty());
        assert_eq!(renders[1].sensor_data, first);
        assert_eq!(renders[2].sensor_data, second);
    });
}
