// Release gesture: threshold evaluation and one-shot latching.

use lanyard::{LanyardConfig, LanyardSim, Vec3};
use std::cell::Cell;
use std::rc::Rc;

fn counting_sim(pull_threshold: f32) -> (LanyardSim, Rc<Cell<u32>>) {
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    let config = LanyardConfig {
        pull_threshold,
        anchor: Vec3::new(0.0, 15.0, 0.0),
        ..LanyardConfig::default()
    };
    let sim = LanyardSim::new(config, move || seen.set(seen.get() + 1)).unwrap();
    (sim, fired)
}

#[test]
fn deep_release_fires_exactly_once() {
    let (mut sim, fired) = counting_sim(1.0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -1.5, 0.0));
    sim.end_drag();
    assert_eq!(fired.get(), 1);
    assert!(sim.has_fired());

    // A second, even deeper release must not fire again.
    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -2.0, 0.0));
    sim.end_drag();
    assert_eq!(fired.get(), 1);
}

#[test]
fn shallow_release_does_not_fire() {
    let (mut sim, fired) = counting_sim(1.0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -0.5, 0.0));
    sim.end_drag();
    assert_eq!(fired.get(), 0);
    assert!(!sim.has_fired());
}

#[test]
fn shallow_release_does_not_burn_the_latch() {
    let (mut sim, fired) = counting_sim(1.0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, 0.5, 0.0));
    sim.end_drag();
    assert_eq!(fired.get(), 0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -3.0, 0.0));
    sim.end_drag();
    assert_eq!(fired.get(), 1);
}

#[test]
fn duplicate_end_does_not_reevaluate() {
    let (mut sim, fired) = counting_sim(1.0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -1.5, 0.0));
    sim.end_drag();
    sim.end_drag();
    assert_eq!(fired.get(), 1);
}

#[test]
fn end_without_begin_is_a_no_op() {
    let (mut sim, fired) = counting_sim(1.0);
    sim.end_drag();
    assert_eq!(fired.get(), 0);
    assert!(!sim.is_dragging());
}

#[test]
fn callback_fires_synchronously_from_end_drag() {
    let (mut sim, fired) = counting_sim(1.0);

    sim.begin_drag();
    sim.update_drag(Vec3::new(0.0, -5.0, 0.0));
    assert_eq!(fired.get(), 0, "must not fire before release");
    sim.end_drag();
    assert_eq!(fired.get(), 1);
}
