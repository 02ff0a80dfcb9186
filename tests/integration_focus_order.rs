use desk_wm::placement::FixedJitter;
use desk_wm::window::{OpenRequest, Viewport, WindowRegistry};

fn registry() -> WindowRegistry {
    WindowRegistry::with_jitter(
        Viewport {
            width: 1280.0,
            height: 720.0,
        },
        Box::new(FixedJitter(0.0, 0.0)),
    )
}

#[test]
fn newly_opened_windows_stack_on_top() {
    let mut reg = registry();
    let a = reg.open(OpenRequest::browser("A", "app-a"));
    let b = reg.open(OpenRequest::browser("B", "app-b"));
    let c = reg.open(OpenRequest::browser("C", "app-c"));

    let z = |id| reg.window(id).unwrap().z_order();
    assert!(z(a) < z(b));
    assert!(z(b) < z(c));
}

#[test]
fn focus_raises_exactly_one_window() {
    let mut reg = registry();
    let a = reg.open(OpenRequest::browser("A", "app-a"));
    let b = reg.open(OpenRequest::browser("B", "app-b"));
    let c = reg.open(OpenRequest::browser("C", "app-c"));

    let before_b = reg.window(b).unwrap().z_order();
    reg.focus(a);

    // `a` is now above every other window; `b` and `c` kept their slots.
    let z = |id| reg.window(id).unwrap().z_order();
    assert!(z(a) > z(b));
    assert!(z(a) > z(c));
    assert_eq!(z(b), before_b);
}

#[test]
fn repeated_focus_keeps_raising() {
    let mut reg = registry();
    let a = reg.open(OpenRequest::browser("A", "app-a"));
    let b = reg.open(OpenRequest::browser("B", "app-b"));

    reg.focus(a);
    reg.focus(b);
    reg.focus(a);

    let z = |id| reg.window(id).unwrap().z_order();
    assert!(z(a) > z(b));

    // Z slots stay unique across the whole sequence.
    let mut slots: Vec<u64> = reg.snapshot().values().map(|w| w.z_order()).collect();
    slots.sort_unstable();
    slots.dedup();
    assert_eq!(slots.len(), 2);
}
