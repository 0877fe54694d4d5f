//! Swipe Physics Simulation
//!
//! Drives a `SwipeController` through a scripted drag/release/programmatic
//! session at a fixed 60 Hz timestep and prints the offset trajectory, then
//! shows the velocity-tracking/inertia loop a host runs for free-scroll
//! momentum.
//!
//! Run with: cargo run -p flick_swipe --example swipe_sim

use flick_animation::{Inertia, VelocityTracker};
use flick_core::{Orientation, PanelGeometry, UniformPanel};
use flick_swipe::SwipeController;

const DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let geometry = PanelGeometry::new(1000.0, 600.0, 1.0);
    let panel = UniformPanel::new(4, 1000.0);
    let mut controller = SwipeController::new(Orientation::Horizontal);

    // Layout pass before any interaction
    controller.update(&panel, &geometry, DT);

    println!("-- drag 20 frames at 12 units/frame, then release --");
    for _ in 0..20 {
        controller.swipe_by(&geometry, 12.0, true);
        controller.update(&panel, &geometry, DT);
    }
    println!(
        "dragged offset: {:.1} (raw 240.0, elastically softened)",
        controller.effective_offset(&geometry)
    );

    controller.on_release_interaction();
    let committed = controller.update(&panel, &geometry, DT);
    println!(
        "release: committed={committed} page={}",
        controller.current_page()
    );

    let mut frame = 0;
    while controller.is_animating() {
        controller.update(&panel, &geometry, DT);
        frame += 1;
        if frame % 10 == 0 {
            println!(
                "frame {frame:3}: offset {:8.2}",
                controller.effective_offset(&geometry)
            );
        }
    }
    println!(
        "settled on page {} at offset {:.1}, {:.1} from the end",
        controller.current_page(),
        controller.effective_offset(&geometry),
        controller.distance_from_end()
    );

    println!("-- programmatic jump to the last page, animated --");
    controller.set_current_page(3, true, true);
    controller.update(&panel, &geometry, DT);
    while controller.is_animating() {
        controller.update(&panel, &geometry, DT);
    }
    println!(
        "now on page {} at offset {:.1}",
        controller.current_page(),
        controller.effective_offset(&geometry)
    );

    println!("-- host-side momentum: sample a flick, then coast --");
    let mut tracker = VelocityTracker::new();
    let mut clock = 0.0_f64;
    for _ in 0..6 {
        tracker.add_sample(-18.0, clock);
        clock += DT as f64;
    }
    let mut inertia = Inertia::new();
    inertia.start(tracker.velocity(clock));
    tracker.clear();

    let mut coasted = 0.0;
    while inertia.is_active() {
        coasted += inertia.tick(DT);
    }
    println!("flick coasted {coasted:.1} units after release");
}
