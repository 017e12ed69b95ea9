// Host-side integration tests for the simulation context and frame dispatch.

use flowwave_core::*;

fn ctx(w: f64, h: f64) -> SimContext {
    SimContext::with_seed(Surface::fit(w, h, 1.0), 1234)
}

#[test]
fn reset_and_frames_survive_extreme_surfaces() {
    for (w, h) in [(300.0, 200.0), (10.0, 10.0), (4000.0, 3000.0)] {
        let mut sim = ctx(w, h);
        for mode in Mode::ALL {
            sim.set_mode(mode);
            sim.reset();
            let mut painter = RecordingPainter::new();
            for i in 0..5 {
                sim.frame(i as f64 * 16.7, &mut painter);
            }
            assert!(!painter.calls.is_empty());
        }
    }
}

#[test]
fn mode_round_trip_reinitializes_particles_for_current_surface() {
    let mut sim = ctx(640.0, 480.0);
    assert_eq!(sim.field().len(), 120);

    sim.resize(1600.0, 1200.0, 2.0);
    sim.set_mode(Mode::Quantum);
    sim.set_mode(Mode::Fluid);

    let s = *sim.surface();
    assert_eq!((s.width, s.height), (3200, 2400));
    assert_eq!(sim.field().len(), particle_count(s.width, s.height));
    assert_eq!(sim.field().len(), 800);
}

#[test]
fn switching_mode_rewinds_the_wave_packet() {
    let mut sim = ctx(800.0, 600.0);
    sim.set_mode(Mode::Quantum);
    let mut painter = RecordingPainter::new();
    for i in 0..10 {
        sim.frame(i as f64 * 16.0, &mut painter);
    }
    assert!(sim.wave().center > -100.0);
    sim.set_mode(Mode::Quantum);
    assert_eq!(sim.wave().center, -100.0);
}

#[test]
fn fluid_frame_moves_particles_but_quantum_frame_does_not() {
    let mut sim = ctx(800.0, 600.0);
    let before = sim.field().particles().to_vec();
    let mut painter = RecordingPainter::new();
    sim.frame(0.0, &mut painter);
    assert_ne!(before, sim.field().particles());
    assert_eq!(painter.circles().count(), sim.field().len());

    sim.set_mode(Mode::Quantum);
    let reset = sim.field().particles().to_vec();
    let mut painter = RecordingPainter::new();
    sim.frame(16.0, &mut painter);
    assert_eq!(reset, sim.field().particles());
    assert_eq!(painter.circles().count(), 0);
    assert!((sim.wave().center - (-98.7)).abs() < 1e-4);
}

#[test]
fn pointer_leave_disables_attraction() {
    let mut sim = ctx(800.0, 600.0);
    let target = sim.field().particles()[0].pos;
    sim.pointer.entered(target.x + 5.0, target.y);
    assert!(sim.pointer.is_present());
    sim.pointer.left();

    let mut reference = ctx(800.0, 600.0);
    let mut painter = RecordingPainter::new();
    sim.frame(100.0, &mut painter);
    reference.frame(100.0, &mut painter);
    assert_eq!(sim.field().particles(), reference.field().particles());
}

#[test]
fn clock_counts_frames() {
    let mut sim = ctx(800.0, 600.0);
    let mut painter = RecordingPainter::new();
    sim.frame(1000.0, &mut painter);
    sim.frame(1016.5, &mut painter);
    assert_eq!(sim.clock().frames, 2);
    assert_eq!(sim.clock().dt_ms, 16.5);
}
