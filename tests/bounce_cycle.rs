use glam::Vec2;
use gravity_bounce::platform::{CanvasGeometry, ManualTimer, Timer};
use gravity_bounce::renderer::{DrawCommand, RecordingSurface};
use gravity_bounce::{BounceVariant, Direction, Settings, Simulator};

fn settings() -> Settings {
    Settings {
        gravity: 9.8,
        units: 7.5,
        fps: 60.0,
        ..Default::default()
    }
}

#[test]
fn tap_spawns_ball_that_bounces_back_to_spawn_height() {
    let mut sim = Simulator::new(settings(), CanvasGeometry::unscaled(400.0, 400.0), 1).unwrap();
    let mut surface = RecordingSurface::new();

    sim.pointer_down(Vec2::new(100.0, 100.0), 5_000.0);
    sim.pointer_up(5_000.0);

    assert_eq!(sim.shapes().len(), 1);
    let shape = &sim.shapes()[0];
    assert_eq!(shape.r, 10.0);
    assert_eq!(shape.pos, Vec2::new(100.0, 100.0));
    assert_eq!(shape.direction, Direction::Down);

    // Fall until the floor flips the direction
    let mut ticks = 0;
    while sim.shapes()[0].direction == Direction::Down {
        sim.tick(&mut surface);
        ticks += 1;
        assert!(ticks < 1_000, "ball never reached the floor");
    }
    let shape = &sim.shapes()[0];
    assert_eq!(shape.pos.y + shape.r, 400.0);
    assert!(shape.dy < 0.0);

    // Rise until it settles at the apex again
    while sim.shapes()[0].direction == Direction::Up {
        sim.tick(&mut surface);
        ticks += 1;
        assert!(ticks < 2_000, "ball never returned to its apex");
    }
    let shape = &sim.shapes()[0];
    assert_eq!(shape.pos.y, 100.0);
    assert_eq!(shape.dy, 0.0);
    assert_eq!(shape.pos.x, 100.0);

    // One clear and one circle per tick
    assert_eq!(surface.frame_count(), ticks);
    assert!(matches!(
        surface.last_frame(),
        [DrawCommand::Clear { .. }, DrawCommand::FillCircle { .. }]
    ));
}

#[test]
fn ball_keeps_bouncing_between_apex_and_floor() {
    let mut sim = Simulator::new(settings(), CanvasGeometry::unscaled(400.0, 400.0), 1).unwrap();
    let mut surface = RecordingSurface::new();
    sim.spawn_from_press(Vec2::new(200.0, 50.0), 200.0);

    let mut floor_hits = 0;
    let mut last = Direction::Down;
    for _ in 0..5_000 {
        sim.tick(&mut surface);
        let shape = &sim.shapes()[0];
        assert!(shape.pos.y >= 50.0 - 1e-3);
        assert!(shape.pos.y <= 400.0 - shape.r);
        if shape.direction == Direction::Up && last == Direction::Down {
            floor_hits += 1;
        }
        last = shape.direction;
    }
    assert!(floor_hits >= 10, "only {} bounces", floor_hits);
}

#[test]
fn floor_stop_variant_stays_on_the_floor() {
    let settings = Settings {
        bounce_variant: BounceVariant::FloorStop,
        ..settings()
    };
    let mut sim = Simulator::new(settings, CanvasGeometry::unscaled(400.0, 400.0), 1).unwrap();
    let mut surface = RecordingSurface::new();
    sim.spawn_from_press(Vec2::new(100.0, 100.0), 0.0);

    while sim.shapes()[0].pos.y <= 390.0 {
        sim.tick(&mut surface);
    }
    let frozen_y = sim.shapes()[0].pos.y;
    for _ in 0..100 {
        sim.tick(&mut surface);
        assert_eq!(sim.shapes()[0].dy, 0.0);
        assert_eq!(sim.shapes()[0].pos.y, frozen_y);
    }
}

#[test]
fn start_stop_drive_a_single_interval() {
    let mut sim = Simulator::new(settings(), CanvasGeometry::unscaled(400.0, 400.0), 1).unwrap();
    let mut timer = ManualTimer::new();

    assert!(sim.start(&mut timer).unwrap());
    assert!(!sim.start(&mut timer).unwrap());
    assert_eq!(timer.active_count(), 1);

    let handle = sim.timer_handle().unwrap();
    assert_eq!(timer.fires_within(handle, 1_000.0), 60);

    sim.stop(&mut timer);
    sim.stop(&mut timer);
    assert_eq!(timer.active_count(), 0);

    // Timer handles from other owners are untouched by a stopped simulator
    let other = timer.schedule_repeating(100.0).unwrap();
    sim.stop(&mut timer);
    assert!(timer.is_active(other));
}
