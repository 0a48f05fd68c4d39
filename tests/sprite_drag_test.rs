//! Sprite Drag Tests
//!
//! Press/move/release sequences against a sprite anchored at its top-left.

use kinetics_sim::{Delta, DragState, Point, PointerEvent, Sprite};

fn sprite_at(x: f32, y: f32) -> Sprite {
    Sprite::new(Point::new(x, y), 64.0, 64.0)
}

#[test]
fn test_press_move_release_moves_once() {
    let mut sprite = sprite_at(100.0, 100.0);
    sprite.handle(PointerEvent::Press(Point::new(110.0, 110.0)));
    assert!(sprite.is_dragging());

    let delta = sprite.handle(PointerEvent::Move(Point::new(130.0, 125.0)));
    assert_eq!(delta, Some(Delta { dx: 20.0, dy: 15.0 }));
    assert_eq!(sprite.position, Point::new(120.0, 115.0));

    sprite.handle(PointerEvent::Release(Point::new(130.0, 125.0)));
    assert!(!sprite.is_dragging());

    assert!(sprite.handle(PointerEvent::Move(Point::new(300.0, 300.0))).is_none());
    assert_eq!(sprite.position, Point::new(120.0, 115.0));
}

#[test]
fn test_press_outside_does_not_drag() {
    let mut sprite = sprite_at(100.0, 100.0);
    sprite.handle(PointerEvent::Press(Point::new(10.0, 10.0)));
    assert_eq!(sprite.state(), DragState::Idle);
    sprite.handle(PointerEvent::Move(Point::new(50.0, 50.0)));
    assert_eq!(sprite.position, Point::new(100.0, 100.0));
}

#[test]
fn test_position_is_sum_of_deltas() {
    let mut sprite = sprite_at(0.0, 0.0);
    sprite.handle(PointerEvent::Press(Point::new(5.0, 5.0)));
    let path = [(10.0, 7.0), (4.0, 20.0), (-30.0, -2.0), (8.0, 8.0)];
    for (x, y) in path {
        sprite.handle(PointerEvent::Move(Point::new(x, y)));
    }
    // net pointer motion from press to last move
    assert_eq!(sprite.position, Point::new(3.0, 3.0));
    assert_eq!(sprite.state().last_pointer(), Some(Point::new(8.0, 8.0)));
}

#[test]
fn test_drag_off_canvas_is_not_clamped() {
    let mut sprite = sprite_at(10.0, 10.0);
    sprite.handle(PointerEvent::Press(Point::new(12.0, 12.0)));
    sprite.handle(PointerEvent::Move(Point::new(-500.0, -40.0)));
    assert_eq!(sprite.position, Point::new(-502.0, -42.0));
}

#[test]
fn test_second_drag_starts_from_new_position() {
    let mut sprite = sprite_at(100.0, 100.0);
    let events = [
        "press:110,110",
        "move:130,125",
        "release:130,125",
        "press:125,120",
        "move:135,120",
        "release:135,120",
    ];
    for ev in events {
        sprite.handle(ev.parse().unwrap());
    }
    assert_eq!(sprite.position, Point::new(130.0, 115.0));
    assert!(!sprite.is_dragging());
}

#[test]
fn test_release_while_idle_is_noop() {
    let (state, delta) = DragState::Idle.step(PointerEvent::Release(Point::new(1.0, 1.0)), true);
    assert_eq!(state, DragState::Idle);
    assert!(delta.is_none());
}
