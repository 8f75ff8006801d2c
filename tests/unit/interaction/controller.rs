use super::*;
use crate::{
    foundation::core::{RasterImage, Vec2},
    mask::brush::{BrushConfig, BrushMode},
    transform::placement::MIN_SCALE,
};

fn session(bg: (u32, u32), fg: (u32, u32)) -> EditorSession {
    let mut s = EditorSession::default();
    s.set_background(RasterImage::solid(bg.0, bg.1, [0, 0, 255, 255]).unwrap());
    s.set_foreground(RasterImage::solid(fg.0, fg.1, [200, 40, 40, 255]).unwrap());
    s
}

#[test]
fn drag_translates_by_logical_delta() {
    let mut s = session((400, 300), (100, 100));
    let mut c = InteractionController::default();

    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_down(10.0, 10.0, false)),
        Update::Unchanged
    );
    assert_eq!(c.state(), InteractionState::Dragging);
    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_move(25.0, 5.0)),
        Update::TransformChanged
    );
    c.handle(&mut s, &InputEvent::pointer_move(30.0, 0.0));
    assert_eq!(s.transform().translate, Vec2::new(220.0, 140.0));

    c.handle(&mut s, &InputEvent::PointerUp);
    assert_eq!(c.state(), InteractionState::Idle);
    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_move(90.0, 90.0)),
        Update::Unchanged
    );
    assert_eq!(s.transform().translate, Vec2::new(220.0, 140.0));
}

#[test]
fn drag_deltas_are_converted_through_preview_scale() {
    // 1600 wide -> preview scale 0.5, so one screen pixel is two logical pixels.
    let mut s = session((1600, 600), (100, 100));
    let mut c = InteractionController::default();
    c.handle(&mut s, &InputEvent::pointer_down(0.0, 0.0, false));
    c.handle(&mut s, &InputEvent::pointer_move(10.0, 5.0));
    assert_eq!(s.transform().translate, Vec2::new(820.0, 310.0));
}

#[test]
fn modifier_drag_rotates_by_horizontal_motion_only() {
    let mut s = session((400, 300), (100, 100));
    let mut c = InteractionController::default();
    c.handle(&mut s, &InputEvent::pointer_down(0.0, 0.0, true));
    assert_eq!(c.state(), InteractionState::Rotating);
    c.handle(&mut s, &InputEvent::pointer_move(50.0, 80.0));
    assert!((s.transform().rotation_rad - 0.5).abs() < 1e-12);
    assert_eq!(s.transform().translate, Vec2::new(200.0, 150.0));
}

#[test]
fn wheel_scales_with_floor_and_is_ignored_while_brushing() {
    let mut s = session((400, 300), (100, 100));
    let mut c = InteractionController::default();

    assert_eq!(
        c.handle(&mut s, &InputEvent::Wheel { delta_y: -100.0 }),
        Update::TransformChanged
    );
    assert!((s.transform().scale() - 1.1).abs() < 1e-12);

    for _ in 0..1000 {
        c.handle(&mut s, &InputEvent::Wheel { delta_y: 250.0 });
    }
    assert_eq!(s.transform().scale(), MIN_SCALE);

    s.brush_mut().enabled = true;
    assert_eq!(
        c.handle(&mut s, &InputEvent::Wheel { delta_y: -1000.0 }),
        Update::Unchanged
    );
    assert_eq!(s.transform().scale(), MIN_SCALE);
}

#[test]
fn brush_down_paints_immediately_and_follows_moves() {
    let mut s = session((400, 300), (100, 100));
    s.set_brush(BrushConfig {
        enabled: true,
        mode: BrushMode::Erase,
        radius: 5.0,
    })
    .unwrap();
    let mut c = InteractionController::default();

    // Foreground spans logical [150, 250] x [100, 200]; (200, 150) is its center.
    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_down(200.0, 150.0, false)),
        Update::MaskChanged
    );
    assert_eq!(c.state(), InteractionState::Painting);
    assert_eq!(s.mask().unwrap().alpha_at(50, 50), Some(0));

    c.handle(&mut s, &InputEvent::pointer_move(170.0, 120.0));
    assert_eq!(s.mask().unwrap().alpha_at(20, 20), Some(0));
    assert_eq!(s.mask().unwrap().alpha_at(80, 80), Some(255));
}

#[test]
fn paint_outside_foreground_is_ignored() {
    let mut s = session((400, 300), (100, 100));
    s.brush_mut().enabled = true;
    s.brush_mut().mode = BrushMode::Erase;
    let mut c = InteractionController::default();
    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_down(5.0, 5.0, false)),
        Update::Unchanged
    );
    assert!(s.mask().unwrap().alpha().iter().all(|&a| a == 255));
}

#[test]
fn brush_radius_shrinks_on_the_mask_when_zoomed_in() {
    let mut s = session((400, 300), (100, 100));
    s.transform_mut().set_scale(2.0);
    s.set_brush(BrushConfig {
        enabled: true,
        mode: BrushMode::Erase,
        radius: 10.0,
    })
    .unwrap();
    let mut c = InteractionController::default();
    c.handle(&mut s, &InputEvent::pointer_down(200.0, 150.0, false));
    let mask = s.mask().unwrap();
    // Radius 10 on screen is 5 in foreground pixels.
    assert_eq!(mask.alpha_at(53, 50), Some(0));
    assert_eq!(mask.alpha_at(57, 50), Some(255));
}

#[test]
fn pinch_scales_and_rotates_incrementally() {
    let mut s = session((400, 300), (100, 100));
    let mut c = InteractionController::default();

    let start = vec![Point::new(100.0, 100.0), Point::new(200.0, 100.0)];
    c.handle(&mut s, &InputEvent::TouchStart { touches: start });
    assert_eq!(c.state(), InteractionState::PinchGesture);

    let wider = vec![Point::new(100.0, 100.0), Point::new(300.0, 100.0)];
    assert_eq!(
        c.handle(&mut s, &InputEvent::TouchMove { touches: wider }),
        Update::TransformChanged
    );
    assert!((s.transform().scale() - 2.0).abs() < 1e-12);

    // Same distance, quarter turn: rebaselined, so scale stays at 2.
    let turned = vec![Point::new(100.0, 100.0), Point::new(100.0, 300.0)];
    c.handle(&mut s, &InputEvent::TouchMove { touches: turned });
    assert!((s.transform().scale() - 2.0).abs() < 1e-12);
    assert!((s.transform().rotation_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    c.handle(&mut s, &InputEvent::TouchEnd);
    assert_eq!(c.state(), InteractionState::Idle);
}

#[test]
fn single_touch_move_places_the_center() {
    let mut s = session((400, 300), (100, 100));
    let mut c = InteractionController::default();
    c.handle(
        &mut s,
        &InputEvent::TouchMove {
            touches: vec![Point::new(12.0, 34.0)],
        },
    );
    assert_eq!(s.transform().translate, Vec2::new(12.0, 34.0));
}

#[test]
fn transform_edits_wait_for_a_background() {
    let mut s = EditorSession::default();
    let mut c = InteractionController::default();
    c.handle(&mut s, &InputEvent::pointer_down(0.0, 0.0, false));
    assert_eq!(
        c.handle(&mut s, &InputEvent::pointer_move(10.0, 10.0)),
        Update::Unchanged
    );
    assert_eq!(
        c.handle(&mut s, &InputEvent::Wheel { delta_y: 10.0 }),
        Update::Unchanged
    );
}

#[test]
fn events_parse_from_json() {
    let ev: InputEvent =
        serde_json::from_str(r#"{"type":"pointer_down","x":1.0,"y":2.0}"#).unwrap();
    assert_eq!(ev, InputEvent::pointer_down(1.0, 2.0, false));
    let ev: InputEvent = serde_json::from_str(
        r#"{"type":"touch_start","touches":[{"x":0.0,"y":0.0},{"x":3.0,"y":4.0}]}"#,
    )
    .unwrap();
    let InputEvent::TouchStart { touches } = ev else {
        panic!("expected touch_start");
    };
    assert_eq!(touches.len(), 2);
}
