use super::*;

#[test]
fn new_and_reset_are_fully_opaque() {
    let mut mask = MaskSurface::new(8, 6);
    assert!(mask.alpha().iter().all(|&a| a == 255));

    mask.paint(Point::new(4.0, 3.0), 2.0, BrushMode::Erase);
    assert!(mask.alpha().iter().any(|&a| a < 255));

    mask.reset();
    assert!(mask.alpha().iter().all(|&a| a == 255));
}

#[test]
fn erase_clears_the_circle_and_leaves_the_rest() {
    let mut mask = MaskSurface::new(20, 20);
    assert!(mask.paint(Point::new(10.0, 10.0), 5.0, BrushMode::Erase));

    assert_eq!(mask.alpha_at(10, 10), Some(0));
    assert_eq!(mask.alpha_at(8, 9), Some(0));
    assert_eq!(mask.alpha_at(0, 0), Some(255));
    assert_eq!(mask.alpha_at(19, 19), Some(255));
    assert_eq!(mask.alpha_at(10, 17), Some(255));
}

#[test]
fn edge_pixels_get_partial_coverage() {
    let mut mask = MaskSurface::new(20, 20);
    mask.paint(Point::new(10.0, 10.0), 5.0, BrushMode::Erase);
    // Pixel (14, 11) straddles the circle boundary.
    let edge = mask.alpha_at(14, 11).unwrap();
    assert!(edge > 0 && edge < 255, "edge alpha {edge}");
}

#[test]
fn erase_only_decreases_and_restore_only_increases() {
    let mut mask = MaskSurface::new(16, 16);
    mask.paint(Point::new(4.0, 4.0), 3.0, BrushMode::Erase);
    let before = mask.alpha().to_vec();

    mask.paint(Point::new(7.0, 7.0), 4.0, BrushMode::Erase);
    assert!(mask.alpha().iter().zip(&before).all(|(a, b)| a <= b));

    let before = mask.alpha().to_vec();
    mask.paint(Point::new(6.0, 6.0), 2.5, BrushMode::Restore);
    assert!(mask.alpha().iter().zip(&before).all(|(a, b)| a >= b));
}

#[test]
fn restore_over_erase_recovers_fully_covered_pixels() {
    let mut mask = MaskSurface::new(20, 20);
    mask.paint(Point::new(10.0, 10.0), 4.0, BrushMode::Erase);
    mask.paint(Point::new(10.0, 10.0), 4.0, BrushMode::Restore);
    assert_eq!(mask.alpha_at(10, 10), Some(255));
    assert_eq!(mask.alpha_at(9, 9), Some(255));
}

#[test]
fn out_of_raster_and_degenerate_dabs_are_noops() {
    let mut mask = MaskSurface::new(10, 10);
    assert!(!mask.paint(Point::new(-50.0, -50.0), 5.0, BrushMode::Erase));
    assert!(!mask.paint(Point::new(5.0, 5.0), 0.0, BrushMode::Erase));
    assert!(!mask.paint(Point::new(5.0, 5.0), f64::NAN, BrushMode::Erase));
    assert!(!mask.paint(Point::new(5.0, 5.0), 3.0, BrushMode::Restore));
    assert!(mask.alpha().iter().all(|&a| a == 255));
}

#[test]
fn intersection_multiplies_alpha() {
    let mut mask = MaskSurface::new(3, 1);
    mask.alpha[1] = 0;
    mask.alpha[2] = 128;

    let mut rgba = vec![
        10, 20, 30, 200, //
        10, 20, 30, 255, //
        10, 20, 30, 255,
    ];
    mask.intersect_in_place(&mut rgba).unwrap();
    // Fully restored mask keeps keyed alpha exactly.
    assert_eq!(rgba[3], 200);
    // Fully erased mask wins regardless of key.
    assert_eq!(rgba[7], 0);
    assert_eq!(rgba[11], 128);
    assert_eq!(&rgba[8..11], &[10, 20, 30]);
}

#[test]
fn intersection_keeps_keyed_out_pixels_invisible() {
    let mask = MaskSurface::new(1, 1);
    let mut rgba = vec![153, 255, 153, 0];
    mask.intersect_in_place(&mut rgba).unwrap();
    assert_eq!(rgba[3], 0);
}

#[test]
fn intersection_checks_dimensions() {
    let mask = MaskSurface::new(2, 2);
    let mut rgba = vec![0u8; 4];
    assert!(mask.intersect_in_place(&mut rgba).is_err());
}
