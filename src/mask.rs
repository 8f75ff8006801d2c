/// Brush settings consumed by the paint operation.
pub mod brush;
/// The persistent, user-paintable alpha mask.
pub mod surface;
