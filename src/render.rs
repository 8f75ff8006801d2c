/// Premultiplied pixel math: source-over and bilinear sampling.
pub mod composite;
/// `render(session, scale)` and the frame type it produces.
pub mod compositor;

pub use compositor::FrameRGBA;
