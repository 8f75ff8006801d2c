//! Green-screen compositing.
//!
//! A foreground photographed against green is chroma-keyed, optionally refined with a
//! paintable mask, then placed (translate, scale, rotate) over a background. The same
//! compositor produces the downscaled preview and the full-resolution export, so what the
//! user lines up on screen is what gets written.
//!
//! [`EditorSession`] owns the state; [`InteractionController`] turns pointer, wheel and touch
//! events into edits of it.

#![forbid(unsafe_code)]

mod foundation;

pub mod assets;
pub mod interaction;
pub mod keying;
pub mod mask;
pub mod render;
pub mod session;
pub mod transform;

pub use assets::{
    decode::decode_image,
    encode::{EXPORT_FILE_NAME, encode_png},
};
pub use foundation::core::{Affine, Point, RasterImage, Rect, Rgba8, Vec2};
pub use foundation::error::{GreenscreenError, GreenscreenResult};
pub use interaction::{
    controller::{InteractionController, InteractionState, Update},
    event::InputEvent,
};
pub use keying::chroma::{EDGE_SOFTNESS, KeyParams, SPILL_REMOVAL, key_image, key_pixel};
pub use mask::{
    brush::{BrushConfig, BrushMode, DEFAULT_BRUSH_RADIUS},
    surface::MaskSurface,
};
pub use render::compositor::{FrameRGBA, render};
pub use session::{
    config::EditorConfig,
    editor::{EditorSession, Redraw},
};
pub use transform::{
    controls::{ControlInput, ControlValues},
    placement::{MIN_SCALE, Transform},
    viewport::{Viewport, preview_scale},
};
