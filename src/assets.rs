/// Image bytes to [`crate::RasterImage`].
pub mod decode;
/// Rendered frames to PNG bytes.
pub mod encode;
