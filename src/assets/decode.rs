use crate::foundation::{
    core::RasterImage,
    error::{GreenscreenError, GreenscreenResult},
};

/// Decode encoded image bytes (any format the `image` crate recognizes) to straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> GreenscreenResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| GreenscreenError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RasterImage::from_raw(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
