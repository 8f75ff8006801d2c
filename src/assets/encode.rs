use std::io::Cursor;

use crate::{
    foundation::error::{GreenscreenError, GreenscreenResult},
    render::FrameRGBA,
};

/// File name offered for the exported composite.
pub const EXPORT_FILE_NAME: &str = "green_screen_result.png";

/// Encode a straight-alpha frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> GreenscreenResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| GreenscreenError::encode("frame buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| GreenscreenError::encode(format!("write png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
