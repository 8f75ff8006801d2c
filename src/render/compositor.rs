//! Background + keyed, masked, placed foreground into one raster.
//!
//! There is exactly one composite routine. The interactive preview and the export differ
//! only in `output_scale`, so what is shown is what gets exported.

use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Affine, Point, RasterImage, Rect},
        error::{GreenscreenError, GreenscreenResult},
        math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    },
    keying::chroma::{KeyParams, key_rgba8_in_place},
    mask::surface::MaskSurface,
    render::composite::{over, sample_bilinear},
    session::editor::EditorSession,
    transform::viewport::output_size,
};

/// A rendered frame as RGBA8 pixels.
///
/// Unlike the internal compositing buffers, `data` is **straight** (non-premultiplied)
/// alpha, ready for PNG encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> GreenscreenResult<Vec<u8>> {
        crate::assets::encode::encode_png(self)
    }
}

/// Foreground after keying and masking, premultiplied for sampling.
struct PreparedLayer {
    rgba8_premul: Vec<u8>,
    width: u32,
    height: u32,
}

/// Composite the session at `output_scale` times the background resolution.
///
/// Returns `Ok(None)` when no background is loaded. Without a foreground the frame is the
/// background alone. The foreground is re-keyed on every call.
#[tracing::instrument(skip(session))]
pub fn render(session: &EditorSession, output_scale: f64) -> GreenscreenResult<Option<FrameRGBA>> {
    let Some(bg) = session.background() else {
        tracing::debug!("no background loaded, nothing to render");
        return Ok(None);
    };

    let (width, height) = output_size(bg.width(), bg.height(), output_scale)?;
    let mut dst = background_at_size(bg, width, height)?;
    premultiply_rgba8_in_place(&mut dst);

    if let Some(fg) = session.foreground() {
        let layer = prepare_layer(fg, session.mask(), session.config().key)?;
        let (fw, fh) = fg.size_f64();
        let placement = session.transform().placement_affine(fw, fh, output_scale);
        draw_layer(&mut dst, width, height, &layer, placement);
    }

    unpremultiply_rgba8_in_place(&mut dst);
    tracing::debug!(width, height, "composited frame");
    Ok(Some(FrameRGBA {
        width,
        height,
        data: dst,
    }))
}

fn background_at_size(bg: &RasterImage, width: u32, height: u32) -> GreenscreenResult<Vec<u8>> {
    if width == bg.width() && height == bg.height() {
        return Ok(bg.as_bytes().to_vec());
    }
    let src = image::RgbaImage::from_raw(bg.width(), bg.height(), bg.as_bytes().to_vec())
        .ok_or_else(|| {
            GreenscreenError::evaluation("background buffer does not match its dimensions")
        })?;
    let resized =
        image::imageops::resize(&src, width, height, image::imageops::FilterType::Triangle);
    Ok(resized.into_raw())
}

fn prepare_layer(
    fg: &RasterImage,
    mask: Option<&MaskSurface>,
    key: KeyParams,
) -> GreenscreenResult<PreparedLayer> {
    let mut rgba = fg.as_bytes().to_vec();
    key_rgba8_in_place(&mut rgba, key)?;
    if let Some(mask) = mask {
        mask.intersect_in_place(&mut rgba)?;
    }
    premultiply_rgba8_in_place(&mut rgba);
    Ok(PreparedLayer {
        rgba8_premul: rgba,
        width: fg.width(),
        height: fg.height(),
    })
}

/// Inverse-map every covered output pixel center into the layer and blend it over `dst`.
fn draw_layer(dst: &mut [u8], width: u32, height: u32, layer: &PreparedLayer, placement: Affine) {
    let det = placement.determinant();
    if !det.is_finite() || det == 0.0 {
        return;
    }
    let inverse = placement.inverse();

    let bounds = placement.transform_rect_bbox(Rect::new(
        0.0,
        0.0,
        f64::from(layer.width),
        f64::from(layer.height),
    ));
    let x_start = bounds.x0.floor().max(0.0) as usize;
    let x_end = (bounds.x1.ceil().max(0.0) as usize).min(width as usize);
    let y_start = bounds.y0.floor().max(0.0) as usize;
    let y_end = (bounds.y1.ceil().max(0.0) as usize).min(height as usize);
    if x_start >= x_end || y_start >= y_end {
        return;
    }

    dst.par_chunks_mut((width as usize) * 4)
        .enumerate()
        .skip(y_start)
        .take(y_end - y_start)
        .for_each(|(y, row)| {
            let py = y as f64 + 0.5;
            for x in x_start..x_end {
                let p = inverse * Point::new(x as f64 + 0.5, py);
                let src = sample_bilinear(
                    &layer.rgba8_premul,
                    layer.width,
                    layer.height,
                    p.x - 0.5,
                    p.y - 0.5,
                );
                if src[3] == 0 {
                    continue;
                }
                let px = &mut row[x * 4..x * 4 + 4];
                let out = over([px[0], px[1], px[2], px[3]], src);
                px.copy_from_slice(&out);
            }
        });
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
