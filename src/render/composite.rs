use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Bilinear sample of a premultiplied RGBA8 raster at continuous texel coordinates.
///
/// Integer coordinates land exactly on texel centers. Texels outside the raster read as
/// transparent, which gives the placed image a half-pixel anti-aliased border.
pub fn sample_bilinear(src: &[u8], width: u32, height: u32, x: f64, y: f64) -> PremulRgba8 {
    if !x.is_finite() || !y.is_finite() {
        return [0; 4];
    }
    let (w, h) = (i64::from(width), i64::from(height));
    let fx0 = x.floor();
    let fy0 = y.floor();
    let (x0, y0) = (fx0 as i64, fy0 as i64);
    if x0 < -1 || y0 < -1 || x0 >= w || y0 >= h {
        return [0; 4];
    }
    let (tx, ty) = (x - fx0, y - fy0);

    let taps = [
        (x0, y0, (1.0 - tx) * (1.0 - ty)),
        (x0 + 1, y0, tx * (1.0 - ty)),
        (x0, y0 + 1, (1.0 - tx) * ty),
        (x0 + 1, y0 + 1, tx * ty),
    ];

    let mut acc = [0.0f64; 4];
    for (sx, sy, weight) in taps {
        if weight == 0.0 || sx < 0 || sy < 0 || sx >= w || sy >= h {
            continue;
        }
        let i = ((sy * w + sx) * 4) as usize;
        for (c, a) in acc.iter_mut().enumerate() {
            *a += f64::from(src[i + c]) * weight;
        }
    }

    acc.map(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
