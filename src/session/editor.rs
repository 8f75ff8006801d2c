//! The editing session.
//!
//! One owned value holds both images, the mask, the transform and the brush. Components
//! receive it explicitly; nothing is global, so independent sessions can coexist.

use crate::{
    assets::{decode::decode_image, encode::encode_png},
    foundation::{
        core::{Point, RasterImage},
        error::{GreenscreenError, GreenscreenResult},
    },
    interaction::{
        controller::{InteractionController, Update},
        event::InputEvent,
    },
    mask::{brush::BrushConfig, surface::MaskSurface},
    render::compositor::{FrameRGBA, render},
    session::config::EditorConfig,
    transform::{
        controls::{ControlInput, ControlValues},
        placement::Transform,
        viewport::{Viewport, preview_scale},
    },
};

/// Everything the host must refresh after a mutating input.
#[derive(Clone, Debug, PartialEq)]
pub struct Redraw {
    pub update: Update,
    /// Fresh preview, `None` while no background is loaded.
    pub preview: Option<FrameRGBA>,
    /// Slider positions mirrored from the transform.
    pub controls: Option<ControlValues>,
}

#[derive(Clone, Debug)]
pub struct EditorSession {
    config: EditorConfig,
    foreground: Option<RasterImage>,
    background: Option<RasterImage>,
    mask: Option<MaskSurface>,
    transform: Transform,
    brush: BrushConfig,
    viewport: Viewport,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let brush = BrushConfig {
            radius: config.default_brush_radius,
            ..BrushConfig::default()
        };
        Self {
            config,
            foreground: None,
            background: None,
            mask: None,
            transform: Transform::default(),
            brush,
            viewport: Viewport::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn foreground(&self) -> Option<&RasterImage> {
        self.foreground.as_ref()
    }

    pub fn background(&self) -> Option<&RasterImage> {
        self.background.as_ref()
    }

    pub fn mask(&self) -> Option<&MaskSurface> {
        self.mask.as_ref()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: BrushConfig) -> GreenscreenResult<()> {
        brush.validate()?;
        self.brush = brush;
        Ok(())
    }

    pub fn brush_mut(&mut self) -> &mut BrushConfig {
        &mut self.brush
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn preview_scale(&self) -> f64 {
        self.viewport.preview_scale
    }

    /// Where the preview canvas's top-left corner sits in screen pixels.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.viewport.canvas_origin = origin;
    }

    /// Both image slots are filled.
    pub fn is_ready(&self) -> bool {
        self.foreground.is_some() && self.background.is_some()
    }

    /// Decode and install a foreground. On failure the previous foreground stays in place.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn load_foreground(&mut self, bytes: &[u8]) -> GreenscreenResult<()> {
        let img = decode_image(bytes)?;
        self.set_foreground(img);
        Ok(())
    }

    /// Install a foreground and reset the mask to fully opaque at its size.
    pub fn set_foreground(&mut self, img: RasterImage) {
        tracing::debug!(
            width = img.width(),
            height = img.height(),
            "foreground loaded"
        );
        self.mask = Some(MaskSurface::new(img.width(), img.height()));
        self.foreground = Some(img);
    }

    /// Decode and install a background. On failure the previous background stays in place.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn load_background(&mut self, bytes: &[u8]) -> GreenscreenResult<()> {
        let img = decode_image(bytes)?;
        self.set_background(img);
        Ok(())
    }

    /// Install a background, recompute the preview scale and re-center the foreground.
    pub fn set_background(&mut self, img: RasterImage) {
        self.viewport.preview_scale = preview_scale(
            img.width(),
            img.height(),
            self.config.preview_max_width,
            self.config.preview_max_height,
        );
        self.transform = Transform::centered_on(img.width(), img.height());
        tracing::debug!(
            width = img.width(),
            height = img.height(),
            preview_scale = self.viewport.preview_scale,
            "background loaded"
        );
        self.background = Some(img);
    }

    /// Slider view of the transform, once a background defines the percentage base.
    pub fn controls(&self) -> Option<ControlValues> {
        let bg = self.background.as_ref()?;
        Some(ControlValues::from_transform(
            &self.transform,
            bg.width(),
            bg.height(),
        ))
    }

    /// Apply one explicit control edit. Ignored until a background is loaded.
    pub fn apply_control(&mut self, input: ControlInput) -> bool {
        let Some(bg) = self.background.as_ref() else {
            return false;
        };
        input.apply(&mut self.transform, bg.width(), bg.height())
    }

    /// Paint the mask at a logical (background-space) point using the current brush.
    ///
    /// Returns `false` when the point misses the foreground or an image is missing.
    pub fn paint_at_logical(&mut self, logical: Point) -> bool {
        if self.background.is_none() {
            return false;
        }
        let (Some(fg), Some(mask)) = (self.foreground.as_ref(), self.mask.as_mut()) else {
            return false;
        };
        let (fw, fh) = fg.size_f64();
        let local = self.transform.logical_to_foreground(logical, fw, fh);
        if !(0.0..=fw).contains(&local.x) || !(0.0..=fh).contains(&local.y) {
            return false;
        }
        let radius = self.transform.brush_radius_in_foreground(self.brush.radius);
        mask.paint(local, radius, self.brush.mode);
        true
    }

    /// Composite at the preview resolution. `None` while no background is loaded.
    pub fn render_preview(&self) -> GreenscreenResult<Option<FrameRGBA>> {
        render(self, self.viewport.preview_scale)
    }

    /// Composite at the background's native resolution.
    pub fn render_export(&self) -> GreenscreenResult<FrameRGBA> {
        if self.background.is_none() {
            return Err(GreenscreenError::missing_input("no background image loaded"));
        }
        if self.foreground.is_none() {
            return Err(GreenscreenError::missing_input("no foreground image loaded"));
        }
        render(self, 1.0)?
            .ok_or_else(|| GreenscreenError::missing_input("no background image loaded"))
    }

    /// The export, PNG-encoded.
    #[tracing::instrument(skip(self))]
    pub fn export_png(&self) -> GreenscreenResult<Vec<u8>> {
        let frame = self.render_export()?;
        encode_png(&frame)
    }

    /// Feed one input event through `controller`; on a mutation, redraw and sync controls.
    pub fn apply_input(
        &mut self,
        controller: &mut InteractionController,
        event: &InputEvent,
    ) -> GreenscreenResult<Option<Redraw>> {
        let update = controller.handle(self, event);
        if !update.is_mutation() {
            return Ok(None);
        }
        Ok(Some(Redraw {
            update,
            preview: self.render_preview()?,
            controls: self.controls(),
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
