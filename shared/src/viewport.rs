use serde::{Deserialize, Serialize};

use crate::{EffectError, RenderSurface};

/// Size of the drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }
}

/// Keeps a surface's backing store the same size as the viewport it is shown in.
#[derive(Debug, Clone)]
pub struct ViewportManager {
    viewport: Viewport,
}

impl ViewportManager {
    /// Sizes `surface` to `viewport` straight away.
    pub fn attach<S: RenderSurface>(
        surface: &mut S,
        viewport: Viewport,
    ) -> Result<ViewportManager, EffectError> {
        if surface.size() != viewport {
            surface.resize(viewport)?;
        }

        Ok(ViewportManager { viewport })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    /// Applies a resize notification. Resizing to the current size leaves the surface alone.
    pub fn resize<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        viewport: Viewport,
    ) -> Result<bool, EffectError> {
        if viewport == self.viewport && surface.size() == viewport {
            return Ok(false);
        }

        surface.resize(viewport)?;
        self.viewport = viewport;

        Ok(true)
    }
}
