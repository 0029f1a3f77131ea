use crate::{Color, EffectError, Viewport};

/// One step of a filled outline, in the local coordinates of the current transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(f64, f64),
    BezierCurveTo {
        control_1: (f64, f64),
        control_2: (f64, f64),
        end: (f64, f64),
    },
    Close,
}

/// Translation followed by rotation, applied around a single draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: (f64, f64),
    pub rotation: f64,
}

/// A raster surface the effect can paint on.
pub trait RenderSurface {
    fn size(&self) -> Viewport;

    /// Changes the backing dimensions. Implementations may discard the current contents.
    fn resize(&mut self, viewport: Viewport) -> Result<(), EffectError>;

    /// Wipes the whole surface.
    fn clear(&mut self) -> Result<(), EffectError>;

    /// Runs `draw` with `transform` applied, restoring the previous transform and alpha
    /// afterwards even when `draw` fails.
    fn with_transform<F>(&mut self, transform: Transform, draw: F) -> Result<(), EffectError>
    where
        F: FnOnce(&mut Self) -> Result<(), EffectError>;

    fn set_alpha(&mut self, alpha: f64) -> Result<(), EffectError>;

    fn fill_path(&mut self, path: &[PathSegment], color: Color) -> Result<(), EffectError>;
}
