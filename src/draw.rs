use shared::{Color, EffectError, PathSegment, RenderSurface, Transform, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn surface_error(value: JsValue) -> EffectError {
    EffectError::Surface(format!("{value:?}"))
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Returns `None` when the canvas cannot hand out a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<CanvasSurface> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(CanvasSurface { canvas, context })
    }
}

impl RenderSurface for CanvasSurface {
    fn size(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), EffectError> {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);

        Ok(())
    }

    fn clear(&mut self) -> Result<(), EffectError> {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        Ok(())
    }

    fn with_transform<F>(&mut self, transform: Transform, draw: F) -> Result<(), EffectError>
    where
        F: FnOnce(&mut Self) -> Result<(), EffectError>,
    {
        self.context.save();

        let result = match self
            .context
            .translate(transform.translation.0, transform.translation.1)
            .and_then(|_| self.context.rotate(transform.rotation))
        {
            Ok(()) => draw(self),
            Err(value) => Err(surface_error(value)),
        };

        self.context.restore();

        result
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<(), EffectError> {
        self.context.set_global_alpha(alpha);

        Ok(())
    }

    fn fill_path(&mut self, path: &[PathSegment], color: Color) -> Result<(), EffectError> {
        self.context.begin_path();

        for segment in path {
            match *segment {
                PathSegment::MoveTo(x, y) => self.context.move_to(x, y),
                PathSegment::BezierCurveTo {
                    control_1,
                    control_2,
                    end,
                } => self.context.bezier_curve_to(
                    control_1.0,
                    control_1.1,
                    control_2.0,
                    control_2.1,
                    end.0,
                    end.1,
                ),
                PathSegment::Close => self.context.close_path(),
            }
        }

        self.context.set_fill_style_str(&color.to_string());
        self.context.fill();

        Ok(())
    }
}
