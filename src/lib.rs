//! Browser binding of the celebration effect.
//!
//! ```js
//! const celebration = new Celebration({ burstIntervalMs: 800 });
//! celebration.mount(document.querySelector("canvas"));
//! // ...
//! celebration.unmount();
//! ```

mod callbacks;
mod draw;

use std::{cell::RefCell, rc::Rc};

use callbacks::{host_error, WebHost};
use draw::CanvasSurface;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use shared::{Effect, EffectConfig, EffectError, Viewport};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub type WebEffect = Effect<CanvasSurface, WebHost, ChaCha8Rng>;

fn window() -> Result<web_sys::Window, EffectError> {
    web_sys::window().ok_or_else(|| EffectError::Host("no global `window` exists".to_string()))
}

/// Inner size of the browser window, which the celebration canvas covers.
fn window_viewport() -> Result<Viewport, EffectError> {
    let window = window()?;

    let width = window.inner_width().map_err(host_error)?.as_f64().unwrap_or(0.0);
    let height = window.inner_height().map_err(host_error)?.as_f64().unwrap_or(0.0);

    Ok(Viewport::new(width.max(0.0) as u32, height.max(0.0) as u32))
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

fn to_js(err: EffectError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Heart fireworks over a canvas, mounted and unmounted by the page.
#[wasm_bindgen]
pub struct Celebration {
    effect: Rc<RefCell<WebEffect>>,
}

#[wasm_bindgen]
impl Celebration {
    /// `options` is an optional object of [`EffectConfig`] fields in camelCase.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Celebration, JsValue> {
        let config: EffectConfig = if options.is_undefined() || options.is_null() {
            EffectConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        config.validate().map_err(to_js)?;

        let seed = config.seed.unwrap_or_else(random_seed);
        let rng = ChaCha8Rng::seed_from_u64(seed);

        info!(seed, "celebration created");

        let effect = Rc::new_cyclic(|weak| {
            RefCell::new(Effect::new(WebHost::new(weak.clone()), rng, config))
        });

        Ok(Celebration { effect })
    }

    /// Starts the effect on `canvas`, sized to the window. A canvas without 2D support
    /// leaves the effect stopped.
    pub fn mount(&self, canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        let Some(surface) = CanvasSurface::new(canvas) else {
            warn!("canvas has no 2d context, celebration disabled");
            self.effect.borrow_mut().unmount();
            return Ok(());
        };

        let viewport = window_viewport().map_err(to_js)?;

        self.effect
            .borrow_mut()
            .mount(surface, viewport)
            .map_err(to_js)
    }

    pub fn unmount(&self) {
        self.effect.borrow_mut().unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.effect.borrow().is_running()
    }

    /// Number of hearts currently on screen.
    #[wasm_bindgen(getter)]
    pub fn particles(&self) -> usize {
        self.effect.borrow().particle_count()
    }
}

impl Drop for Celebration {
    fn drop(&mut self) {
        self.effect.borrow_mut().unmount();
    }
}
