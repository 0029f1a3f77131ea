use std::{cell::RefCell, rc::Weak};

use shared::{EffectError, FrameHandle, Host, IntervalHandle};
use tracing::{error, warn};
use wasm_bindgen::{prelude::*, JsCast};

use crate::{window, window_viewport, WebEffect};

pub fn host_error(value: JsValue) -> EffectError {
    EffectError::Host(format!("{value:?}"))
}

pub fn on_frame(effect: &Weak<RefCell<WebEffect>>, timestamp: f64) {
    let Some(effect) = effect.upgrade() else {
        return;
    };

    let result = effect.borrow_mut().on_frame(timestamp);

    if let Err(err) = result {
        error!(%err, "celebration frame failed, effect stopped");
    }
}

pub fn on_burst(effect: &Weak<RefCell<WebEffect>>) {
    if let Some(effect) = effect.upgrade() {
        effect.borrow_mut().on_burst();
    }
}

pub fn on_resize(effect: &Weak<RefCell<WebEffect>>) {
    let Some(effect) = effect.upgrade() else {
        return;
    };

    let result = window_viewport().and_then(|viewport| effect.borrow_mut().on_resize(viewport));

    if let Err(err) = result {
        warn!(%err, "could not follow viewport resize");
    }
}

/// Browser scheduling for one effect: `requestAnimationFrame`, `setInterval` and the window
/// `resize` event. The closures only hold a weak reference, so a dropped effect is never
/// called back.
pub struct WebHost {
    frame_closure: Closure<dyn FnMut(f64)>,
    burst_closure: Closure<dyn FnMut()>,
    resize_closure: Closure<dyn FnMut()>,
}

impl WebHost {
    pub fn new(effect: Weak<RefCell<WebEffect>>) -> WebHost {
        let frame_closure = {
            let effect = effect.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp| on_frame(&effect, timestamp))
        };

        let burst_closure = {
            let effect = effect.clone();
            Closure::<dyn FnMut()>::new(move || on_burst(&effect))
        };

        let resize_closure = Closure::<dyn FnMut()>::new(move || on_resize(&effect));

        WebHost {
            frame_closure,
            burst_closure,
            resize_closure,
        }
    }
}

impl Host for WebHost {
    fn request_frame(&mut self) -> Result<FrameHandle, EffectError> {
        window()?
            .request_animation_frame(self.frame_closure.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(host_error)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let result = window().and_then(|window| {
            window
                .cancel_animation_frame(handle.0)
                .map_err(host_error)
        });

        if let Err(err) = result {
            warn!(%err, handle = handle.0, "could not cancel animation frame");
        }
    }

    fn set_interval(&mut self, period_ms: u32) -> Result<IntervalHandle, EffectError> {
        let timeout = i32::try_from(period_ms)
            .map_err(|_| EffectError::Host(format!("interval of {period_ms}ms is too long")))?;

        window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.burst_closure.as_ref().unchecked_ref(),
                timeout,
            )
            .map(IntervalHandle)
            .map_err(host_error)
    }

    fn clear_interval(&mut self, handle: IntervalHandle) {
        match window() {
            Ok(window) => window.clear_interval_with_handle(handle.0),
            Err(err) => warn!(%err, handle = handle.0, "could not clear burst timer"),
        }
    }

    fn listen_resize(&mut self) -> Result<(), EffectError> {
        window()?
            .add_event_listener_with_callback(
                "resize",
                self.resize_closure.as_ref().unchecked_ref(),
            )
            .map_err(host_error)
    }

    fn unlisten_resize(&mut self) {
        let result = window().and_then(|window| {
            window
                .remove_event_listener_with_callback(
                    "resize",
                    self.resize_closure.as_ref().unchecked_ref(),
                )
                .map_err(host_error)
        });

        if let Err(err) = result {
            warn!(%err, "could not remove resize listener");
        }
    }
}
