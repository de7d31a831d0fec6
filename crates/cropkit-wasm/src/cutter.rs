//! The crop session exposed to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import { JsCutter } from '@cropkit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const cutter = new JsCutter({
//!   cutWidth: 240,
//!   cutHeight: 160,
//!   onRender: (state) => draw(state),
//!   onCut: (png) => download(png),
//! }, box.clientWidth, box.clientHeight, bytes);
//!
//! const rect = box.getBoundingClientRect();
//! cutter.setContainerOrigin(rect.left, rect.top);
//! box.onmousemove = (e) => cutter.pointerMove(e.clientX, e.clientY);
//! box.onmousedown = (e) => cutter.pointerDown(e.clientX, e.clientY);
//! box.onmouseup = (e) => settle(cutter.pointerUp(e.clientX, e.clientY));
//! box.onmouseleave = () => settle(cutter.pointerLeave());
//!
//! function settle(generation) {
//!   if (generation !== undefined) {
//!     setTimeout(() => cutter.finishSettle(generation), settleDelayMs());
//!   }
//! }
//! ```

use cropkit_core::interaction::{SettleTicket, SETTLE_DELAY_MS};
use cropkit_core::{Cutter, CutterError, Point, Size};
use wasm_bindgen::prelude::*;

use crate::config::{config_reasons, parse_config, warn};
use crate::listener::JsListener;

/// Delay after which the host should call `finishSettle`, in milliseconds.
#[wasm_bindgen(js_name = settleDelayMs)]
pub fn settle_delay_ms() -> u32 {
    SETTLE_DELAY_MS
}

/// Generations cross the boundary as plain JS numbers.
fn generation_to_js(ticket: SettleTicket) -> f64 {
    ticket.generation as f64
}

fn ticket_from_js(generation: f64) -> SettleTicket {
    SettleTicket {
        generation: generation.max(0.0) as u64,
        delay_ms: SETTLE_DELAY_MS,
    }
}

fn to_js_error(err: CutterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct JsCutter {
    inner: Cutter,
}

#[wasm_bindgen]
impl JsCutter {
    /// Start a crop session.
    ///
    /// # Arguments
    ///
    /// * `config` - Options and callbacks (`onRender`, `onCut`, `onMagnify`,
    ///   `onReduce`); `undefined` uses the defaults
    /// * `container_width`, `container_height` - Size of the hosting element
    /// * `image_bytes` - Encoded JPEG or PNG file
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid, the container is
    /// empty or the image cannot be decoded. Configuration problems are also
    /// written to the console, one line per reason.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        container_width: f64,
        container_height: f64,
        image_bytes: &[u8],
    ) -> Result<JsCutter, JsValue> {
        let parsed = parse_config(&config);
        let reasons = config_reasons(&parsed);
        if !reasons.is_empty() {
            for reason in &reasons {
                warn(reason);
            }
            return Err(JsValue::from_str(&format!(
                "invalid configuration: {}",
                reasons.join("; ")
            )));
        }
        let options = parsed.map_err(|e| JsValue::from_str(&e))?;

        let container = Size::new(container_width, container_height);
        let inner = Cutter::from_bytes(options, container, image_bytes).map_err(|err| {
            warn(&err.to_string());
            to_js_error(err)
        })?;

        Ok(JsCutter {
            inner: inner.with_listener(JsListener::from_config(&config)),
        })
    }

    /// Client-space position of the container's top-left corner.
    #[wasm_bindgen(js_name = setContainerOrigin)]
    pub fn set_container_origin(&mut self, x: f64, y: f64) {
        self.inner.set_container_origin(Point::new(x, y));
    }

    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self, client_x: f64, client_y: f64) {
        self.inner.pointer_enter(Point::new(client_x, client_y));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.inner.pointer_move(Point::new(client_x, client_y));
    }

    /// Returns whether a drag started.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> bool {
        self.inner.pointer_down(Point::new(client_x, client_y))
    }

    /// Ends a drag. Returns the settle generation to hand back to
    /// `finishSettle`, or `undefined` when no drag was active.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, client_x: f64, client_y: f64) -> Option<f64> {
        self.inner
            .pointer_up(Point::new(client_x, client_y))
            .map(generation_to_js)
    }

    /// Cancels any drag and reconciles. Returns the settle generation.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> f64 {
        generation_to_js(self.inner.pointer_leave())
    }

    /// Zoom in one step. Returns whether the image changed.
    pub fn magnify(&mut self) -> bool {
        self.inner.magnify().is_applied()
    }

    /// Zoom out one step. Returns whether the image changed.
    pub fn reduce(&mut self) -> bool {
        self.inner.reduce().is_applied()
    }

    /// Rotate a quarter turn counter-clockwise. Returns whether it rotated.
    pub fn rotate(&mut self) -> bool {
        self.inner.rotate().is_applied()
    }

    /// Extract the selection as PNG bytes. `onCut` receives the same bytes.
    #[wasm_bindgen(js_name = cutImage)]
    pub fn cut_image(&mut self) -> Result<Vec<u8>, JsValue> {
        self.inner.cut_image().map_err(to_js_error)
    }

    /// Current geometry for drawing, as a plain object.
    #[wasm_bindgen(js_name = renderState)]
    pub fn render_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.render_state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Configuration with live zoom flags and the current crop size.
    #[wasm_bindgen(js_name = currentConfig)]
    pub fn current_config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.current_config())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// CSS cursor for the zone under the pointer.
    pub fn cursor(&self) -> String {
        self.inner.cursor().to_string()
    }

    /// Clears the settle transition if `generation` is still the latest.
    #[wasm_bindgen(js_name = finishSettle)]
    pub fn finish_settle(&mut self, generation: f64) -> bool {
        self.inner.finish_settle(ticket_from_js(generation))
    }

    #[wasm_bindgen(js_name = settleGeneration)]
    pub fn settle_generation(&self) -> f64 {
        self.inner.settle_generation() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_round_trips_through_js_number() {
        let ticket = SettleTicket {
            generation: 42,
            delay_ms: SETTLE_DELAY_MS,
        };
        assert_eq!(ticket_from_js(generation_to_js(ticket)), ticket);
    }

    #[test]
    fn test_negative_generation_never_matches() {
        assert_eq!(ticket_from_js(-3.0).generation, 0);
    }

    #[test]
    fn test_settle_delay() {
        assert_eq!(settle_delay_ms(), 300);
    }
}
