//! Bridges [`CutterListener`] callbacks to JavaScript functions.

use cropkit_core::{CutterConfig, CutterListener, RenderState};
use js_sys::{Function, Reflect, Uint8Array};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::warn;

/// Callbacks read from the host's configuration object. Missing or
/// non-function entries are skipped.
#[derive(Default)]
pub(crate) struct JsListener {
    on_render: Option<Function>,
    on_cut: Option<Function>,
    on_magnify: Option<Function>,
    on_reduce: Option<Function>,
}

impl JsListener {
    pub(crate) fn from_config(config: &JsValue) -> Self {
        if !config.is_object() {
            return Self::default();
        }
        Self {
            on_render: callback(config, "onRender"),
            on_cut: callback(config, "onCut"),
            on_magnify: callback(config, "onMagnify"),
            on_reduce: callback(config, "onReduce"),
        }
    }
}

fn callback(config: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(config, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn invoke(name: &str, function: &Option<Function>, arg: &JsValue) {
    let Some(function) = function else {
        return;
    };
    if let Err(err) = function.call1(&JsValue::NULL, arg) {
        warn(&format!("{} callback threw: {:?}", name, err));
    }
}

fn invoke_with<T: Serialize>(name: &str, function: &Option<Function>, value: &T) {
    if function.is_none() {
        return;
    }
    match serde_wasm_bindgen::to_value(value) {
        Ok(arg) => invoke(name, function, &arg),
        Err(err) => warn(&format!("{} payload could not be converted: {}", name, err)),
    }
}

impl CutterListener for JsListener {
    fn on_render(&mut self, render: &RenderState) {
        invoke_with("onRender", &self.on_render, render);
    }

    fn on_cut(&mut self, png: &[u8]) {
        if self.on_cut.is_some() {
            invoke("onCut", &self.on_cut, &Uint8Array::from(png).into());
        }
    }

    fn on_magnify(&mut self, config: &CutterConfig) {
        invoke_with("onMagnify", &self.on_magnify, config);
    }

    fn on_reduce(&mut self, config: &CutterConfig) {
        invoke_with("onReduce", &self.on_reduce, config);
    }
}
