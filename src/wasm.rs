//! WebAssembly bindings.
//!
//! Exposes password generation to JavaScript front ends. Enabled with the
//! `wasm` feature.

use crate::password::{EvolverConfig, PasswordEvolver};
use wasm_bindgen::prelude::*;

fn evolver(length: usize, seed: Option<u64>) -> Result<PasswordEvolver, JsValue> {
    let mut config = EvolverConfig::default().with_length(length);
    config.seed = seed;
    PasswordEvolver::new(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generates one password of `length` characters with default settings.
#[wasm_bindgen(js_name = generatePassword)]
pub fn generate_password(length: usize, seed: Option<u64>) -> Result<String, JsValue> {
    evolver(length, seed)?
        .generate()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Runs one evolution and returns its summary as a plain JS object.
#[wasm_bindgen(js_name = evolvePassword)]
pub fn evolve_password(length: usize, seed: Option<u64>) -> Result<JsValue, JsValue> {
    let evolution = evolver(length, seed)?
        .run()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&evolution).map_err(|e| JsValue::from_str(&e.to_string()))
}
