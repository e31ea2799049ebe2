//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for console logging,
//! serialization, deserialization and input validation across all API
//! operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::ClassifierSettings;
use crate::errors::EngineError;
use crate::models::Sequence;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

pub fn log_info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(&format!("[WASM] {}", msg)));
}

pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[WASM] ⚠️ {}", msg)));
}

pub fn log_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[WASM] ❌ {}", msg)));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Deserialize a sequence coming from the sequence-data provider
pub fn sequence_from_js(value: JsValue) -> Result<Sequence, JsValue> {
    deserialize(value, "Failed to deserialize sequence")
}

/// Parse optional YAML settings; None or empty means defaults
pub fn settings_from_yaml(settings_yaml: Option<String>) -> Result<ClassifierSettings, JsValue> {
    match settings_yaml {
        Some(yaml) => ClassifierSettings::from_yaml_str(&yaml).map_err(engine_error),
        None => Ok(ClassifierSettings::default()),
    }
}

/// Validate a section length supplied by the caller
pub fn validate_section_length(section_length: usize, beat_count: usize) -> Result<(), String> {
    if section_length == 0 {
        return Err("Invalid section length: 0 (must be at least 1 beat)".to_string());
    }

    if section_length > beat_count {
        return Err(format!(
            "Section length {} exceeds sequence length {}",
            section_length, beat_count
        ));
    }

    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Convert an engine error to a JsValue
pub fn engine_error(e: EngineError) -> JsValue {
    validation_error(e.to_string())
}
