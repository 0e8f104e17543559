//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::analyze::{AttachmentResult, FlowValidationResult, PlannedBlock};
use crate::parse::types::{OperationType, Position};
use crate::structural::StructuralIssue;

/// Analyze a flow JSON: per-node prerequisite validation plus flow-level
/// severity and total credit cost.
#[wasm_bindgen]
pub fn analyze_flow(json: &str) -> JsValue {
    to_js(&analyze_flow_inner(json))
}

fn analyze_flow_inner(json: &str) -> Response<FlowValidationResult> {
    match crate::parse::parse(json) {
        Ok(flow) => Response::Ok {
            result: crate::analyze::analyze_flow(&flow),
        },
        Err(e) => Response::Error {
            message: e.to_string(),
        },
    }
}

/// Find the best existing node to attach a new block of `target_type` to.
#[wasm_bindgen]
pub fn best_attachment(json: &str, target_type: &str) -> JsValue {
    to_js(&best_attachment_inner(json, target_type))
}

fn best_attachment_inner(json: &str, target_type: &str) -> Response<AttachmentResult> {
    match crate::parse::parse(json) {
        Ok(flow) => Response::Ok {
            result: crate::analyze::find_best_attachment_node(OperationType::parse(target_type), &flow),
        },
        Err(e) => Response::Error {
            message: e.to_string(),
        },
    }
}

/// Minimal prerequisite recipe for `target_type`, counting resources
/// produced anywhere in the flow.
#[wasm_bindgen]
pub fn prerequisite_recipe(json: &str, target_type: &str) -> JsValue {
    to_js(&prerequisite_recipe_inner(json, target_type))
}

fn prerequisite_recipe_inner(json: &str, target_type: &str) -> Response<Vec<OperationType>> {
    match crate::parse::parse(json) {
        Ok(flow) => Response::Ok {
            result: crate::analyze::prerequisite_recipe(OperationType::parse(target_type), &flow),
        },
        Err(e) => Response::Error {
            message: e.to_string(),
        },
    }
}

/// Canvas positions for a recipe's blocks, stacked above the target.
/// `recipe_json` is a JSON array of operation type strings.
#[wasm_bindgen]
pub fn prerequisite_positions(recipe_json: &str, x: f64, y: f64) -> JsValue {
    to_js(&prerequisite_positions_inner(recipe_json, x, y))
}

fn prerequisite_positions_inner(recipe_json: &str, x: f64, y: f64) -> Response<Vec<PlannedBlock>> {
    match serde_json::from_str::<Vec<OperationType>>(recipe_json) {
        Ok(recipe) => Response::Ok {
            result: crate::analyze::prerequisite_positions(&recipe, Position { x, y }),
        },
        Err(e) => Response::Error {
            message: format!("Failed to parse recipe JSON: {}", e),
        },
    }
}

/// Structural pre-pass: shape findings the analyzer tolerates but the
/// editor may want to surface.
#[wasm_bindgen]
pub fn check_structure(json: &str) -> JsValue {
    to_js(&check_structure_inner(json))
}

fn check_structure_inner(json: &str) -> Response<Vec<StructuralIssue>> {
    match crate::parse::parse(json) {
        Ok(flow) => Response::Ok {
            result: crate::structural::check_structure(&flow),
        },
        Err(e) => Response::Error {
            message: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(tag = "status")]
enum Response<T> {
    #[serde(rename = "ok")]
    Ok { result: T },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Results carry maps; the json-compatible serializer keeps them plain JS
/// objects instead of `Map` instances.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}
