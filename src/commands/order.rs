//! Order Commands
//!
//! Frontend bindings for order-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Order, OrderFields};
use super::{invoke, invoke_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct CreateOrderArgs<'a> {
    fields: &'a OrderFields,
}

#[derive(Serialize)]
struct UpdateOrderArgs<'a> {
    id: &'a str,
    fields: &'a OrderFields,
}

// ========================
// Commands
// ========================

pub async fn list_orders() -> Result<Vec<Order>, String> {
    let result = invoke("list_orders", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_order(fields: &OrderFields) -> Result<Order, String> {
    let js_args = serde_wasm_bindgen::to_value(&CreateOrderArgs { fields }).map_err(|e| e.to_string())?;
    let result = invoke("create_order", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_order(id: &str, fields: &OrderFields) -> Result<Order, String> {
    let js_args = serde_wasm_bindgen::to_value(&UpdateOrderArgs { id, fields }).map_err(|e| e.to_string())?;
    let result = invoke("update_order", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_order(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("delete_order", js_args).await.map_err(invoke_error)?;
    Ok(())
}
