//! Tauri Commands for Order CRUD
//!
//! Exposes the order store to the frontend via Tauri IPC.

use chrono::Utc;
use tauri::State;

use crate::domain::{Order, OrderFields};
use crate::repository::Repository;
use crate::AppState;

/// List all orders
#[tauri::command]
pub async fn list_orders(state: State<'_, AppState>) -> Result<Vec<Order>, String> {
    state.orders.list().await.map_err(|e| {
        log::error!("Failed to list orders: {}", e);
        e.to_string()
    })
}

/// Get order by ID
#[tauri::command]
pub async fn get_order(state: State<'_, AppState>, id: String) -> Result<Option<Order>, String> {
    state.orders.find_by_id(&id).await.map_err(|e| e.to_string())
}

/// Create an order, stamping `createdAt` when the form left it empty
#[tauri::command]
pub async fn create_order(state: State<'_, AppState>, fields: OrderFields) -> Result<Order, String> {
    let fields = fields.stamped(Utc::now());
    match state.orders.create(&fields).await {
        Ok(order) => {
            log::info!("Created order {}", order.id);
            Ok(order)
        }
        Err(e) => {
            log::error!("Failed to create order: {}", e);
            Err(e.to_string())
        }
    }
}

/// Update an order; every field is sent, a blank `createdAt` is left untouched
#[tauri::command]
pub async fn update_order(
    state: State<'_, AppState>,
    id: String,
    fields: OrderFields,
) -> Result<Order, String> {
    let fields = fields.without_blank_timestamp();
    match state.orders.patch(&id, &fields).await {
        Ok(order) => {
            log::info!("Updated order {}", order.id);
            Ok(order)
        }
        Err(e) => {
            log::error!("Failed to update order {}: {}", id, e);
            Err(e.to_string())
        }
    }
}

/// Delete an order
#[tauri::command]
pub async fn delete_order(state: State<'_, AppState>, id: String) -> Result<(), String> {
    state.orders.delete(&id).await.map_err(|e| {
        log::error!("Failed to delete order {}: {}", id, e);
        e.to_string()
    })?;
    log::info!("Deleted order {}", id);
    Ok(())
}
