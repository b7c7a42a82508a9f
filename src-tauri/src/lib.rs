//! Orders Admin Backend
//!
//! Layered architecture:
//! - domain: Order document and core abstractions
//! - repository: Document store abstraction and implementations
//! - commands: Tauri command handlers
//! - config: Store settings

use tauri::Manager;

mod config;
mod domain;
mod repository;
mod commands;

use repository::{open_order_store, OrderStore};

/// Application state shared across commands
pub struct AppState {
    pub orders: OrderStore,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            let log_dir = app_handle.path().app_log_dir()?;
            if let Err(e) = rolling_logger::init_logger(log_dir, "OrdersAdmin") {
                eprintln!("Logger unavailable: {}", e);
            }

            let config_dir = app_handle.path().app_config_dir().ok();
            let settings = config::load_settings(config_dir.as_deref());

            app.manage(AppState {
                orders: open_order_store(&settings),
            });
            rolling_logger::info("App setup complete");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::list_orders,
            commands::get_order,
            commands::create_order,
            commands::update_order,
            commands::delete_order,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
