//! Tauri Commands for Diagnostics

/// Latest backend log lines, oldest first; `limit` keeps only the newest
#[tauri::command]
pub fn recent_logs(limit: Option<usize>) -> Vec<String> {
    newest(rolling_logger::recent_lines(), limit)
}

fn newest(mut lines: Vec<String>, limit: Option<usize>) -> Vec<String> {
    if let Some(limit) = limit {
        let skip = lines.len().saturating_sub(limit);
        lines.drain(..skip);
    }
    lines
}
