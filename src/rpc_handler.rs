//! RPC method handler for the read timer JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches JSON-RPC calls against the `App` page model.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::{App, BridgeTimer};
use crate::dom::html::parse_content;
use crate::dom::memory::OutputElement;
use crate::managers::scroll_manager::{attach, ScrollManagerTrait};
use crate::services::read_timer::ReadTimerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::scroll::ScrollEvent;

/// Serializes the observable state of one attached timer.
pub fn timer_state(id: &str, attached: &BridgeTimer) -> Value {
    let timer = attached.timer();
    let total = timer.total_time();
    let remaining = timer.remaining_time();
    json!({
        "id": id,
        "phase": timer.phase(),
        "total_seconds": total.raw_seconds,
        "total": total.format(),
        "remaining_seconds": remaining.map(|r| r.raw_seconds),
        "remaining": remaining.map(|r| r.format()),
        "progress": timer.progress(),
        "media_height": timer.media_height(),
        "text": timer.output_text(),
        "output_selector": timer.settings().output_selector,
        "attributes": attached.content().attributes(),
    })
}

fn number_param(params: &Value, key: &str) -> Option<f64> {
    params.get(key).and_then(|v| v.as_f64())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Document ───
        "document.add_output" => {
            let tag = params.get("tag").and_then(|v| v.as_str()).unwrap_or("div");
            let mut element = OutputElement::new(tag);
            if let Some(id) = params.get("id").and_then(|v| v.as_str()) {
                element = element.with_id(id);
            }
            if let Some(classes) = params.get("classes").and_then(|v| v.as_array()) {
                for class in classes.iter().filter_map(|c| c.as_str()) {
                    element = element.with_class(class);
                }
            }
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.document.add_output(element);
            Ok(json!({"outputs": a.document.outputs().len()}))
        }
        "document.output" => {
            let selector = params.get("selector").and_then(|v| v.as_str()).ok_or("missing selector")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let html: Vec<String> = a.document.inner_html(selector).into_iter().map(String::from).collect();
            Ok(json!({"html": html}))
        }

        // ─── Timers ───
        "timer.attach" => {
            let html = params.get("html").and_then(|v| v.as_str()).ok_or("missing html")?;
            let height = number_param(params, "height").ok_or("missing height")?;
            if !height.is_finite() || height < 0.0 {
                return Err("invalid height: must be a non-negative number".to_string());
            }
            let mut content = parse_content(html, height);
            if let Some(images) = params.get("image_heights").and_then(|v| v.as_array()) {
                content.set_image_heights(images.iter().filter_map(|h| h.as_f64()).collect());
            }

            let mut guard = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *guard;
            let options = params.get("options").cloned().unwrap_or(Value::Null);
            let settings = a.settings_engine.resolve(&options).map_err(|e| e.to_string())?;
            let id = attach(content, settings, &mut a.document, &mut a.scroll_manager)
                .map_err(|e| e.to_string())?;
            let attached = a.scroll_manager.listener(&id).ok_or("timer vanished after attach")?;
            Ok(timer_state(&id, attached))
        }
        "timer.scroll" => {
            let document_scroll_top =
                number_param(params, "document_scroll_top").ok_or("missing document_scroll_top")?;
            let event = ScrollEvent {
                viewport_scroll_top: number_param(params, "viewport_scroll_top")
                    .unwrap_or(document_scroll_top),
                viewport_height: number_param(params, "viewport_height").unwrap_or(0.0),
                document_scroll_top,
            };

            let mut guard = app.lock().map_err(|e| e.to_string())?;
            let a = &mut *guard;
            let dispatched = a.scroll_manager.dispatch(&mut a.document, &event);
            let timers: Vec<Value> = a
                .scroll_manager
                .subscription_ids()
                .into_iter()
                .filter_map(|id| a.scroll_manager.listener(id).map(|t| timer_state(id, t)))
                .collect();
            Ok(json!({"dispatched": dispatched, "timers": timers}))
        }
        "timer.get" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let attached = a
                .scroll_manager
                .listener(id)
                .ok_or_else(|| format!("timer not found: {}", id))?;
            Ok(timer_state(id, attached))
        }
        "timer.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let ids: Vec<String> = a.scroll_manager.subscription_ids().into_iter().map(String::from).collect();
            Ok(json!({"ids": ids}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
