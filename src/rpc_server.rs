//! Read timer RPC server: JSON-RPC over stdin/stdout for webview hosts.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"timer.scroll", "params":{"document_scroll_top":420}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr (`RUST_LOG` controls the level) so stdout carries only
//! protocol messages.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use log::{error, info, warn};
use serde_json::{json, Value};

use readtimer::app::App;
use readtimer::rpc_handler::handle_method;

fn send(out: &mut impl Write, message: &Value) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

fn run(app: &Mutex<App>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    send(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!("dropping malformed request: {}", e);
                send(&mut out, &json!({"id":null,"error":format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                warn!("{} failed: {}", method, err);
                json!({"id": id, "error": err})
            }
        };
        send(&mut out, &response)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config_path = std::env::var("READTIMER_CONFIG").ok();
    let app = match App::new(config_path) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!("failed to initialize read timer bridge: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("read timer bridge ready");

    match run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("stdio failure: {}", e);
            ExitCode::FAILURE
        }
    }
}
