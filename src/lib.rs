//! readtimer — reading time estimates with a live "time remaining" indicator.
//!
//! The total time is estimated once from the word count of the attached
//! content; every scroll event then recomputes the remaining time from the
//! scroll offset and republishes a status line.
//!
//! This library crate exposes all modules for use by the RPC bridge binary
//! and integration tests.

pub mod app;
pub mod dom;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
