//! sharemarks — a multi-user shared bookmark board with a single-page WebView UI.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod controller;
pub mod database;
pub mod managers;
pub mod platform;
pub mod storage;
pub mod types;
pub mod validation;
pub mod view;

#[cfg(feature = "gui")]
pub mod ui;
