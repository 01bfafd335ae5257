//! sharemarks UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The single page is rendered as HTML/CSS/JS inside the WebView.
//! Communication between the Rust backend and the page uses wry IPC.

pub mod webview_app;
