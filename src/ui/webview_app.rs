//! WebView shell for sharemarks using `wry` + `tao`.
//!
//! Architecture:
//! - The single internal page is served via the `sm://` custom protocol.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, carrying
//!   `{"cmd": …}` JSON that is translated into controller events.
//! - Updates flow back as `evaluate_script` calls built from controller
//!   directives; the list and picker are replaced wholesale.

use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::App;
use crate::controller::{self, UiDirective, UiEvent};

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
    /// Posted by a copy-label timer when its delay elapses.
    ResetCopyLabel(i64),
}

const PAGE_CSS: &str = r#"
:root{--bg:#0d1117;--panel:#161b22;--fg:#e6edf3;--muted:#7d8590;--border:#30363d;--accent:#58a6ff;--danger:#f85149;--radius:8px;--font:-apple-system,BlinkMacSystemFont,'Segoe UI','Noto Sans',Helvetica,Arial,sans-serif}
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:var(--font);background:var(--bg);color:var(--fg);padding:32px}
main{max-width:720px;margin:0 auto}
h1{font-size:24px;margin-bottom:16px}
h2{font-size:18px;margin:24px 0 12px}
h3{font-size:16px;margin-bottom:4px}
label{display:block;color:var(--muted);margin:10px 0 4px;font-size:13px}
select,input,textarea{width:100%;background:var(--panel);color:var(--fg);border:1px solid var(--border);border-radius:var(--radius);padding:8px 10px;font-family:var(--font);font-size:14px}
select{width:auto;min-width:220px}
button{background:var(--panel);color:var(--fg);border:1px solid var(--border);border-radius:var(--radius);padding:6px 12px;font-size:13px;cursor:pointer;margin-right:8px}
button:hover{border-color:var(--accent)}
ul{list-style:none;margin-top:16px}
li article{background:var(--panel);border:1px solid var(--border);border-radius:var(--radius);padding:16px;margin-bottom:12px}
li hr{display:none}
article a{color:var(--accent);text-decoration:none}
article p{margin:6px 0;color:var(--fg)}
article time{display:block;color:var(--muted);font-size:12px;margin-bottom:8px}
#empty-message{color:var(--muted);margin-top:16px}
#form-error{color:var(--danger);min-height:18px;margin:8px 0;font-size:13px}
form button[type=submit]{margin-top:4px}
"#;

const PAGE_BODY: &str = r#"
<main>
<h1>Shared Bookmarks</h1>
<section>
<label for='user-select'>User</label>
<select id='user-select'></select>
</section>
<p id='empty-message' hidden>No bookmarks yet. Add the first one below!</p>
<ul id='bookmark-list'></ul>
<form id='bookmark-form'>
<h2>Add a bookmark</h2>
<label for='url'>URL</label>
<input id='url' name='url' type='text' placeholder='https://example.com'>
<label for='title'>Title</label>
<input id='title' name='title' type='text'>
<label for='description'>Description</label>
<textarea id='description' name='description' rows='3'></textarea>
<p id='form-error' role='alert'></p>
<button type='submit'>Add Bookmark</button>
</form>
</main>
"#;

const PAGE_JS: &str = r#"
function send(cmd, extra) {
  var msg = Object.assign({cmd: cmd}, extra || {});
  window.ipc.postMessage(JSON.stringify(msg));
}
document.getElementById('user-select').addEventListener('change', function(e) {
  send('select_user', {user_id: e.target.value});
});
document.getElementById('bookmark-form').addEventListener('submit', function(e) {
  e.preventDefault();
  send('submit_bookmark', {
    url: document.getElementById('url').value,
    title: document.getElementById('title').value,
    description: document.getElementById('description').value
  });
});
document.getElementById('bookmark-list').addEventListener('click', function(e) {
  if (e.target.classList.contains('copy-btn')) {
    send('copy_url', {id: parseInt(e.target.dataset.id, 10)});
  }
  if (e.target.classList.contains('like-btn')) {
    send('like_bookmark', {id: parseInt(e.target.dataset.id, 10)});
  }
});
send('ui_ready');
"#;

/// Builds the single internal page.
fn page_html() -> String {
    let mut html = String::with_capacity(PAGE_CSS.len() + PAGE_BODY.len() + PAGE_JS.len() + 200);
    html.push_str(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Shared Bookmarks</title><style>",
    );
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(PAGE_BODY);
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

// ─── IPC handler ───

/// Translates one page IPC message into a controller event.
fn handle_ipc(message: &str) -> Option<UiEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => Some(UiEvent::UiReady),

        "select_user" => {
            let user_id = msg.get("user_id").and_then(|v| v.as_str()).unwrap_or("");
            Some(UiEvent::SelectUser {
                user_id: user_id.to_string(),
            })
        }

        "submit_bookmark" => Some(UiEvent::SubmitBookmark {
            url: msg
                .get("url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            title: msg
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            description: msg
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        }),

        "copy_url" => msg
            .get("id")
            .and_then(|v| v.as_i64())
            .map(|bookmark_id| UiEvent::CopyUrl { bookmark_id }),

        "like_bookmark" => msg
            .get("id")
            .and_then(|v| v.as_i64())
            .map(|bookmark_id| UiEvent::LikeBookmark { bookmark_id }),

        _ => None,
    }
}

/// Clips a message for logging to at most `max` bytes without splitting a
/// character. Submit payloads carry raw form text, so any byte may be
/// mid-character.
fn log_preview(message: &str, max: usize) -> &str {
    if message.len() <= max {
        return message;
    }
    let mut end = max;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

// ─── New-window requests ───

/// True for URLs that may leave the app for the system browser. Internal
/// pages and other schemes (`javascript:`, `file:`) are dropped.
fn is_external_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Opens a URL in the platform's default browser. Best-effort: a spawn
/// failure is logged and the request is dropped.
fn open_external(url: &str) {
    #[cfg(target_os = "linux")]
    let spawned = Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();

    if let Err(e) = spawned {
        eprintln!("[NW] Failed to open {}: {}", url, e);
    }
}

// ─── Directive application ───

/// Converts directives into page scripts and timers. Scripts are posted to
/// the event loop; `ScheduleCopyLabelReset` spawns a thread that posts the
/// reset event when the delay elapses.
fn dispatch(directives: Vec<UiDirective>, proxy: &EventLoopProxy<UserEvent>) {
    for directive in directives {
        match directive {
            UiDirective::ScheduleCopyLabelReset {
                bookmark_id,
                delay_ms,
            } => {
                let timer_proxy = proxy.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(delay_ms));
                    let _ = timer_proxy.send_event(UserEvent::ResetCopyLabel(bookmark_id));
                });
            }
            other => {
                if let Some(js) = directive_script(&other) {
                    let _ = proxy.send_event(UserEvent::EvalScript(js));
                }
            }
        }
    }
}

/// Renders one directive as a page script. `ScheduleCopyLabelReset` has no
/// script form and returns `None`.
fn directive_script(directive: &UiDirective) -> Option<String> {
    match directive {
        UiDirective::RenderUserOptions { options_html } => Some(format!(
            "document.getElementById('user-select').innerHTML = {};",
            js_string(options_html)
        )),

        UiDirective::RenderBookmarks {
            list_html,
            show_empty_message,
        } => Some(format!(
            "document.getElementById('bookmark-list').innerHTML = {}; document.getElementById('empty-message').hidden = {};",
            js_string(list_html),
            !show_empty_message
        )),

        UiDirective::ShowFormError { message } => Some(format!(
            "document.getElementById('form-error').textContent = {};",
            js_string(message)
        )),

        UiDirective::ClearFormError => {
            Some("document.getElementById('form-error').textContent = '';".to_string())
        }

        UiDirective::ShowAlert { message } => Some(format!("alert({});", js_string(message))),

        UiDirective::ResetForm => {
            Some("document.getElementById('bookmark-form').reset();".to_string())
        }

        // Best-effort: the promise rejection is swallowed
        UiDirective::CopyToClipboard { url } => Some(format!(
            "navigator.clipboard.writeText({}).catch(function() {{}});",
            js_string(url)
        )),

        UiDirective::SetCopyLabel { bookmark_id, label } => Some(format!(
            "var b = document.querySelector('.copy-btn[data-id=\"{}\"]'); if (b) b.textContent = {};",
            bookmark_id,
            js_string(label)
        )),

        UiDirective::ScheduleCopyLabelReset { .. } => None,
    }
}

/// Encodes a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

// ─── Main entry point ───

pub fn run() {
    let app = App::open_default().expect("Failed to initialize sharemarks");
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Shared Bookmarks")
        .with_inner_size(tao::dpi::LogicalSize::new(900.0, 720.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("sm".into(), move |_wv_id, _request| {
            // One internal page regardless of path
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page_html().into_bytes().into())
                .unwrap()
        })
        .with_url("sm://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", log_preview(body, 200));
            if let Some(event) = handle_ipc(body) {
                let directives = {
                    let mut s = ipc_state.lock().unwrap();
                    controller::handle_event(&mut s, event)
                };
                dispatch(directives, &ipc_proxy);
            }
        })
        // Bookmark links open in a new tab; there is no second window, so
        // hand them to the system browser instead.
        .with_new_window_req_handler(|url, _features| {
            eprintln!("[NW] {}", url);
            if is_external_url(&url) {
                open_external(&url);
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    let loop_proxy = proxy.clone();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::ResetCopyLabel(bookmark_id) => {
                    let directives = {
                        let mut s = state.lock().unwrap();
                        controller::handle_event(&mut s, UiEvent::ResetCopyLabel { bookmark_id })
                    };
                    dispatch(directives, &loop_proxy);
                }
            },

            _ => {}
        }
    });
}
