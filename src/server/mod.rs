//! Development server with live reload

use anyhow::{anyhow, Result};
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands::generate;
use crate::Site;

/// WebSocket endpoint the injected client connects to
pub const LIVE_RELOAD_PATH: &str = "/__livereload";

/// Client half of live reload, injected before `</body>`
const LIVE_RELOAD_SCRIPT: &str = r#"<script>
(function () {
  var scheme = location.protocol === "https:" ? "wss://" : "ws://";
  var ws = new WebSocket(scheme + location.host + "/__livereload");
  ws.onmessage = function (msg) {
    if (msg.data === "reload") { location.reload(); }
  };
  ws.onclose = function () {
    console.log("Live reload disconnected, retrying...");
    setTimeout(function () { location.reload(); }, 1000);
  };
})();
</script>
"#;

struct ServerState {
    public_dir: PathBuf,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Serve `public/`; with `watch`, rebuild on source changes and push reloads
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = Router::new()
        .route(LIVE_RELOAD_PATH, get(livereload_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port)
        .parse()
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", ip, port, e))?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            let on_rebuilt = || {
                // Fails only when no page is connected
                let _ = reload_tx.send(());
                tracing::info!("Regenerated, reloading clients");
            };
            if let Err(e) = generate::watch_blocking(&site, on_rebuilt) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| forward_reloads(socket, reload_rx))
}

/// Relay reload signals to one browser until either side goes away
async fn forward_reloads(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            signal = reload_rx.recv() => match signal {
                Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    if socket.send(Message::Text("reload".to_string())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Ping(data))) => {
                    if socket.send(Message::Pong(data)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                _ => {}
            },
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// HTML pages get the reload client; everything else goes to `ServeDir`
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    if state.live_reload {
        if let Some(html_path) = html_file(&state.public_dir, request.uri().path()) {
            return match tokio::fs::read_to_string(&html_path).await {
                Ok(content) => Html(inject_live_reload(&content)).into_response(),
                Err(e) => {
                    tracing::warn!("Failed to read {:?}: {}", html_path, e);
                    (StatusCode::NOT_FOUND, "Not found").into_response()
                }
            };
        }
    }

    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(request).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("Failed to serve file: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// The HTML file a request path maps to, if it exists under `public_dir`
///
/// `/blog/` and `/blog` both map to `blog/index.html`. Paths that try to
/// leave `public_dir` map to nothing.
fn html_file(public_dir: &Path, uri_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;
    let relative = Path::new(decoded.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let candidate = public_dir.join(relative);
    let file = if candidate.is_dir() {
        candidate.join("index.html")
    } else {
        candidate
    };

    let is_html = file
        .extension()
        .is_some_and(|ext| ext == "html" || ext == "htm");
    (is_html && file.is_file()).then_some(file)
}

/// Insert the reload client before the last `</body>`, or append it
fn inject_live_reload(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!("{}{}{}", &html[..pos], LIVE_RELOAD_SCRIPT, &html[pos..]),
        None => format!("{}{}", html, LIVE_RELOAD_SCRIPT),
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inject_before_body_close() {
        let html = "<html><body><p>hi</p></body></html>";
        let out = inject_live_reload(html);
        assert!(out.starts_with("<html><body><p>hi</p><script>"));
        assert!(out.ends_with("</script>\n</body></html>"));
        assert_eq!(out.matches("</body>").count(), 1);
    }

    #[test]
    fn test_inject_without_body() {
        let out = inject_live_reload("<p>fragment</p>");
        assert!(out.starts_with("<p>fragment</p><script>"));
    }

    #[test]
    fn test_html_file_resolution() {
        let tmp = TempDir::new().unwrap();
        let public = tmp.path();
        fs::create_dir_all(public.join("blog/my post")).unwrap();
        fs::write(public.join("index.html"), "").unwrap();
        fs::write(public.join("blog/index.html"), "").unwrap();
        fs::write(public.join("blog/my post/index.html"), "").unwrap();
        fs::write(public.join("search.json"), "[]").unwrap();

        assert_eq!(html_file(public, "/"), Some(public.join("index.html")));
        assert_eq!(html_file(public, "/blog"), Some(public.join("blog/index.html")));
        assert_eq!(html_file(public, "/blog/"), Some(public.join("blog/index.html")));
        assert_eq!(
            html_file(public, "/blog/my%20post/"),
            Some(public.join("blog/my post/index.html"))
        );
        assert_eq!(html_file(public, "/search.json"), None);
        assert_eq!(html_file(public, "/missing/"), None);
        assert_eq!(html_file(public, "/../etc/passwd"), None);
    }
}
