//! HTTP listener that logs JSON bodies and their struct shape

use axum::{
    extract::{DefaultBodyLimit, FromRequest, Request, State},
    http::{
        header::{CONTENT_TYPE, HOST},
        HeaderMap, Method, StatusCode, Uri, Version,
    },
    response::{IntoResponse, Response},
    Router,
};
use bytes::Bytes;
use serde_json::json;
use std::fmt::Write as _;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::decode::JsonDecoder;
use crate::error::{Error, Result, ResultExt};
use crate::output::{print, to_indented_string};
use crate::schema::SchemaRenderer;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Request line and headers of an inbound request
#[derive(Debug, Clone)]
pub struct RequestHead {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
}

impl RequestHead {
    /// Whether the declared content type is JSON
    ///
    /// Parameters such as `charset` are ignored.
    pub fn is_json(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
    }

    /// Raw-ish dump of the request: request line, headers, blank line, body
    pub fn dump(&self, body: &[u8]) -> String {
        let target = self
            .uri
            .path_and_query()
            .map_or_else(|| self.uri.path(), |pq| pq.as_str());
        let mut out = format!("{} {} {:?}\r\n", self.method, target, self.version);

        // Host leads, like a request on the wire
        let host = self
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| self.uri.authority().map(|a| a.as_str()));
        if let Some(host) = host {
            let _ = write!(out, "Host: {host}\r\n");
        }

        for (name, value) in &self.headers {
            if *name == HOST {
                continue;
            }
            let value = String::from_utf8_lossy(value.as_bytes());
            let _ = write!(out, "{}: {value}\r\n", canonical_header_name(name.as_str()));
        }

        out.push_str("\r\n");
        out.push_str(&String::from_utf8_lossy(body));
        out
    }
}

/// Everything logged for one JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestReport {
    /// Request dump, when header display is enabled
    pub headers: Option<String>,
    /// Printed JSON
    pub body: String,
    /// Struct declaration, when a format is configured
    pub declaration: Option<String>,
}

impl RequestReport {
    /// Log entries in emission order
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::with_capacity(3);
        if let Some(headers) = &self.headers {
            entries.push(format!("Headers:\n{headers}"));
        }
        entries.push(self.body.clone());
        if let Some(declaration) = &self.declaration {
            entries.push(format!("Struct format:\n{declaration}"));
        }
        entries
    }

    fn log(&self) {
        for entry in self.entries() {
            tracing::info!("{entry}");
        }
    }
}

/// Decode, print and render a request body according to `config`
///
/// Returns `Ok(None)` when there is nothing to report: the content type is
/// not JSON or the body is empty.
pub fn build_report(
    config: &ServerConfig,
    head: &RequestHead,
    body: &[u8],
) -> Result<Option<RequestReport>> {
    if !head.is_json() || body.is_empty() {
        return Ok(None);
    }

    let value = JsonDecoder::with_config(config.decoder_config()).decode(body)?;

    Ok(Some(RequestReport {
        headers: config.show_headers.then(|| head.dump(body)),
        body: print(&value, config.print_mode),
        declaration: config
            .target
            .map(|target| SchemaRenderer::new(target).render(&value)),
    }))
}

/// Build the router without binding a socket
pub fn router(config: ServerConfig) -> Router {
    let body_limit = config.body_limit;

    Router::new()
        .fallback(handle_request)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { config }))
}

/// Start the HTTP server and run until Ctrl-C or SIGTERM
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    serve_with_shutdown(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on http://{}", addr);
    }

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    Ok(())
}

/// Catch-all handler
///
/// Only JSON bodies are read; anything else is acknowledged unread, so the
/// body limit applies to JSON payloads alone.
async fn handle_request(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let head = RequestHead {
        method: request.method().clone(),
        uri: request.uri().clone(),
        version: request.version(),
        headers: request.headers().clone(),
    };
    let path = head.uri.path().to_string();
    tracing::info!("Received {} request to {}", head.method, path);

    let body = if head.is_json() {
        match Bytes::from_request(request, &state).await {
            Ok(body) => body,
            Err(rejection) => {
                tracing::warn!("Failed to read request body: {rejection}");
                return rejection.into_response();
            }
        }
    } else {
        Bytes::new()
    };

    match build_report(&state.config, &head, &body) {
        Ok(Some(report)) => report.log(),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!("Rejecting request body: {e}");
            return error_response(&e);
        }
    }

    acknowledge(&head.method, &path)
}

/// Fixed acknowledgment sent for every handled request
fn acknowledge(method: &Method, path: &str) -> Response {
    let reply = json!({
        "message": "Request processed successfully",
        "method": method.as_str(),
        "path": path,
    });

    match to_indented_string(&reply) {
        Ok(mut text) => {
            text.push('\n');
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], text).into_response()
        }
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &Error) -> Response {
    let message = match err {
        Error::Decode { .. } | Error::JsonParse(_) => "Error parsing JSON".to_string(),
        other => format!("Error formatting data: {other}"),
    };
    (err.status_code(), message).into_response()
}

/// `content-type` -> `Content-Type`
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutting down server...");
}
