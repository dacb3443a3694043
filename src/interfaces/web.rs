use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application::translate::translate;
use crate::domain::error::TranslatorError;
use crate::domain::model::{Language, TranslationRequest, TranslationResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    pub source_code: String,
    pub source_language: String,
    pub target_language: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // HTML form
        .route("/", get(index).post(submit_form))
        // JSON API
        .route("/api/translate", post(translate_json))
        .route("/api/health", get(health_check))
}

/// Full application with request tracing, ready to serve
pub fn app(state: AppState) -> Router {
    create_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState) -> Result<(), TranslatorError> {
    let server = &state.config.server;
    let addr: SocketAddr = format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| TranslatorError::Config(format!("Invalid server address: {}", e)))?;

    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let defaults = &state.config.defaults;
    Html(render_page(
        "",
        &defaults.source_language,
        &defaults.target_language,
        None,
    ))
}

async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    let output = match TranslationRequest::from_labels(
        form.source_code.as_str(),
        &form.source_language,
        &form.target_language,
    ) {
        Ok(request) => translate(state.gateway.as_ref(), &request)
            .await
            .render()
            .to_string(),
        Err(e) => format!("ERROR: {}", e),
    };

    Html(render_page(
        &form.source_code,
        &form.source_language,
        &form.target_language,
        Some(&output),
    ))
}

async fn translate_json(
    State(state): State<AppState>,
    Json(payload): Json<TranslateForm>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    let request = TranslationRequest::from_labels(
        payload.source_code,
        &payload.source_language,
        &payload.target_language,
    )
    .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()}))))?;

    Ok(Json(translate(state.gateway.as_ref(), &request).await))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.gateway.model(),
    }))
}

/// Render the translator page; `output` fills the result panel when present.
pub fn render_page(
    source_code: &str,
    source_language: &str,
    target_language: &str,
    output: Option<&str>,
) -> String {
    let options: String = Language::known()
        .iter()
        .map(|lang| format!("<option value=\"{0}\"></option>", escape_html(lang.name())))
        .collect();

    let result = output
        .map(|text| {
            let class = if text.starts_with("ERROR") { "error" } else { "code" };
            format!(
                "<h2>Output</h2>\n<pre class=\"{}\">{}</pre>",
                class,
                escape_html(text)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Code Translator</title>
<style>
body {{ font-family: sans-serif; max-width: 960px; margin: 2em auto; }}
textarea {{ width: 100%; height: 16em; font-family: monospace; }}
pre {{ background: #f4f4f4; padding: 1em; white-space: pre-wrap; }}
pre.error {{ color: #b00020; }}
</style>
</head>
<body>
<h1>Code Translator</h1>
<form method="post" action="/">
<label>From <input name="source_language" list="languages" value="{source_language}" required></label>
<label>To <input name="target_language" list="languages" value="{target_language}" required></label>
<datalist id="languages">{options}</datalist>
<textarea name="source_code" placeholder="Paste source code here">{source_code}</textarea>
<button type="submit">Translate</button>
</form>
{result}
</body>
</html>
"#,
        source_language = escape_html(source_language),
        target_language = escape_html(target_language),
        source_code = escape_html(source_code),
        options = options,
        result = result,
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
