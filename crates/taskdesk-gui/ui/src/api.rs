use gloo::net::http::{Request, RequestBuilder, Response};
use taskdesk_shared::{Task, TaskRequest};

/// Base URL of the task API, fixed at build time.
pub const API_BASE: &str = match option_env!("TASKDESK_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

fn url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

fn builder(request: &TaskRequest) -> RequestBuilder {
    let url = url(&request.path());
    let builder = match request {
        TaskRequest::List => Request::get(&url),
        TaskRequest::Create(_) => Request::post(&url),
        TaskRequest::Update { .. } => Request::patch(&url),
        TaskRequest::Delete { .. } => Request::delete(&url),
    };
    builder.header("Content-Type", "application/json")
}

async fn send(request: &TaskRequest) -> Result<Response, String> {
    let builder = builder(request);
    let sent = match request {
        TaskRequest::Create(create) => builder
            .json(create)
            .map_err(|e| format!("failed to encode body: {e}"))?
            .send()
            .await,
        TaskRequest::Update { patch, .. } => builder
            .json(patch)
            .map_err(|e| format!("failed to encode body: {e}"))?
            .send()
            .await,
        TaskRequest::List | TaskRequest::Delete { .. } => builder.send().await,
    };
    let response = sent.map_err(|e| format!("network error: {e}"))?;

    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(format!(
        "{} {} returned {}: {body}",
        request.method(),
        request.path(),
        response.status()
    ))
}

pub async fn fetch_tasks() -> Result<Vec<Task>, String> {
    let response = send(&TaskRequest::List).await?;
    response
        .json::<Vec<Task>>()
        .await
        .map_err(|e| format!("decode error: {e}"))
}

/// Runs a mutation. The response body is not used; callers refetch.
pub async fn execute(request: &TaskRequest) -> Result<(), String> {
    send(request).await.map(|_| ())
}
