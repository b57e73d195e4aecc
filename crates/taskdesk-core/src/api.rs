use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use taskdesk_shared::board::item_path;
use taskdesk_shared::{Task, TaskCreate, TaskPatch, TaskRequest};
use tracing::{debug, error, instrument};

use crate::config::ApiSettings;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("task API unreachable at {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("task API returned {status} for {method} {path}: {body}")]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("failed to decode task API response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed building HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The remote task collection. Every call is a single round trip with no
/// retry.
pub trait TaskApi {
    fn list(&self) -> Result<Vec<Task>, ApiError>;
    fn create(&self, create: &TaskCreate) -> Result<(), ApiError>;
    fn update(&self, id: u64, patch: &TaskPatch) -> Result<(), ApiError>;
    fn delete(&self, id: u64) -> Result<(), ApiError>;

    /// Runs a mutation produced by a board. `List` is answered by `list`
    /// and its result discarded.
    fn execute(&self, request: &TaskRequest) -> Result<(), ApiError> {
        match request {
            TaskRequest::List => self.list().map(|_| ()),
            TaskRequest::Create(create) => self.create(create),
            TaskRequest::Update { id, patch } => self.update(*id, patch),
            TaskRequest::Delete { id } => self.delete(*id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(ApiError::Client)?;
        debug!(base_url = %settings.base_url, timeout = ?settings.timeout, "built task API client");
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bodyless requests still announce JSON, matching what the API expects.
    fn json_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(CONTENT_TYPE, "application/json")
    }

    fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| {
                let err = ApiError::Network {
                    url: self.url(path),
                    source,
                };
                error!(method, path, error = %err, "task API request failed");
                err
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(method, path, status = %status, "task API request succeeded");
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let err = ApiError::Status {
            method,
            path: path.to_string(),
            status,
            body,
        };
        error!(method, path, status = %status, error = %err, "task API rejected request");
        Err(err)
    }
}

impl TaskApi for HttpTaskApi {
    #[instrument(skip(self))]
    fn list(&self) -> Result<Vec<Task>, ApiError> {
        let path = TaskRequest::COLLECTION_PATH;
        let response = self.send("GET", path, self.json_request(self.client.get(self.url(path))))?;
        let tasks: Vec<Task> = response.json().map_err(|source| {
            let err = ApiError::Decode {
                path: path.to_string(),
                source,
            };
            error!(error = %err, "task list decode failed");
            err
        })?;
        debug!(total = tasks.len(), "fetched task collection");
        Ok(tasks)
    }

    #[instrument(skip(self, create), fields(title_len = create.title.len(), priority = %create.priority, status = %create.status))]
    fn create(&self, create: &TaskCreate) -> Result<(), ApiError> {
        let path = TaskRequest::COLLECTION_PATH;
        self.send("POST", path, self.client.post(self.url(path)).json(create))?;
        Ok(())
    }

    #[instrument(skip(self, patch), fields(status = ?patch.status))]
    fn update(&self, id: u64, patch: &TaskPatch) -> Result<(), ApiError> {
        let path = item_path(id);
        self.send("PATCH", &path, self.client.patch(self.url(&path)).json(patch))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&self, id: u64) -> Result<(), ApiError> {
        let path = item_path(id);
        self.send("DELETE", &path, self.json_request(self.client.delete(self.url(&path))))?;
        Ok(())
    }
}
