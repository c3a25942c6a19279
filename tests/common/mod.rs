#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use article_actions::infrastructure::http::HttpArticleRepository;
use article_actions::infrastructure::page::InMemoryPage;
use article_actions::domain::page::element;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;
use url::Url;

/// One request as seen by the mock article API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    write_status: Option<StatusCode>,
    reads: Arc<HashMap<String, (StatusCode, String)>>,
}

/// Builder for [`MockApi`].
#[derive(Default)]
pub struct MockApiBuilder {
    write_status: Option<StatusCode>,
    reads: HashMap<String, (StatusCode, String)>,
}

impl MockApiBuilder {
    /// Status returned to every POST, PUT and DELETE.
    pub fn write_status(mut self, status: StatusCode) -> Self {
        self.write_status = Some(status);
        self
    }

    /// JSON served for `GET path`.
    pub fn get(mut self, path: &str, body: Value) -> Self {
        self.reads
            .insert(path.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    /// Raw body and status served for `GET path`.
    pub fn get_raw(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.reads
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub async fn spawn(self) -> MockApi {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            write_status: self.write_status,
            reads: Arc::new(self.reads),
        };

        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockApi { addr, state }
    }
}

/// Records every request and answers the way the blog API does.
async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    if method == Method::GET {
        return match state.reads.get(&path) {
            Some((status, body)) => (
                *status,
                [(header::CONTENT_TYPE, "application/json")],
                body.clone(),
            )
                .into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        };
    }

    let default_status = if method == Method::POST {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let status = state.write_status.unwrap_or(default_status);

    if method == Method::DELETE || body.is_empty() {
        return status.into_response();
    }

    let echoed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, Json(echoed)).into_response()
}

/// Mock article API listening on an ephemeral local port.
pub struct MockApi {
    addr: SocketAddr,
    state: MockState,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder::default()
    }

    pub async fn start() -> Self {
        Self::builder().spawn().await
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    /// Absolute URL of `path` on the mock's origin.
    pub fn url(&self, path: &str) -> String {
        self.base_url().join(path).unwrap().to_string()
    }

    pub fn repository(&self) -> Arc<HttpArticleRepository> {
        Arc::new(HttpArticleRepository::new(self.base_url()).unwrap())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Base URL on which nothing listens.
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

/// Article detail page: hidden id field and a delete button.
pub fn article_page(api: &MockApi, id: &str) -> InMemoryPage {
    InMemoryPage::new(&api.url(&format!("/articles/{id}")))
        .unwrap()
        .with_value(element::ARTICLE_ID, id)
        .with_element(element::DELETE_BUTTON)
}

/// Edit page at `location_path` with filled title and content fields.
pub fn edit_page(api: &MockApi, location_path: &str, title: &str, content: &str) -> InMemoryPage {
    InMemoryPage::new(&api.url(location_path))
        .unwrap()
        .with_value(element::TITLE, title)
        .with_value(element::CONTENT, content)
}
