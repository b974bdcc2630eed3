mod http;

use futures::future::BoxFuture;
use url::Url;

pub use http::HttpTransport;

/// Status line, content type and body of a completed GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

pub trait Transport: Send + Sync {
    fn get(&self, url: Url) -> BoxFuture<'_, Result<HttpResponse, TransportError>>;
}
