use crate::transport::{HttpResponse, Transport, TransportError};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use url::Url;

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: Url) -> BoxFuture<'_, Result<HttpResponse, TransportError>> {
        async move {
            let response = self.client.get(url).send().await?;

            let status = response.status();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);

            let mut result = HttpResponse {
                status: status.as_u16(),
                content_type,
                body: String::new(),
            };
            // Non-200 and non-JSON bodies are never read.
            if status == StatusCode::OK && result.is_json() {
                result.body = response.text().await?;
            }
            Ok(result)
        }
        .boxed()
    }
}
