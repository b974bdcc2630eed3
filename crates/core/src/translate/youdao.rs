use crate::config::{Credentials, LangPair, DEFAULT_API_URL};
use crate::translate::error_code;
use crate::translate::request::RequestParams;
use crate::translate::{TranslateError, Translation, Translator, WebEntry};
use crate::transport::{HttpTransport, Transport};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use url::Url;

const LOG_TARGET: &str = "translate::youdao";

#[derive(Clone)]
pub struct YoudaoTranslator<T = HttpTransport> {
    transport: T,
    credentials: Credentials,
    api_url: Url,
}

impl YoudaoTranslator<HttpTransport> {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(HttpTransport::new(), credentials)
    }
}

impl<T: Transport> YoudaoTranslator<T> {
    pub fn with_transport(transport: T, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            api_url: default_api_url(),
        }
    }

    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid url")
}

/// `translation` and `web[].value` arrive as arrays from the live API and as
/// plain strings from older deployments.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextField {
    One(String),
    Many(Vec<String>),
}

impl TextField {
    fn join(self) -> String {
        match self {
            Self::One(s) => s,
            Self::Many(parts) => parts.join(", "),
        }
    }
}

#[derive(Deserialize)]
struct YoudaoResponse {
    #[serde(rename = "errorCode")]
    error_code: String,
    #[serde(default)]
    translation: Option<TextField>,
    #[serde(default)]
    web: Option<Vec<YoudaoWebEntry>>,
}

#[derive(Deserialize)]
struct YoudaoWebEntry {
    key: String,
    value: TextField,
}

pub(crate) fn parse_response(original: String, body: &str) -> Result<Translation, TranslateError> {
    let parsed: YoudaoResponse = serde_json::from_str(body)?;

    if parsed.error_code != "0" {
        let message = error_code::message(&parsed.error_code);
        return Err(TranslateError::Api {
            code: parsed.error_code,
            message,
        });
    }

    Ok(Translation {
        original,
        text: parsed.translation.map(TextField::join).unwrap_or_default(),
        web: parsed
            .web
            .unwrap_or_default()
            .into_iter()
            .map(|entry| WebEntry {
                key: entry.key,
                value: entry.value.join(),
            })
            .collect(),
    })
}

impl<T: Transport> Translator for YoudaoTranslator<T> {
    fn translate(
        &self,
        text: String,
        pair: LangPair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        // Built before any I/O so every call signs its own fresh salt.
        let params = RequestParams::new(&text, &pair, &self.credentials);
        let url = params.to_url(&self.api_url);
        async move {
            tracing::debug!(
                target: LOG_TARGET,
                from = %params.from,
                to = %params.to,
                salt = %params.salt,
                chars = params.q.chars().count(),
                "sending translation request"
            );

            let response = self.transport.get(url).await?;

            if response.status != 200 {
                tracing::warn!(target: LOG_TARGET, status = response.status, "request failed");
                return Err(TranslateError::Status(response.status));
            }
            if !response.is_json() {
                tracing::warn!(
                    target: LOG_TARGET,
                    content_type = ?response.content_type,
                    "unexpected content type"
                );
                return Err(TranslateError::ContentType(response.content_type));
            }

            let result = parse_response(params.q, &response.body);
            if let Err(e) = &result {
                tracing::warn!(target: LOG_TARGET, error = %e, "translation failed");
            }
            result
        }
        .boxed()
    }
}
