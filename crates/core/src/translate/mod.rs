pub mod error_code;
pub mod request;
mod youdao;

use crate::config::LangPair;
use crate::transport::TransportError;
use futures::future::BoxFuture;
use serde::Serialize;
use std::fmt;

pub use youdao::YoudaoTranslator;

/// One dictionary ("web") sense returned alongside the translation.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WebEntry {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Translation {
    /// The normalized text that was actually sent.
    pub original: String,
    pub text: String,
    pub web: Vec<WebEntry>,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "原 文: {}", self.original)?;
        write!(f, "\n翻译结果: {}", self.text)?;
        write!(f, "\n词 义:")?;
        for entry in &self.web {
            write!(f, "\n    {}: {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("请求失败。\n状态码: {0}")]
    Status(u16),
    #[error(
        "无效的 content-type.\n期望 application/json 但获取的是 {}",
        .0.as_deref().unwrap_or("undefined")
    )]
    ContentType(Option<String>),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{}", error_code::describe(.code, .message))]
    Api { code: String, message: &'static str },
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl TranslateError {
    /// Errors raised before a usable API payload was received.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Status(_) | Self::ContentType(_) | Self::Transport(_)
        )
    }
}

pub trait Translator: Send + Sync {
    fn translate(
        &self,
        text: String,
        pair: LangPair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>>;
}
