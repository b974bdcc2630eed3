//! The translate command as seen from the host: read the selection, translate,
//! then print the result or notify the user.

use crate::config::{ConfigError, Credentials, LangPair};
use crate::translate::{Translation, Translator};

const LOG_TARGET: &str = "host";

/// Capabilities provided by whatever front end runs the command.
pub trait Host {
    /// The current selection, or an empty string when nothing is selected.
    fn selected_text(&mut self) -> String;
    fn append_line(&mut self, line: &str);
    fn show_info(&mut self, message: &str);
    fn show_error(&mut self, message: &str);

    fn show_translation(&mut self, translation: &Translation) {
        self.append_line(&translation.to_string());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Printed,
    NothingSelected,
    MissingCredentials,
    Failed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Printed | Self::NothingSelected)
    }
}

/// Runs one translation. Credentials are checked first and no request is made
/// without them; the translator is only built once there is text to send.
pub async fn translate_selection<H, F, T>(
    host: &mut H,
    credentials: Result<Credentials, ConfigError>,
    pair: LangPair,
    build_translator: F,
) -> Outcome
where
    H: Host + ?Sized,
    F: FnOnce(Credentials) -> T,
    T: Translator,
{
    let credentials = match credentials {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(target: LOG_TARGET, error = %e, "credentials not configured");
            host.show_error(&e.to_string());
            return Outcome::MissingCredentials;
        }
    };

    let text = host.selected_text();
    if text.is_empty() {
        tracing::debug!(target: LOG_TARGET, "nothing selected");
        return Outcome::NothingSelected;
    }

    let translator = build_translator(credentials);
    match translator.translate(text, pair).await {
        Ok(translation) => {
            host.show_translation(&translation);
            Outcome::Printed
        }
        Err(e) if e.is_transport() => {
            host.show_info(&format!("错误: {e}"));
            Outcome::Failed
        }
        Err(e) => {
            host.show_info(&e.to_string());
            Outcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;
    use crate::translate::{TranslateError, WebEntry};
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct RecordingHost {
        selection: String,
        output: Vec<String>,
        infos: Vec<String>,
        errors: Vec<String>,
    }

    impl Host for RecordingHost {
        fn selected_text(&mut self) -> String {
            self.selection.clone()
        }

        fn append_line(&mut self, line: &str) {
            self.output.push(line.to_owned());
        }

        fn show_info(&mut self, message: &str) {
            self.infos.push(message.to_owned());
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_owned());
        }
    }

    #[derive(Clone)]
    struct EchoTranslator {
        calls: Arc<AtomicUsize>,
    }

    impl Translator for EchoTranslator {
        fn translate(
            &self,
            text: String,
            _pair: LangPair,
        ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok(Translation {
                    original: text.clone(),
                    text: format!("[{text}]"),
                    web: vec![WebEntry {
                        key: text,
                        value: "echo".into(),
                    }],
                })
            }
            .boxed()
        }
    }

    struct FailingTranslator(fn() -> TranslateError);

    impl Translator for FailingTranslator {
        fn translate(
            &self,
            _text: String,
            _pair: LangPair,
        ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
            let err = (self.0)();
            async move { Err(err) }.boxed()
        }
    }

    fn credentials() -> Result<Credentials, ConfigError> {
        Ok(Credentials {
            app_key: ApiKey::new("k").unwrap(),
            app_secret: ApiKey::new("s").unwrap(),
        })
    }

    fn host_with(selection: &str) -> RecordingHost {
        RecordingHost {
            selection: selection.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn prints_translation() {
        let mut host = host_with("Hello");
        let calls = Arc::new(AtomicUsize::new(0));
        let translator = EchoTranslator {
            calls: calls.clone(),
        };

        let outcome =
            translate_selection(&mut host, credentials(), LangPair::default(), |_| translator)
                .await;

        assert_eq!(outcome, Outcome::Printed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(host.output.len(), 1);
        assert!(host.output[0].contains("翻译结果: [Hello]"));
        assert!(host.infos.is_empty() && host.errors.is_empty());
    }

    #[tokio::test]
    async fn missing_credentials_skip_the_request() {
        let mut host = host_with("Hello");
        let calls = Arc::new(AtomicUsize::new(0));
        let translator = EchoTranslator {
            calls: calls.clone(),
        };

        let outcome = translate_selection(
            &mut host,
            Err(ConfigError::MissingCredentials),
            LangPair::default(),
            |_| translator,
        )
        .await;

        assert_eq!(outcome, Outcome::MissingCredentials);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(host.errors, ["需要配置有道翻译 appKey 和 appSecret !"]);
        assert!(host.output.is_empty());
    }

    #[tokio::test]
    async fn empty_selection_does_nothing() {
        let mut host = host_with("");
        let calls = Arc::new(AtomicUsize::new(0));
        let translator = EchoTranslator {
            calls: calls.clone(),
        };

        let outcome =
            translate_selection(&mut host, credentials(), LangPair::default(), |_| translator)
                .await;

        assert_eq!(outcome, Outcome::NothingSelected);
        assert!(outcome.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(host.output.is_empty() && host.infos.is_empty() && host.errors.is_empty());
    }

    #[tokio::test]
    async fn transport_errors_are_prefixed() {
        let mut host = host_with("Hello");

        let outcome = translate_selection(&mut host, credentials(), LangPair::default(), |_| {
            FailingTranslator(|| TranslateError::Status(500))
        })
        .await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(host.infos, ["错误: 请求失败。\n状态码: 500"]);
        assert!(host.output.is_empty());
    }

    #[tokio::test]
    async fn api_errors_show_the_table_message() {
        let mut host = host_with("Hello");

        let outcome = translate_selection(&mut host, credentials(), LangPair::default(), |_| {
            FailingTranslator(|| TranslateError::Api {
                code: "411".into(),
                message: "访问频率受限,请稍后访问",
            })
        })
        .await;

        assert_eq!(outcome, Outcome::Failed);
        assert!(!outcome.is_success());
        assert_eq!(host.infos, ["访问频率受限,请稍后访问"]);
    }
}
