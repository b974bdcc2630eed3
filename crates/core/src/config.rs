use crate::lang;
use std::fmt;

pub const DEFAULT_API_URL: &str = "http://openapi.youdao.com/api";
pub const DEFAULT_FROM_LANG: &str = "EN";
pub const DEFAULT_TO_LANG: &str = "zh-CHS";
pub const AUTO_LANG: &str = "auto";
pub const ENV_YOUDAO_APP_KEY: &str = "YOUDAO_APP_KEY";
pub const ENV_YOUDAO_APP_SECRET: &str = "YOUDAO_APP_SECRET";

/// Language tag sent as `from` / `to`. Must be a key of the language table or `auto`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangCode(String);

impl LangCode {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyLang);
        }
        if v != AUTO_LANG && lang::display_name(&v).is_none() {
            return Err(ConfigError::UnsupportedLang(v));
        }
        Ok(Self(v))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangPair {
    pub from: LangCode,
    pub to: LangCode,
}

impl Default for LangPair {
    fn default() -> Self {
        Self {
            from: LangCode(DEFAULT_FROM_LANG.to_owned()),
            to: LangCode(DEFAULT_TO_LANG.to_owned()),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(v))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

/// The Youdao credential pair. Both halves are required before any request is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub app_key: ApiKey,
    pub app_secret: ApiKey,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("需要配置有道翻译 appKey 和 appSecret !")]
    MissingCredentials,
    #[error("api key must not be empty")]
    EmptyApiKey,
    #[error("language must not be empty")]
    EmptyLang,
    #[error("unsupported language: {0}")]
    UnsupportedLang(String),
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_api_key(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<ApiKey>, ConfigError> {
    match cli_value {
        Some(v) => Ok(Some(ApiKey::new(v)?)),
        None => match env.var(env_key) {
            Some(v) => Ok(Some(ApiKey::new(v)?)),
            None => Ok(None),
        },
    }
}

/// Resolves both halves of the credential pair. A missing or blank value on
/// either side yields [`ConfigError::MissingCredentials`].
pub fn resolve_credentials(
    cli_app_key: Option<String>,
    cli_app_secret: Option<String>,
    env: &impl Env,
) -> Result<Credentials, ConfigError> {
    let app_key = resolve_api_key(cli_app_key, ENV_YOUDAO_APP_KEY, env);
    let app_secret = resolve_api_key(cli_app_secret, ENV_YOUDAO_APP_SECRET, env);
    match (app_key, app_secret) {
        (Ok(Some(app_key)), Ok(Some(app_secret))) => Ok(Credentials {
            app_key,
            app_secret,
        }),
        _ => Err(ConfigError::MissingCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_cli_takes_precedence_over_env() {
        let env = MapEnv::default().with_var(ENV_YOUDAO_APP_KEY, "env-key");
        let key = resolve_api_key(Some("cli-key".to_owned()), ENV_YOUDAO_APP_KEY, &env)
            .expect("valid key")
            .expect("present");
        assert_eq!(key.expose(), "cli-key");
    }

    #[test]
    fn api_key_env_used_when_cli_missing() {
        let env = MapEnv::default().with_var(ENV_YOUDAO_APP_KEY, "env-key");
        let key = resolve_api_key(None, ENV_YOUDAO_APP_KEY, &env)
            .expect("valid key")
            .expect("present");
        assert_eq!(key.expose(), "env-key");
    }

    #[test]
    fn credentials_resolve_from_mixed_sources() {
        let env = MapEnv::default().with_var(ENV_YOUDAO_APP_SECRET, "env-secret");
        let creds = resolve_credentials(Some("cli-key".to_owned()), None, &env).expect("complete");
        assert_eq!(creds.app_key.expose(), "cli-key");
        assert_eq!(creds.app_secret.expose(), "env-secret");
    }

    #[test]
    fn credentials_missing_secret_is_an_error() {
        let env = MapEnv::default().with_var(ENV_YOUDAO_APP_KEY, "key");
        assert_eq!(
            resolve_credentials(None, None, &env),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn credentials_blank_value_is_an_error() {
        let env = MapEnv::default();
        assert_eq!(
            resolve_credentials(Some("key".to_owned()), Some("  ".to_owned()), &env),
            Err(ConfigError::MissingCredentials)
        );
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("secret").expect("non-empty");
        assert_eq!(format!("{key:?}"), "ApiKey(**redacted**)");
    }

    #[test]
    fn lang_code_accepts_table_entries_and_auto() {
        assert_eq!(LangCode::new("ja").expect("known").as_str(), "ja");
        assert_eq!(LangCode::new("auto").expect("auto").as_str(), "auto");
        assert_eq!(
            LangCode::new("xx"),
            Err(ConfigError::UnsupportedLang("xx".to_owned()))
        );
        assert_eq!(LangCode::new(""), Err(ConfigError::EmptyLang));
    }

    #[test]
    fn default_pair_is_english_to_chinese() {
        let pair = LangPair::default();
        assert_eq!(pair.from.as_str(), "EN");
        assert_eq!(pair.to.as_str(), "zh-CHS");
    }
}
