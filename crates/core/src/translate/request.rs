//! Signed query parameters for a single Youdao request.

use crate::config::{Credentials, LangPair};
use crate::text;
use rand::Rng;
use url::Url;

const SALT_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestParams {
    pub q: String,
    pub from: String,
    pub to: String,
    pub app_key: String,
    pub salt: String,
    pub sign: String,
}

impl RequestParams {
    /// Normalizes `text`, draws a fresh salt and signs. Built per call, never shared.
    pub fn new(text: &str, pair: &LangPair, credentials: &Credentials) -> Self {
        Self::with_salt(text, pair, credentials, salt())
    }

    pub fn with_salt(
        text: &str,
        pair: &LangPair,
        credentials: &Credentials,
        salt: String,
    ) -> Self {
        let q = text::normalize(text);
        let app_key = credentials.app_key.expose().to_owned();
        let sign = sign(&app_key, &q, &salt, credentials.app_secret.expose());
        Self {
            q,
            from: pair.from.as_str().to_owned(),
            to: pair.to.as_str().to_owned(),
            app_key,
            salt,
            sign,
        }
    }

    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("q", self.q.as_str()),
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("appKey", self.app_key.as_str()),
            ("salt", self.salt.as_str()),
            ("sign", self.sign.as_str()),
        ]
    }

    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().clear().extend_pairs(self.pairs());
        url
    }
}

/// Uppercase hex MD5 of `app_key + q + salt + secret`.
pub fn sign(app_key: &str, q: &str, salt: &str, secret: &str) -> String {
    let mut input = String::with_capacity(app_key.len() + q.len() + salt.len() + secret.len());
    input.push_str(app_key);
    input.push_str(q);
    input.push_str(salt);
    input.push_str(secret);
    format!("{:X}", md5::compute(input.as_bytes()))
}

/// A UUID-v4-shaped nonce from the thread-local RNG.
pub fn salt() -> String {
    salt_with(&mut rand::rng())
}

pub fn salt_with<R: Rng>(rng: &mut R) -> String {
    SALT_TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.random_range(0..16)),
            'y' => hex_digit(rng.random_range(0..4) | 0x8),
            other => other,
        })
        .collect()
}

fn hex_digit(v: u32) -> char {
    char::from_digit(v, 16).unwrap_or('0')
}
