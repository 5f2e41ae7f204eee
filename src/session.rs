//! Cookie-backed session gate.
//!
//! A session is a single authenticated marker: a random nonce signed with
//! HMAC-SHA256 under the process secret, carried in a `session` cookie. There
//! is no per-session state beyond the signature being valid.

use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Signs and verifies session tokens.
#[derive(Clone)]
pub struct SessionKey {
    key: Vec<u8>,
}

impl SessionKey {
    /// Create a key from the configured secret.
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// Mint a fresh authenticated token: `b64(nonce).b64(hmac(nonce))`.
    pub fn issue(&self) -> String {
        let mut nonce = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut nonce);

        let mut mac = HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(&nonce);
        let tag = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(nonce),
            URL_SAFE_NO_PAD.encode(tag)
        )
    }

    /// Verify a token minted by [`issue`](Self::issue). Tag comparison is
    /// constant-time via `Mac::verify_slice`.
    pub fn verify(&self, token: &str) -> bool {
        let Some((nonce_b64, tag_b64)) = token.split_once('.') else {
            return false;
        };
        let Ok(nonce) = URL_SAFE_NO_PAD.decode(nonce_b64) else {
            return false;
        };
        let Ok(tag) = URL_SAFE_NO_PAD.decode(tag_b64) else {
            return false;
        };

        let mut mac = HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length");
        mac.update(&nonce);
        mac.verify_slice(&tag).is_ok()
    }
}

/// Build the `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

/// Build the `Set-Cookie` value clearing the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Pull the session token out of the request's `Cookie` header, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_verify_roundtrip() {
        let key = SessionKey::new("test_secret");
        let token = key.issue();
        assert!(key.verify(&token));
    }

    #[test]
    fn test_tokens_are_unique() {
        let key = SessionKey::new("test_secret");
        assert_ne!(key.issue(), key.issue());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let key = SessionKey::new("test_secret");
        let mut token = key.issue();
        token.pop();
        token.push('A');
        assert!(!key.verify(&token));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = SessionKey::new("one_secret").issue();
        assert!(!SessionKey::new("another_secret").verify(&token));
    }

    #[test]
    fn test_garbage_tokens_rejected() {
        let key = SessionKey::new("test_secret");
        assert!(!key.verify(""));
        assert!(!key.verify("no-dot-here"));
        assert!(!key.verify("not!base64.not!base64"));
    }

    #[test]
    fn test_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; session=abc.def; other=1".parse().unwrap(),
        );
        assert_eq!(token_from_headers(&headers), Some("abc.def".to_string()));
    }

    #[test]
    fn test_missing_cookie_header() {
        let headers = HeaderMap::new();
        assert_eq!(token_from_headers(&headers), None);
    }
}
