//! HMAC request signatures carried in the `x-auth-token` header.
//!
//! A signature is `base64("<public key>:<hex HMAC-SHA256>")`, where the MAC is keyed by the
//! session token and computed over `"<path>|"` followed by the raw request body bytes.

// std
use std::borrow::Cow;
// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
// self
use crate::auth::SessionToken;

type HmacSha256 = Hmac<Sha256>;

/// Prefixes `path` with `/` when missing. The query string, if any, stays part of the path.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
	if path.starts_with('/') { Cow::Borrowed(path) } else { Cow::Owned(format!("/{path}")) }
}

/// Computes the signature for `path` and `body` using `token` as the HMAC key.
///
/// The function is pure: identical inputs always produce identical output.
pub fn sign(public_key: &str, token: &SessionToken, path: &str, body: &[u8]) -> String {
	let mut mac = HmacSha256::new_from_slice(token.expose().as_bytes())
		.expect("HMAC-SHA256 must accept keys of any length.");

	mac.update(normalize_path(path).as_bytes());
	mac.update(b"|");
	mac.update(body);

	let digest = hex::encode(mac.finalize().into_bytes());

	STANDARD.encode(format!("{public_key}:{digest}"))
}
