//! Session token wrapper and the shared store clients sign with.

// self
use crate::_prelude::*;

/// Redacted session token, used as the HMAC key for signed requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);
impl SessionToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SessionToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SessionToken").field(&"<redacted>").finish()
	}
}
impl Display for SessionToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Shared slot holding the live session token.
///
/// Clones share the same slot. Readers take a snapshot, so a request is always signed with the
/// token held when it was built; [`TokenStore::replace`] swaps the token wholesale. A request
/// built concurrently with a refresh therefore signs with either the previous or the new token.
/// The store does not track expiry.
#[derive(Clone, Debug, Default)]
pub struct TokenStore(Arc<RwLock<Option<SessionToken>>>);
impl TokenStore {
	/// Returns a snapshot of the current token, if one was ever stored.
	pub fn current(&self) -> Option<SessionToken> {
		self.0.read().clone()
	}

	/// Replaces the current token, returning the previous one.
	pub fn replace(&self, token: SessionToken) -> Option<SessionToken> {
		self.0.write().replace(token)
	}

	/// Drops the current token; signed requests fail until a new token is stored.
	pub fn clear(&self) -> Option<SessionToken> {
		self.0.write().take()
	}
}
