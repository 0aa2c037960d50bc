//! Outbound request assembly: URL resolution, JSON bodies, headers, and signing.
//!
//! The body is serialized once into an owned buffer; the same bytes feed the signature and the
//! transport, so what is signed is exactly what is transmitted.

// crates.io
use http::header::{CONTENT_TYPE, USER_AGENT};
// self
use crate::{
	_prelude::*,
	auth::{self, SessionToken},
	error::ConfigError,
};

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = "mopinion-rust-client";
/// Header carrying the request signature.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// A fully assembled request, ready for a transport.
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// Request method.
	pub method: Method,
	/// Relative path (including any query string) as supplied by the caller.
	pub path: String,
	/// Absolute URL resolved beneath the base URL.
	pub url: Url,
	/// Request headers.
	pub headers: HeaderMap,
	/// JSON body bytes, exactly as signed.
	pub body: Option<Vec<u8>>,
}

/// Returns `false` only for the unsigned bootstrap endpoints, `GET token` and `GET ping`.
pub fn requires_authentication(method: &Method, path: &str) -> bool {
	let path = path.strip_prefix('/').unwrap_or(path);

	!(*method == Method::GET && matches!(path, "token" | "ping"))
}

/// Assembles [`OutboundRequest`]s against a base URL with a token snapshot.
///
/// The token is captured when the builder is created; requests built from it never observe a
/// later token replacement.
#[derive(Clone, Debug)]
pub struct RequestBuilder<'a> {
	base_url: &'a Url,
	user_agent: &'a str,
	public_key: &'a str,
	token: Option<SessionToken>,
}
impl<'a> RequestBuilder<'a> {
	/// Creates a builder bound to `base_url`, signing as `public_key` with `token`.
	pub fn new(
		base_url: &'a Url,
		user_agent: &'a str,
		public_key: &'a str,
		token: Option<SessionToken>,
	) -> Self {
		Self { base_url, user_agent, public_key, token }
	}

	/// Builds a request without a body.
	pub fn build(&self, method: Method, path: &str) -> Result<OutboundRequest> {
		self.assemble(method, path, None)
	}

	/// Builds a request carrying `body` serialized as JSON.
	pub fn build_json<B>(&self, method: Method, path: &str, body: &B) -> Result<OutboundRequest>
	where
		B: ?Sized + Serialize,
	{
		let bytes = serde_json::to_vec(body).map_err(|source| Error::Encode { source })?;

		self.assemble(method, path, Some(bytes))
	}

	fn assemble(
		&self,
		method: Method,
		path: &str,
		body: Option<Vec<u8>>,
	) -> Result<OutboundRequest> {
		if !self.base_url.path().ends_with('/') {
			return Err(
				ConfigError::BaseUrlWithoutTrailingSlash { url: self.base_url.to_string() }.into()
			);
		}

		let url = self.base_url.join(path).map_err(|source| ConfigError::InvalidPath {
			path: path.to_owned(),
			source,
		})?;
		let mut headers = HeaderMap::new();

		if body.is_some() {
			headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		}
		if !self.user_agent.is_empty() {
			headers.insert(
				USER_AGENT,
				HeaderValue::from_str(self.user_agent).map_err(ConfigError::from)?,
			);
		}
		if requires_authentication(&method, path) {
			let token = self.token.as_ref().ok_or(Error::NoToken)?;
			let signature = auth::sign(
				self.public_key,
				token,
				&auth::normalize_path(path),
				body.as_deref().unwrap_or_default(),
			);

			headers.insert(
				AUTH_TOKEN_HEADER,
				HeaderValue::from_str(&signature).map_err(ConfigError::from)?,
			);
		}

		Ok(OutboundRequest { method, path: path.to_owned(), url, headers, body })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const PUBLIC_KEY: &str = "publickey";

	fn base_url() -> Url {
		Url::parse("https://api.mopinion.com/").expect("Base URL fixture should parse.")
	}

	fn token() -> Option<SessionToken> {
		Some(SessionToken::new("token"))
	}

	#[test]
	fn bootstrap_endpoints_skip_signing() {
		assert!(!requires_authentication(&Method::GET, "token"));
		assert!(!requires_authentication(&Method::GET, "/token"));
		assert!(!requires_authentication(&Method::GET, "ping"));
		assert!(requires_authentication(&Method::POST, "token"));
		assert!(requires_authentication(&Method::DELETE, "ping"));
		assert!(requires_authentication(&Method::GET, "account"));
		assert!(requires_authentication(&Method::GET, "token?x=1"));
	}

	#[test]
	fn unsigned_requests_never_carry_auth_header() {
		let base = base_url();
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, token());

		for path in ["token", "ping"] {
			let request =
				builder.build(Method::GET, path).expect("Bootstrap request should build.");

			assert!(request.headers.get(AUTH_TOKEN_HEADER).is_none());
		}
	}

	#[test]
	fn unsigned_requests_build_without_token() {
		let base = base_url();
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, None);
		let request = builder.build(Method::GET, "token").expect("Token request needs no token.");

		assert_eq!(request.url.as_str(), "https://api.mopinion.com/token");
		assert_eq!(
			request.headers.get(USER_AGENT).map(|v| v.as_bytes()),
			Some(&b"mopinion-rust-client"[..]),
		);
	}

	#[test]
	fn signed_request_without_token_fails() {
		let base = base_url();
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, None);
		let err = builder
			.build(Method::GET, "account")
			.expect_err("Signed requests must require a token.");

		assert!(matches!(err, Error::NoToken));
	}

	#[test]
	fn signature_covers_transmitted_body() {
		let base = base_url();
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, token());
		let body = serde_json::json!({ "name": "report <name> & co" });
		let request = builder
			.build_json(Method::POST, "reports", &body)
			.expect("Signed request with body should build.");
		let transmitted = request.body.as_deref().expect("Body should be present.");
		let expected = auth::sign(
			PUBLIC_KEY,
			&SessionToken::new("token"),
			"/reports",
			transmitted,
		);

		assert_eq!(transmitted, br#"{"name":"report <name> & co"}"#);
		assert_eq!(
			request.headers.get(AUTH_TOKEN_HEADER).map(|v| v.as_bytes()),
			Some(expected.as_bytes()),
		);
		assert_eq!(
			request.headers.get(CONTENT_TYPE).map(|v| v.as_bytes()),
			Some(&b"application/json"[..]),
		);
	}

	#[test]
	fn signature_includes_query_string() {
		let base = base_url();
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, token());
		let request = builder
			.build(Method::DELETE, "reports/1?dry-run=true")
			.expect("Signed request with query should build.");
		let expected =
			auth::sign(PUBLIC_KEY, &SessionToken::new("token"), "/reports/1?dry-run=true", b"");

		assert_eq!(request.url.as_str(), "https://api.mopinion.com/reports/1?dry-run=true");
		assert_eq!(
			request.headers.get(AUTH_TOKEN_HEADER).map(|v| v.as_bytes()),
			Some(expected.as_bytes()),
		);
		assert!(request.headers.get(CONTENT_TYPE).is_none());
		assert!(request.body.is_none());
	}

	#[test]
	fn base_url_without_trailing_slash_is_rejected() {
		let base =
			Url::parse("https://api.mopinion.com/v1").expect("Base URL fixture should parse.");
		let builder = RequestBuilder::new(&base, DEFAULT_USER_AGENT, PUBLIC_KEY, token());
		let err = builder
			.build(Method::GET, "account")
			.expect_err("Base URLs must end with a slash.");

		assert!(matches!(err, Error::Config(ConfigError::BaseUrlWithoutTrailingSlash { .. })));
	}

	#[test]
	fn paths_resolve_beneath_base_path() {
		let base =
			Url::parse("https://api.mopinion.com/v1/").expect("Base URL fixture should parse.");
		let builder = RequestBuilder::new(&base, "", PUBLIC_KEY, token());
		let request =
			builder.build(Method::GET, "datasets/2/fields").expect("Request should build.");

		assert_eq!(request.url.as_str(), "https://api.mopinion.com/v1/datasets/2/fields");
		assert_eq!(request.path, "datasets/2/fields");
		assert!(request.headers.get(USER_AGENT).is_none());
	}
}
