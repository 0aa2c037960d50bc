// self
use crate::{
	_prelude::*,
	auth::{CredentialProvider, TokenStore},
	client::{Client, DEFAULT_BASE_URL},
	error::ConfigError,
	request::DEFAULT_USER_AGENT,
	transport::ApiHttpClient,
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestHttpClient;

/// Builder for [`Client`] values.
///
/// Every check runs in `build`, before any network I/O.
#[derive(Debug)]
pub struct ClientBuilder {
	/// Base URL relative request paths resolve beneath; its path must end with `/`.
	pub base_url: String,
	/// `User-Agent` header value; empty disables the header.
	pub user_agent: String,
	/// Cancellation signal observed by resource calls.
	pub cancellation: CancellationToken,
}
impl ClientBuilder {
	/// Creates a builder seeded with the production base URL and default user agent.
	pub fn new() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			user_agent: DEFAULT_USER_AGENT.into(),
			cancellation: CancellationToken::new(),
		}
	}

	/// Overrides the base URL.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Overrides the `User-Agent` header value.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Sets the cancellation signal observed by resource calls.
	pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
		self.cancellation = token;

		self
	}

	/// Consumes the builder and creates a client on top of the caller's transport.
	pub fn build_with_http_client<C>(
		self,
		provider: &dyn CredentialProvider,
		http_client: impl Into<Arc<C>>,
	) -> Result<Client<C>>
	where
		C: ?Sized + ApiHttpClient,
	{
		let base_url =
			Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		if !base_url.path().ends_with('/') {
			return Err(ConfigError::BaseUrlWithoutTrailingSlash { url: self.base_url }.into());
		}

		HeaderValue::from_str(&self.user_agent).map_err(ConfigError::from)?;

		let credentials = provider.keys().map_err(ConfigError::from)?;

		Ok(Client {
			http_client: http_client.into(),
			base_url,
			user_agent: self.user_agent,
			credentials,
			token: TokenStore::default(),
			cancellation: self.cancellation,
		})
	}

	/// Consumes the builder and creates a client with a fresh reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build(self, provider: &dyn CredentialProvider) -> Result<Client<ReqwestHttpClient>> {
		let http_client = ReqwestClient::builder().build().map_err(ConfigError::from)?;

		self.build_with_http_client(provider, ReqwestHttpClient::with_client(http_client))
	}
}
impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::{BasicCredentialProvider, CredentialError},
		request::OutboundRequest,
		transport::{RawResponse, TransportFuture},
	};

	#[derive(Debug, ThisError)]
	#[error("Unreachable.")]
	struct Unreachable;

	struct NoopTransport;
	impl ApiHttpClient for NoopTransport {
		type TransportError = Unreachable;

		fn send(&self, _: OutboundRequest) -> TransportFuture<'_, Self::TransportError> {
			Box::pin(async { Err(Unreachable) })
		}
	}

	fn provider() -> BasicCredentialProvider {
		BasicCredentialProvider::new("publickey", "privatekey")
	}

	fn build(builder: ClientBuilder) -> Result<Client<NoopTransport>> {
		builder.build_with_http_client(&provider(), NoopTransport)
	}

	#[test]
	fn defaults_target_production() {
		let client = build(ClientBuilder::new()).expect("Default builder should succeed.");

		assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
		assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
		assert_eq!(client.public_key(), "publickey");
		assert!(client.token().is_none());
	}

	#[test]
	fn invalid_base_url_is_rejected() {
		let err = build(ClientBuilder::new().base_url("not a url"))
			.expect_err("Unparsable base URLs must fail.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidBaseUrl { .. })));
	}

	#[test]
	fn base_url_requires_trailing_slash() {
		let err = build(ClientBuilder::new().base_url("https://api.mopinion.com/v1"))
			.expect_err("Base URLs without a trailing slash must fail.");

		assert!(matches!(err, Error::Config(ConfigError::BaseUrlWithoutTrailingSlash { .. })));
	}

	#[test]
	fn empty_keys_fail_before_any_request() {
		let err = ClientBuilder::new()
			.build_with_http_client(&BasicCredentialProvider::new("", "privatekey"), NoopTransport)
			.expect_err("Empty public keys must fail.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::Credentials(CredentialError::EmptyKey { .. }))
		));
	}

	#[test]
	fn debug_output_hides_private_key() {
		let client = build(ClientBuilder::new()).expect("Default builder should succeed.");
		let rendered = format!("{client:?}");

		assert!(rendered.contains("publickey"));
		assert!(!rendered.contains("privatekey"));
	}
}
