//! The Mopinion API client: request construction, execution, and token state.

mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{Credentials, SessionToken, TokenStore},
	error::TransportError,
	obs::{CallObserver, Endpoint},
	request::{OutboundRequest, RequestBuilder},
	response::{self, ApiResponse, ResponseMetadata},
	transport::ApiHttpClient,
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestHttpClient;

/// Default API origin; relative paths resolve beneath it.
pub const DEFAULT_BASE_URL: &str = "https://api.mopinion.com/";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type DefaultClient = Client<ReqwestHttpClient>;

/// Authenticated client for a single Mopinion account.
///
/// Each call performs exactly one round trip and never retries. Clones share the transport and
/// the [`TokenStore`]; see [`TokenStore`] for how token replacement interacts with concurrent
/// requests.
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	base_url: Url,
	user_agent: String,
	credentials: Credentials,
	token: TokenStore,
	cancellation: CancellationToken,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Returns the `User-Agent` header value (empty when disabled).
	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}

	/// Returns the public key the client signs as.
	pub fn public_key(&self) -> &str {
		self.credentials.public_key()
	}

	pub(crate) fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Returns the shared token store.
	pub fn token_store(&self) -> &TokenStore {
		&self.token
	}

	/// Returns a snapshot of the current session token.
	pub fn token(&self) -> Option<SessionToken> {
		self.token.current()
	}

	/// Installs a token obtained elsewhere.
	pub fn set_token(&self, token: SessionToken) {
		self.token.replace(token);
	}

	/// Drops the current token.
	pub fn clear_token(&self) {
		self.token.clear();
	}

	/// Returns the cancellation token observed by resource calls.
	pub fn cancellation_token(&self) -> &CancellationToken {
		&self.cancellation
	}

	/// Returns a client sharing this one's transport and token store whose resource calls
	/// observe `token`.
	pub fn with_cancellation(&self, token: CancellationToken) -> Self {
		Self { cancellation: token, ..self.clone() }
	}

	/// Returns a request builder bound to a snapshot of the current token.
	pub fn request_builder(&self) -> RequestBuilder<'_> {
		RequestBuilder::new(
			&self.base_url,
			&self.user_agent,
			self.credentials.public_key(),
			self.token.current(),
		)
	}

	/// Builds a request without a body.
	pub fn new_request(&self, method: Method, path: &str) -> Result<OutboundRequest> {
		self.request_builder().build(method, path)
	}

	/// Builds a request carrying `body` as JSON.
	pub fn new_json_request<B>(
		&self,
		method: Method,
		path: &str,
		body: &B,
	) -> Result<OutboundRequest>
	where
		B: ?Sized + Serialize,
	{
		self.request_builder().build_json(method, path, body)
	}

	/// Sends `request` and decodes a 2xx body into `T`.
	///
	/// Cancellation wins over everything else: a token cancelled before or during the exchange
	/// yields [`Error::Cancelled`], even when the transport also failed. Non-2xx responses are
	/// classified and never decoded into `T`. An empty 2xx body yields `T::default()`.
	pub async fn execute<T>(
		&self,
		request: OutboundRequest,
		cancel: &CancellationToken,
	) -> Result<ApiResponse<T>>
	where
		T: DeserializeOwned + Default,
	{
		let method = request.method.clone();
		let url = request.url.clone();
		let outcome = tokio::select! {
			biased;
			_ = cancel.cancelled() => return Err(Error::Cancelled),
			outcome = self.http_client.send(request) => outcome,
		};
		let raw = match outcome {
			Ok(raw) => raw,
			Err(_) if cancel.is_cancelled() => return Err(Error::Cancelled),
			Err(e) => return Err(TransportError::network(e).into()),
		};
		let metadata = ResponseMetadata { method, url, status: raw.status, headers: raw.headers };

		if let Some(e) = response::classify(&metadata, &raw.body) {
			return Err(e);
		}

		let data = response::decode_body(metadata.status, &raw.body)?;

		Ok(ApiResponse { data, metadata })
	}

	/// Builds and executes a resource call under an instrumented span.
	pub(crate) async fn dispatch<T, F>(
		&self,
		endpoint: Endpoint,
		stage: &'static str,
		build: F,
	) -> Result<ApiResponse<T>>
	where
		T: DeserializeOwned + Default,
		F: FnOnce(&Self) -> Result<OutboundRequest>,
	{
		CallObserver::start(endpoint, stage)
			.observe(async move {
				let request = build(self)?;

				self.execute(request, &self.cancellation).await
			})
			.await
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for the default base URL using a fresh reqwest transport.
	pub fn new(provider: &dyn crate::auth::CredentialProvider) -> Result<Self> {
		ClientBuilder::new().build(provider)
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			base_url: self.base_url.clone(),
			user_agent: self.user_agent.clone(),
			credentials: self.credentials.clone(),
			token: self.token.clone(),
			cancellation: self.cancellation.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("user_agent", &self.user_agent)
			.field("public_key", &self.credentials.public_key())
			.field("token_set", &self.token.current().is_some())
			.finish()
	}
}
