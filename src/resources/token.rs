// crates.io
use http::header::AUTHORIZATION;
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	auth::SessionToken,
	client::Client,
	error::ConfigError,
	obs::Endpoint,
	transport::ApiHttpClient,
};

#[derive(Default, Deserialize)]
#[serde(default)]
struct TokenEnvelope {
	token: String,
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Exchanges the client's keys for a session token and stores it for signing.
	///
	/// A failed exchange leaves the previous token, if any, in place.
	pub async fn fetch_token(&self) -> Result<SessionToken> {
		let response = self
			.dispatch::<TokenEnvelope, _>(Endpoint::Token, "fetch_token", |client| {
				let mut request = client.new_request(Method::GET, "token")?;
				let mut value = HeaderValue::from_str(&client.credentials().basic_authorization())
					.map_err(ConfigError::from)?;

				value.set_sensitive(true);
				request.headers.insert(AUTHORIZATION, value);

				Ok(request)
			})
			.await?;
		let token = SessionToken::new(response.into_data().token);

		self.set_token(token.clone());

		Ok(token)
	}

	/// Probes the service; needs no token.
	pub async fn ping(&self) -> Result<()> {
		self.dispatch::<IgnoredAny, _>(Endpoint::Ping, "ping", |client| {
			client.new_request(Method::GET, "ping")
		})
		.await?;

		Ok(())
	}
}
