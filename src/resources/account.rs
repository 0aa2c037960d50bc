// self
use crate::{_prelude::*, client::Client, model::Account, obs::Endpoint, transport::ApiHttpClient};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the account the keys belong to, including its reports.
	pub async fn account(&self) -> Result<Account> {
		self.dispatch(Endpoint::Account, "account", |client| {
			client.new_request(Method::GET, "account")
		})
		.await
		.map(|response| response.into_data())
	}
}
