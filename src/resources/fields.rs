// self
use crate::{_prelude::*, client::Client, model::Fields, obs::Endpoint, transport::ApiHttpClient};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the field definitions of the dataset with `id`.
	pub async fn dataset_fields(&self, id: i64) -> Result<Fields> {
		self.fields("dataset_fields", format!("datasets/{id}/fields")).await
	}

	/// Returns the field definitions of the report with `id`.
	pub async fn report_fields(&self, id: i64) -> Result<Fields> {
		self.fields("report_fields", format!("reports/{id}/fields")).await
	}

	async fn fields(&self, stage: &'static str, path: String) -> Result<Fields> {
		self.dispatch(Endpoint::Fields, stage, |client| client.new_request(Method::GET, &path))
			.await
			.map(|response| response.into_data())
	}
}
