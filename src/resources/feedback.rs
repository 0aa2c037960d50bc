// self
use crate::{
	_prelude::*,
	client::Client,
	model::Feedback,
	obs::Endpoint,
	query::{self, FilterCollection, PaginationOptions},
	transport::ApiHttpClient,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns a feedback page for the dataset with `id`.
	///
	/// Pagination is applied to the query first, then filters; absent or empty options append
	/// nothing.
	pub async fn dataset_feedback(
		&self,
		id: i64,
		pagination: Option<&PaginationOptions>,
		filters: Option<&FilterCollection>,
	) -> Result<Feedback> {
		let path = query::with_query(&format!("datasets/{id}/feedback"), pagination, filters);

		self.feedback("dataset_feedback", path).await
	}

	/// Returns a feedback page for the report with `id`; see [`Client::dataset_feedback`].
	pub async fn report_feedback(
		&self,
		id: i64,
		pagination: Option<&PaginationOptions>,
		filters: Option<&FilterCollection>,
	) -> Result<Feedback> {
		let path = query::with_query(&format!("reports/{id}/feedback"), pagination, filters);

		self.feedback("report_feedback", path).await
	}

	async fn feedback(&self, stage: &'static str, path: String) -> Result<Feedback> {
		self.dispatch(Endpoint::Feedback, stage, |client| client.new_request(Method::GET, &path))
			.await
			.map(|response| response.into_data())
	}
}
