// self
use crate::{
	_prelude::*,
	client::Client,
	model::{DeleteResponse, Report},
	obs::Endpoint,
	resources,
	transport::ApiHttpClient,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the report with `id`.
	pub async fn report(&self, id: i64) -> Result<Report> {
		self.dispatch(Endpoint::Reports, "report", |client| {
			client.new_request(Method::GET, &format!("reports/{id}"))
		})
		.await
		.map(|response| response.into_data())
	}

	/// Creates a report; the name is required.
	pub async fn add_report(&self, report: &Report) -> Result<Report> {
		if report.name.is_empty() {
			return Err(Error::InvalidResource { reason: "report name cannot be empty" });
		}

		self.dispatch(Endpoint::Reports, "add_report", |client| {
			client.new_json_request(Method::POST, "reports", report)
		})
		.await
		.map(|response| response.into_data())
	}

	/// Updates the report identified by `report.id`.
	pub async fn update_report(&self, report: &Report) -> Result<Report> {
		self.dispatch(Endpoint::Reports, "update_report", |client| {
			client.new_json_request(Method::PUT, &format!("reports/{}", report.id), report)
		})
		.await
		.map(|response| response.into_data())
	}

	/// Deletes the report with `id`, optionally as a dry run.
	pub async fn delete_report(&self, id: i64, dry_run: bool) -> Result<DeleteResponse> {
		let path = resources::delete_path(format!("reports/{id}"), dry_run);

		self.dispatch(Endpoint::Reports, "delete_report", |client| {
			client.new_request(Method::DELETE, &path)
		})
		.await
		.map(|response| response.into_data())
	}
}
