// self
use crate::{
	_prelude::*,
	client::Client,
	model::{Dataset, DeleteResponse},
	obs::Endpoint,
	resources,
	transport::ApiHttpClient,
};

fn validate(dataset: &Dataset) -> Result<()> {
	if dataset.report_id <= 0 {
		return Err(Error::InvalidResource { reason: "dataset report id not set" });
	}
	if dataset.name.is_empty() {
		return Err(Error::InvalidResource { reason: "dataset name cannot be empty" });
	}

	Ok(())
}

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Returns the dataset with `id`.
	pub async fn dataset(&self, id: i64) -> Result<Dataset> {
		self.dispatch(Endpoint::Datasets, "dataset", |client| {
			client.new_request(Method::GET, &format!("datasets/{id}"))
		})
		.await
		.map(|response| response.into_data())
	}

	/// Creates a dataset under its report.
	pub async fn add_dataset(&self, dataset: &Dataset) -> Result<Dataset> {
		validate(dataset)?;

		self.dispatch(Endpoint::Datasets, "add_dataset", |client| {
			client.new_json_request(Method::POST, "datasets", dataset)
		})
		.await
		.map(|response| response.into_data())
	}

	/// Updates the dataset identified by `dataset.id`.
	pub async fn update_dataset(&self, dataset: &Dataset) -> Result<Dataset> {
		self.dispatch(Endpoint::Datasets, "update_dataset", |client| {
			client.new_json_request(Method::PUT, &format!("datasets/{}", dataset.id), dataset)
		})
		.await
		.map(|response| response.into_data())
	}

	/// Deletes the dataset with `id`, optionally as a dry run.
	pub async fn delete_dataset(&self, id: i64, dry_run: bool) -> Result<DeleteResponse> {
		let path = resources::delete_path(format!("datasets/{id}"), dry_run);

		self.dispatch(Endpoint::Datasets, "delete_dataset", |client| {
			client.new_request(Method::DELETE, &path)
		})
		.await
		.map(|response| response.into_data())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn datasets_need_report_and_name() {
		let missing_report = Dataset { name: "dataset".into(), ..Dataset::default() };
		let missing_name = Dataset { report_id: 1, ..Dataset::default() };
		let valid = Dataset { name: "dataset".into(), report_id: 1, ..Dataset::default() };

		assert!(matches!(
			validate(&missing_report),
			Err(Error::InvalidResource { reason: "dataset report id not set" })
		));
		assert!(matches!(
			validate(&missing_name),
			Err(Error::InvalidResource { reason: "dataset name cannot be empty" })
		));
		assert!(validate(&valid).is_ok());
	}
}
