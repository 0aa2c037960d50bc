// self
use crate::{
	_prelude::*,
	client::Client,
	model::{DeleteResponse, Deployment, Deployments},
	obs::Endpoint,
	resources,
	transport::ApiHttpClient,
};

impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists deployments, sorted by key.
	pub async fn deployments(&self) -> Result<Deployments> {
		self.dispatch(Endpoint::Deployments, "deployments", |client| {
			client.new_request(Method::GET, "deployments")
		})
		.await
		.map(|response| response.into_data())
	}

	/// Creates a deployment; the name is required.
	///
	/// The service answers with the index-keyed deployment listing, returned here sorted by key.
	pub async fn add_deployment(&self, deployment: &Deployment) -> Result<Deployments> {
		if deployment.name.is_empty() {
			return Err(Error::InvalidResource { reason: "deployment name cannot be empty" });
		}

		self.dispatch(Endpoint::Deployments, "add_deployment", |client| {
			client.new_json_request(Method::POST, "deployments", deployment)
		})
		.await
		.map(|response| response.into_data())
	}

	/// Deletes the deployment identified by `key`; `dry_run` reports the affected resources
	/// without deleting anything.
	pub async fn delete_deployment(&self, key: &str, dry_run: bool) -> Result<DeleteResponse> {
		let path = resources::delete_path(format!("deployments/{key}"), dry_run);

		self.dispatch(Endpoint::Deployments, "delete_deployment", |client| {
			client.new_request(Method::DELETE, &path)
		})
		.await
		.map(|response| response.into_data())
	}
}
