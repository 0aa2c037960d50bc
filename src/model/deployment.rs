//! Deployment payloads.

// self
use crate::{
	_prelude::*,
	collection::{IndexedCollection, Keyed},
	model::is_zero,
};

/// Deployment (installable feedback form code).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
	/// Deployment id.
	#[serde(skip_serializing_if = "is_zero")]
	pub id: i64,
	/// Deployment key.
	pub key: String,
	/// Deployment name.
	pub name: String,
}
impl Keyed for Deployment {
	type Key = str;

	fn sort_key(&self) -> &str {
		&self.key
	}
}

/// Deployments, decoded from the index-keyed wire object and sorted by key.
pub type Deployments = IndexedCollection<Deployment>;
