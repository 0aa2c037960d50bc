//! Typed payloads exchanged with the Mopinion API.
//!
//! [`Meta`] accompanies most responses; it is decoded when present and never serialized into
//! request bodies.

pub mod account;
pub mod deployment;
pub mod feedback;
pub mod report;

pub use account::*;
pub use deployment::*;
pub use feedback::*;
pub use report::*;

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Pagination/result envelope carried under `_meta`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
	/// Status code echoed by the service.
	pub code: i64,
	/// Number of items in this page.
	pub count: i64,
	/// Whether more pages exist.
	#[serde(alias = "hasMore")]
	pub has_more: bool,
	/// Status message.
	pub message: String,
	/// Follow-up page link.
	pub next: PageLink,
	/// Preceding page link.
	pub previous: PageLink,
	/// Total number of items across pages.
	pub total: i64,
}

/// A page link: either a boolean flag or a follow-up URL.
///
/// The service sends `false` when there is no such page; `null` decodes the same way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageLink {
	/// Boolean flag.
	Flag(bool),
	/// URL of the page.
	Url(String),
}
impl PageLink {
	/// Returns the URL, if this link points somewhere.
	pub fn url(&self) -> Option<&str> {
		match self {
			Self::Url(url) => Some(url),
			Self::Flag(_) => None,
		}
	}
}
impl Default for PageLink {
	fn default() -> Self {
		Self::Flag(false)
	}
}
impl<'de> Deserialize<'de> for PageLink {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			Flag(bool),
			Url(String),
		}

		Ok(match Option::<Wire>::deserialize(deserializer)? {
			Some(Wire::Flag(flag)) => Self::Flag(flag),
			Some(Wire::Url(url)) => Self::Url(url),
			None => Self::default(),
		})
	}
}

/// Outcome of a delete call (optionally a dry run).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
	/// Whether the deletion was executed (false for dry runs).
	pub executed: bool,
	/// Resources that were (or would be) affected, keyed by resource type.
	pub resources_affected: BTreeMap<String, serde_json::Value>,
}

pub(crate) fn is_zero(value: &i64) -> bool {
	*value == 0
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn page_links_decode_flag_or_url() {
		let meta: Meta = serde_json::from_str(
			r#"{"code":200,"count":10,"hasMore":true,"message":"OK","next":"https://api.mopinion.com/reports/1/feedback?page=2","previous":false,"total":25}"#,
		)
		.expect("Meta should decode.");

		assert!(meta.has_more);
		assert_eq!(meta.next.url(), Some("https://api.mopinion.com/reports/1/feedback?page=2"));
		assert_eq!(meta.previous, PageLink::Flag(false));
		assert_eq!(meta.previous.url(), None);
		assert_eq!(meta.total, 25);
	}

	#[test]
	fn null_page_links_decode_as_absent() {
		let meta: Meta = serde_json::from_str(r#"{"code":200,"next":null,"previous":true}"#)
			.expect("Meta with a null link should decode.");

		assert_eq!(meta.next, PageLink::Flag(false));
		assert_eq!(meta.previous, PageLink::Flag(true));
		assert!(serde_json::from_str::<Meta>(r#"{"next":42}"#).is_err());
	}

	#[test]
	fn delete_response_decodes_affected_resources() {
		let response: DeleteResponse = serde_json::from_str(
			r#"{"executed":false,"resources_affected":{"datasets":[1,2]}}"#,
		)
		.expect("Delete response should decode.");

		assert!(!response.executed);
		assert_eq!(response.resources_affected["datasets"], serde_json::json!([1, 2]));
	}
}
