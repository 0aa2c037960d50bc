//! Account payload.

// self
use crate::{
	_prelude::*,
	model::{Meta, Report},
};

/// Account tied to the public key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Account {
	/// Response metadata.
	#[serde(rename = "_meta")]
	pub meta: Meta,
	/// Account name.
	pub name: String,
	/// Subscription package.
	pub package: String,
	/// Subscription end date.
	#[serde(alias = "endDate")]
	pub end_date: String,
	/// Number of users.
	pub number_users: i64,
	/// Number of charts.
	pub number_charts: i64,
	/// Number of forms.
	pub number_forms: i64,
	/// Number of reports.
	pub number_reports: i64,
	/// Reports owned by the account.
	pub reports: Vec<Report>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn account_decodes_nested_reports() {
		let account: Account = serde_json::from_str(
			r#"{
				"_meta": {"code": 200, "count": 1, "hasMore": false, "message": "OK", "next": false, "previous": false, "total": 1},
				"name": "account name",
				"package": "package",
				"endDate": "2019-12-31 23:00:00",
				"number_users": 205,
				"number_charts": 12,
				"number_forms": 50,
				"number_reports": 26,
				"reports": [{
					"id": 1,
					"name": "report",
					"description": "report description",
					"language": "en_US",
					"created": "2019-05-02",
					"datasets": [{"id": 1, "name": "dataset name", "report_id": 1, "description": "dataset description", "data_source": "form"}]
				}]
			}"#,
		)
		.expect("Account should decode.");

		assert_eq!(account.meta.code, 200);
		assert_eq!(account.end_date, "2019-12-31 23:00:00");
		assert_eq!(account.number_users, 205);
		assert_eq!(account.reports.len(), 1);
		assert_eq!(account.reports[0].datasets[0].data_source, "form");
	}
}
