//! Report and dataset payloads.

// self
use crate::{
	_prelude::*,
	model::{Meta, is_zero},
};

/// Report resource; zero/empty fields are left out of request bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
	/// Response metadata.
	#[serde(rename = "_meta", skip_serializing)]
	pub meta: Meta,
	/// Report id.
	#[serde(skip_serializing_if = "is_zero")]
	pub id: i64,
	/// Report name.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub name: String,
	/// Report description.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	/// Report language (for example `en_US`).
	#[serde(skip_serializing_if = "String::is_empty")]
	pub language: String,
	/// Creation date.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub created: String,
	/// Datasets belonging to the report.
	#[serde(alias = "dataSets", skip_serializing_if = "Vec::is_empty")]
	pub datasets: Vec<Dataset>,
}

/// Dataset resource; zero/empty fields are left out of request bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
	/// Response metadata.
	#[serde(rename = "_meta", skip_serializing)]
	pub meta: Meta,
	/// Dataset id.
	#[serde(skip_serializing_if = "is_zero")]
	pub id: i64,
	/// Dataset name.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub name: String,
	/// Owning report id.
	#[serde(skip_serializing_if = "is_zero")]
	pub report_id: i64,
	/// Dataset description.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	/// Source of the data (for example `form`).
	#[serde(skip_serializing_if = "String::is_empty")]
	pub data_source: String,
}
