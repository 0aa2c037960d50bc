//! Field definition and feedback payloads.

// self
use crate::{_prelude::*, model::Meta};

/// Field definitions of a dataset or report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fields {
	/// Response metadata.
	#[serde(rename = "_meta")]
	pub meta: Meta,
	/// Field definitions.
	pub data: Vec<FieldData>,
}

/// A single field definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldData {
	/// Answer scale options, when the field has any.
	pub answer_options: Option<AnswerOptions>,
	/// Allowed answer values.
	pub answer_values: Vec<String>,
	/// Owning dataset id.
	#[serde(alias = "datasetId")]
	pub dataset_id: i64,
	/// Field key.
	pub key: String,
	/// Field label.
	pub label: String,
	/// Owning report id.
	pub report_id: i64,
	/// Short label.
	pub short_label: String,
	/// Field type (for example `thumbs`).
	#[serde(rename = "type")]
	pub kind: String,
}

/// Scale description for rating-style fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnswerOptions {
	/// Scale size.
	pub scale: i64,
	/// Whether the scale starts at zero.
	pub start_at_zero: bool,
	/// Scale type.
	#[serde(rename = "type")]
	pub kind: String,
}

/// Feedback page for a dataset or report.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feedback {
	/// Response metadata.
	#[serde(rename = "_meta")]
	pub meta: Meta,
	/// Feedback items.
	pub data: Vec<FeedbackData>,
}

/// A single feedback item.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackData {
	/// Creation date.
	pub created: String,
	/// Owning dataset id.
	pub dataset_id: i64,
	/// Feedback id.
	pub id: i64,
	/// Owning report id.
	pub report_id: i64,
	/// Tags assigned to the item.
	pub tags: Vec<String>,
	/// Answered fields.
	pub fields: Vec<FeedbackField>,
}

/// A single answered field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackField {
	/// Field key.
	pub key: String,
	/// Field label.
	pub label: String,
	/// Answer value; its JSON type depends on the field type.
	pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn feedback_values_keep_their_json_type() {
		let feedback: Feedback = serde_json::from_str(
			r#"{
				"data": [{
					"id": 1740961,
					"created": "2019-05-02",
					"report_id": 1,
					"dataset_id": 2,
					"fields": [
						{"key": "123.INPUT.x3588gw1", "label": "label value", "value": "field value"},
						{"key": "125.NPS.k2", "label": "nps", "value": 9}
					],
					"tags": []
				}],
				"_meta": {"code": 200, "message": "OK", "has_more": false, "previous": false, "next": false, "count": 1, "total": 1}
			}"#,
		)
		.expect("Feedback should decode.");
		let item = &feedback.data[0];

		assert_eq!(item.id, 1_740_961);
		assert_eq!(item.fields[0].value, serde_json::json!("field value"));
		assert_eq!(item.fields[1].value, serde_json::json!(9));
		assert_eq!(feedback.meta.total, 1);
	}

	#[test]
	fn fields_decode_optional_answer_options() {
		let fields: Fields = serde_json::from_str(
			r#"{"data":[
				{"report_id":1,"dataset_id":2,"label":"label","short_label":"short-label","key":"A-KEY","type":"thumbs"},
				{"key":"B","type":"rating","answer_options":{"scale":5,"start_at_zero":false,"type":"stars"},"answer_values":["1","2"]}
			]}"#,
		)
		.expect("Fields should decode.");

		assert_eq!(fields.data[0].kind, "thumbs");
		assert_eq!(fields.data[0].dataset_id, 2);
		assert!(fields.data[0].answer_options.is_none());
		assert_eq!(fields.data[1].answer_options.as_ref().map(|o| o.scale), Some(5));
		assert_eq!(fields.data[1].answer_values, ["1", "2"]);
	}
}
