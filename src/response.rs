//! Response handling: error classification for non-2xx statuses and typed decoding for 2xx.
//!
//! Only two service error codes get dedicated error kinds ([`Error::Authentication`] for
//! `401` + [`ErrorCode::NotAuthenticated`], and [`Error::Server`] for [`ErrorCode::Server`]).
//! Every other failure surfaces as [`Error::Api`] with the full payload so callers can inspect
//! [`ApiError::code`].

// self
use crate::{_prelude::*, error::ApiError};

/// Numeric error codes defined by the Mopinion API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
	/// Unknown error.
	Unknown,
	/// Unexpected server side error.
	Server,
	/// Public key does not exist.
	PublicKeyNotFound,
	/// Signature token is invalid.
	InvalidToken,
	/// Request body is not valid JSON.
	InvalidJson,
	/// Route does not exist.
	RouteNotFound,
	/// Report id missing from the request.
	ReportIdNotSet,
	/// Report does not exist.
	ReportNotFound,
	/// Resource could not be updated.
	FailedToUpdateResource,
	/// Caller lacks access to the resource.
	NotAuthorized,
	/// Account report quota is exhausted.
	MaxReportsReached,
	/// Request is malformed.
	InvalidRequest,
	/// Dataset id missing from the request.
	DatasetIdNotSet,
	/// Dataset does not exist.
	DatasetNotFound,
	/// Account dataset quota is exhausted.
	MaxDatasetsReached,
	/// Resource could not be created.
	FailedToCreateResource,
	/// Deployment code missing from the request.
	NoDeploymentCode,
	/// Credentials or signature were rejected.
	NotAuthenticated,
}
impl ErrorCode {
	/// Maps the wire code onto a known variant.
	pub const fn from_code(code: i64) -> Option<Self> {
		Some(match code {
			1 => Self::Unknown,
			2 => Self::Server,
			3 => Self::PublicKeyNotFound,
			4 => Self::InvalidToken,
			5 => Self::InvalidJson,
			6 => Self::RouteNotFound,
			7 => Self::ReportIdNotSet,
			8 => Self::ReportNotFound,
			9 => Self::FailedToUpdateResource,
			10 => Self::NotAuthorized,
			11 => Self::MaxReportsReached,
			12 => Self::InvalidRequest,
			13 => Self::DatasetIdNotSet,
			14 => Self::DatasetNotFound,
			15 => Self::MaxDatasetsReached,
			16 => Self::FailedToCreateResource,
			17 => Self::NoDeploymentCode,
			18 => Self::NotAuthenticated,
			_ => return None,
		})
	}

	/// Returns the wire code.
	pub const fn code(self) -> i64 {
		match self {
			Self::Unknown => 1,
			Self::Server => 2,
			Self::PublicKeyNotFound => 3,
			Self::InvalidToken => 4,
			Self::InvalidJson => 5,
			Self::RouteNotFound => 6,
			Self::ReportIdNotSet => 7,
			Self::ReportNotFound => 8,
			Self::FailedToUpdateResource => 9,
			Self::NotAuthorized => 10,
			Self::MaxReportsReached => 11,
			Self::InvalidRequest => 12,
			Self::DatasetIdNotSet => 13,
			Self::DatasetNotFound => 14,
			Self::MaxDatasetsReached => 15,
			Self::FailedToCreateResource => 16,
			Self::NoDeploymentCode => 17,
			Self::NotAuthenticated => 18,
		}
	}
}

/// Structured error body returned with non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorPayload {
	/// Status echoed by the service.
	pub status: i64,
	/// Service error code; see [`ErrorCode`].
	pub error_code: i64,
	/// Human-readable title.
	pub title: String,
	/// Documentation URL describing the error.
	#[serde(rename = "type")]
	pub kind: String,
}

/// Request and status details for a completed exchange.
#[derive(Clone, Debug)]
pub struct ResponseMetadata {
	/// Request method.
	pub method: Method,
	/// Fully resolved request URL.
	pub url: Url,
	/// HTTP status returned by the service.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
}

/// Decoded body plus the metadata of the exchange that produced it.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
	/// Decoded response body.
	pub data: T,
	/// Exchange metadata.
	pub metadata: ResponseMetadata,
}
impl<T> ApiResponse<T> {
	/// Discards the metadata.
	pub fn into_data(self) -> T {
		self.data
	}
}

/// Classifies a response, returning `None` for 2xx statuses.
///
/// Undecodable error bodies are tolerated: the payload falls back to zero values and
/// classification proceeds on the status alone.
pub fn classify(metadata: &ResponseMetadata, body: &[u8]) -> Option<Error> {
	if metadata.status.is_success() {
		return None;
	}

	let payload = serde_json::from_slice::<ErrorPayload>(body).unwrap_or_default();
	let code = ErrorCode::from_code(payload.error_code);
	let error = ApiError {
		method: metadata.method.clone(),
		url: metadata.url.clone(),
		http_status: metadata.status.as_u16(),
		payload,
	};

	Some(match code {
		Some(ErrorCode::NotAuthenticated) if metadata.status == StatusCode::UNAUTHORIZED =>
			Error::Authentication(error),
		Some(ErrorCode::Server) => Error::Server(error),
		_ => Error::Api(error),
	})
}

/// Decodes a 2xx body into `T`; an empty or whitespace-only body yields `T::default()`.
pub fn decode_body<T>(status: StatusCode, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned + Default,
{
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(T::default());
	}

	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { source, status: status.as_u16() })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn metadata(status: u16) -> ResponseMetadata {
		ResponseMetadata {
			method: Method::GET,
			url: Url::parse("https://api.mopinion.com/account")
				.expect("Fixture URL should parse successfully."),
			status: StatusCode::from_u16(status).expect("Fixture status should be valid."),
			headers: HeaderMap::new(),
		}
	}

	fn body(status: i64, error_code: i64) -> String {
		format!(
			"{{\"status\":{status},\"error_code\":{error_code},\"title\":\"Some title\",\"type\":\"https://developer.mopinion.com/api/error-codes\"}}"
		)
	}

	#[test]
	fn success_statuses_are_not_errors() {
		for status in [200, 201, 202, 204, 299] {
			assert!(classify(&metadata(status), body(500, 2).as_bytes()).is_none());
		}
	}

	#[test]
	fn unauthenticated_401_is_authentication_error() {
		let err = classify(&metadata(401), body(401, 18).as_bytes())
			.expect("401 responses should classify as errors.");

		assert!(matches!(err, Error::Authentication(ref e) if e.http_status == 401));
		assert_eq!(err.error_code(), Some(ErrorCode::NotAuthenticated));
	}

	#[test]
	fn not_authenticated_code_without_401_is_generic() {
		let err = classify(&metadata(403), body(403, 18).as_bytes())
			.expect("403 responses should classify as errors.");

		assert!(matches!(err, Error::Api(_)));
	}

	#[test]
	fn server_code_yields_fixed_message() {
		let err = classify(&metadata(500), body(500, 2).as_bytes())
			.expect("500 responses should classify as errors.");

		assert!(matches!(err, Error::Server(_)));
		assert_eq!(err.to_string(), "Unexpected server side error; try the request again.");
	}

	#[test]
	fn other_codes_carry_full_context() {
		let err = classify(&metadata(404), body(404, 8).as_bytes())
			.expect("404 responses should classify as errors.");
		let Error::Api(api) = &err else { panic!("Unexpected error variant: {err:?}.") };

		assert_eq!(api.http_status, 404);
		assert_eq!(api.payload.status, 404);
		assert_eq!(api.payload.title, "Some title");
		assert_eq!(api.payload.kind, "https://developer.mopinion.com/api/error-codes");
		assert_eq!(api.code(), Some(ErrorCode::ReportNotFound));
	}

	#[test]
	fn undecodable_error_body_still_classifies() {
		let err = classify(&metadata(502), b"<html>Bad Gateway</html>")
			.expect("502 responses should classify as errors.");
		let Error::Api(api) = &err else { panic!("Unexpected error variant: {err:?}.") };

		assert_eq!(api.http_status, 502);
		assert_eq!(api.payload, ErrorPayload::default());
	}

	#[test]
	fn error_codes_round_trip_through_wire_values() {
		for code in 1..=18 {
			let known = ErrorCode::from_code(code).expect("Codes 1 through 18 should be known.");

			assert_eq!(known.code(), code);
		}

		assert_eq!(ErrorCode::from_code(0), None);
		assert_eq!(ErrorCode::from_code(19), None);
	}

	#[test]
	fn empty_body_decodes_to_default() {
		let value: BTreeMap<String, i64> =
			decode_body(StatusCode::ACCEPTED, b"").expect("Empty body should decode.");

		assert!(value.is_empty());

		let value: BTreeMap<String, i64> =
			decode_body(StatusCode::CREATED, b" \n").expect("Blank body should decode.");

		assert!(value.is_empty());
	}

	#[test]
	fn decode_failure_reports_path_and_status() {
		#[derive(Debug, Default, Deserialize)]
		struct Target {
			#[allow(dead_code)]
			count: i64,
		}

		let err = decode_body::<Target>(StatusCode::OK, br#"{"count":"many"}"#)
			.expect_err("Mismatched types should fail to decode.");

		match err {
			Error::Decode { source, status } => {
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "count");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
