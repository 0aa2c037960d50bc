//! Client-level error types shared across request building, transport, and classification.

// self
use crate::{
	_prelude::*,
	auth::CredentialError,
	response::{ErrorCode, ErrorPayload},
};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised before any network I/O.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Caller cancelled the request before or while it was in flight.
	#[error("Request was cancelled.")]
	Cancelled,
	/// A signed request was built before any session token was fetched.
	#[error("No session token is available; fetch a token first.")]
	NoToken,
	/// Service rejected the session token or signature.
	#[error("{0}")]
	Authentication(ApiError),
	/// Unexpected failure on the service side.
	#[error("Unexpected server side error; try the request again.")]
	Server(ApiError),
	/// Any other non-2xx response, surfaced with the full payload for inspection.
	#[error("{0}")]
	Api(ApiError),
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	Encode {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Successful response body could not be decoded into the target type.
	#[error("Response body returned with HTTP {status} could not be decoded.")]
	Decode {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Resource failed local validation; no request was built.
	#[error("Resource is invalid: {reason}.")]
	InvalidResource {
		/// Validation failure description.
		reason: &'static str,
	},
}
impl Error {
	/// Returns the API error context for classified service errors.
	pub fn api_error(&self) -> Option<&ApiError> {
		match self {
			Self::Authentication(e) | Self::Server(e) | Self::Api(e) => Some(e),
			_ => None,
		}
	}

	/// Returns the typed service error code, when the error came from the service and the code
	/// is known.
	pub fn error_code(&self) -> Option<ErrorCode> {
		self.api_error().and_then(ApiError::code)
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL path does not end with `/`, so relative paths would not resolve beneath it.
	#[error("Base URL must have a trailing slash, but `{url}` does not.")]
	BaseUrlWithoutTrailingSlash {
		/// Offending base URL.
		url: String,
	},
	/// Request path cannot be resolved against the base URL.
	#[error("Request path `{path}` cannot be resolved against the base URL.")]
	InvalidPath {
		/// Relative path supplied by the caller.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A header value contains characters that are not allowed on the wire.
	#[error("Header value is invalid.")]
	InvalidHeader(#[from] http::header::InvalidHeaderValue),
	/// Credential provider could not supply keys.
	#[error("Credentials could not be read.")]
	Credentials(#[from] CredentialError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Mopinion API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Mopinion API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Non-2xx response context: the request that failed plus the decoded error payload.
#[derive(Clone, Debug, ThisError)]
#[error(
	"method:{method} url:{url}: http status code:{http_status} error status:{} error code:{} title:{}",
	.payload.status,
	.payload.error_code,
	.payload.title
)]
pub struct ApiError {
	/// Request method.
	pub method: Method,
	/// Fully resolved request URL.
	pub url: Url,
	/// HTTP status code returned by the service.
	pub http_status: u16,
	/// Error payload decoded from the response body (zero values when undecodable).
	pub payload: ErrorPayload,
}
impl ApiError {
	/// Returns the typed error code, if the numeric code is a known one.
	pub fn code(&self) -> Option<ErrorCode> {
		ErrorCode::from_code(self.payload.error_code)
	}

	/// Returns the payload title.
	pub fn title(&self) -> &str {
		&self.payload.title
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn api_error(error_code: i64) -> ApiError {
		ApiError {
			method: Method::GET,
			url: Url::parse("https://api.mopinion.com/account")
				.expect("Fixture URL should parse successfully."),
			http_status: 401,
			payload: ErrorPayload {
				status: 401,
				error_code,
				title: "The credentials you provided are not valid".into(),
				kind: "https://developer.mopinion.com/api/error-codes#invalid-credentials".into(),
			},
		}
	}

	#[test]
	fn api_error_display_carries_request_context() {
		let err = api_error(18);

		assert_eq!(
			err.to_string(),
			"method:GET url:https://api.mopinion.com/account: http status code:401 error status:401 \
			 error code:18 title:The credentials you provided are not valid",
		);
	}

	#[test]
	fn server_error_uses_fixed_message() {
		let err = Error::Server(api_error(2));

		assert_eq!(err.to_string(), "Unexpected server side error; try the request again.");
		assert_eq!(err.error_code(), Some(ErrorCode::Server));
	}

	#[test]
	fn local_errors_have_no_api_context() {
		assert!(Error::NoToken.api_error().is_none());
		assert!(Error::Cancelled.error_code().is_none());
		assert_eq!(Error::Api(api_error(99)).error_code(), None);
	}
}
