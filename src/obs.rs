//! Call observation for resource requests.
//!
//! Every resource call runs under a [`CallObserver`], which ties the call's span and counters to
//! its result.
//!
//! # Feature Flags
//!
//! - `tracing`: each call runs inside an `info` span named `mopinion.request` with `endpoint` and
//!   `stage` fields. When the exchange produced an HTTP status, it is recorded as `http_status`.
//!   Failures emit a `warn` event carrying the error.
//! - `metrics`: increments `mopinion_request_total`, labeled by `endpoint` and `outcome`
//!   (`attempt`, `success`, `failure`).

// self
use crate::{_prelude::*, response::ApiResponse};

/// Resource families served by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Token exchange.
	Token,
	/// Liveness probe.
	Ping,
	/// Account lookup.
	Account,
	/// Deployment management.
	Deployments,
	/// Dataset management.
	Datasets,
	/// Report management.
	Reports,
	/// Field definitions.
	Fields,
	/// Feedback listing.
	Feedback,
}
impl Endpoint {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Token => "token",
			Endpoint::Ping => "ping",
			Endpoint::Account => "account",
			Endpoint::Deployments => "deployments",
			Endpoint::Datasets => "datasets",
			Endpoint::Reports => "reports",
			Endpoint::Fields => "fields",
			Endpoint::Feedback => "feedback",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Observes one resource call from start to result.
#[derive(Debug)]
pub struct CallObserver {
	endpoint: Endpoint,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallObserver {
	/// Opens the call: records the attempt and prepares its span.
	pub fn start(endpoint: Endpoint, stage: &'static str) -> Self {
		record_outcome(endpoint, RequestOutcome::Attempt);

		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"mopinion.request",
				endpoint = endpoint.as_str(),
				stage,
				http_status = tracing::field::Empty,
			);

			Self { endpoint, span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self { endpoint }
		}
	}

	/// Drives `call` inside the span and records its result.
	pub async fn observe<T, Fut>(self, call: Fut) -> Result<ApiResponse<T>>
	where
		Fut: Future<Output = Result<ApiResponse<T>>>,
	{
		#[cfg(feature = "tracing")]
		let result = {
			use tracing::Instrument;

			call.instrument(self.span.clone()).await
		};
		#[cfg(not(feature = "tracing"))]
		let result = call.await;

		self.finish(&result);

		result
	}

	fn finish<T>(&self, result: &Result<ApiResponse<T>>) {
		#[cfg(feature = "tracing")]
		{
			let status = match result {
				Ok(response) => Some(response.metadata.status.as_u16()),
				Err(e) => e.api_error().map(|api| api.http_status),
			};

			if let Some(status) = status {
				self.span.record("http_status", status);
			}
			if let Err(e) = result {
				self.span.in_scope(|| tracing::warn!(error = %e, "Mopinion request failed."));
			}
		}

		let outcome =
			if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

		record_outcome(self.endpoint, outcome);
	}
}

fn record_outcome(endpoint: Endpoint, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"mopinion_request_total",
			"endpoint" => endpoint.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (endpoint, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::response::ResponseMetadata;

	fn response(data: u32) -> ApiResponse<u32> {
		ApiResponse {
			data,
			metadata: ResponseMetadata {
				method: Method::GET,
				url: Url::parse("https://api.mopinion.com/account")
					.expect("Fixture URL should parse successfully."),
				status: StatusCode::OK,
				headers: HeaderMap::new(),
			},
		}
	}

	#[tokio::test]
	async fn observe_passes_success_through() {
		let observer = CallObserver::start(Endpoint::Account, "observe_passes_success_through");
		let result = observer.observe(async { Ok(response(42)) }).await;

		assert_eq!(result.expect("Observed call should succeed.").into_data(), 42);
	}

	#[tokio::test]
	async fn observe_passes_failure_through() {
		let observer = CallObserver::start(Endpoint::Feedback, "observe_passes_failure_through");
		let result = observer.observe(async { Err::<ApiResponse<u32>, _>(Error::Cancelled) }).await;

		assert!(matches!(result, Err(Error::Cancelled)));
	}

	#[test]
	fn labels_are_stable() {
		assert_eq!(Endpoint::Deployments.to_string(), "deployments");
		assert_eq!(RequestOutcome::Failure.to_string(), "failure");
	}
}
