//! Async client for the Mopinion feedback API: credential-to-token exchange, HMAC-signed
//! requests, typed resource bindings, and structured API error classification in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod collection;
pub mod error;
pub mod model;
pub mod obs;
pub mod query;
pub mod request;
pub mod resources;
pub mod response;
pub mod transport;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{BasicCredentialProvider, SessionToken},
		client::{ClientBuilder, DefaultClient},
		transport::ReqwestHttpClient,
	};

	/// Public key baked into [`build_reqwest_test_client`].
	pub const TEST_PUBLIC_KEY: &str = "publickey";
	/// Private key baked into [`build_reqwest_test_client`].
	pub const TEST_PRIVATE_KEY: &str = "privatekey";

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`DefaultClient`] rooted at `base_url` with the test key pair, signing with
	/// `token` when one is given.
	pub fn build_reqwest_test_client(base_url: &str, token: Option<&str>) -> DefaultClient {
		let client = ClientBuilder::new()
			.base_url(base_url)
			.build_with_http_client(
				&BasicCredentialProvider::new(TEST_PUBLIC_KEY, TEST_PRIVATE_KEY),
				test_reqwest_http_client(),
			)
			.expect("Failed to build Mopinion client for tests.");

		if let Some(token) = token {
			client.set_token(SessionToken::new(token));
		}

		client
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use http::{HeaderMap, HeaderValue, Method, StatusCode};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use tokio_util::sync::CancellationToken;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use tokio_util::sync::CancellationToken;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
