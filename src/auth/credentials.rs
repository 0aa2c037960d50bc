//! Credential providers supplying the public/private key pair used for token exchange.
//!
//! The public key is an account identifier, not a public-key-cryptography key; the private key is
//! its shared secret. Both travel to the token endpoint via HTTP Basic authentication and the
//! public key is embedded in every request signature.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::_prelude::*;

/// Environment variable consulted by [`EnvCredentialProvider`] for the public key.
pub const PUBLIC_KEY_ENV: &str = "MOPINION_PUBLIC_KEY";
/// Environment variable consulted by [`EnvCredentialProvider`] for the private key.
pub const PRIVATE_KEY_ENV: &str = "MOPINION_PRIVATE_KEY";

/// Failures raised while a [`CredentialProvider`] produces keys.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialError {
	/// A required environment variable is not set or not valid unicode.
	#[error("Environment variable `{variable}` is not set.")]
	MissingVariable {
		/// Name of the missing variable.
		variable: String,
	},
	/// A key resolved to an empty string.
	#[error("The {which} key cannot be empty.")]
	EmptyKey {
		/// Which key was empty (`public` or `private`).
		which: &'static str,
	},
}

/// Immutable public/private key pair owned by a client for its lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	public_key: String,
	private_key: String,
}
impl Credentials {
	/// Validates and wraps a key pair.
	pub fn new(
		public_key: impl Into<String>,
		private_key: impl Into<String>,
	) -> Result<Self, CredentialError> {
		let public_key = public_key.into();
		let private_key = private_key.into();

		if public_key.is_empty() {
			return Err(CredentialError::EmptyKey { which: "public" });
		}
		if private_key.is_empty() {
			return Err(CredentialError::EmptyKey { which: "private" });
		}

		Ok(Self { public_key, private_key })
	}

	/// Returns the public key (account identifier).
	pub fn public_key(&self) -> &str {
		&self.public_key
	}

	/// Returns the private key. Callers must avoid logging this string.
	pub fn expose_private_key(&self) -> &str {
		&self.private_key
	}

	/// Renders the `Authorization` header value used by the token endpoint.
	pub fn basic_authorization(&self) -> String {
		let encoded = STANDARD.encode(format!("{}:{}", self.public_key, self.private_key));

		format!("Basic {encoded}")
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("public_key", &self.public_key)
			.field("private_key", &"<redacted>")
			.finish()
	}
}

/// Supplies the key pair a client exchanges for session tokens.
///
/// Implementations must be side-effect free apart from reading their source; alternate sources
/// (secret managers, config files) satisfy the same contract.
pub trait CredentialProvider
where
	Self: Send + Sync,
{
	/// Returns the public and private keys.
	fn keys(&self) -> Result<Credentials, CredentialError>;
}

/// Provider returning a fixed key pair.
#[derive(Clone)]
pub struct BasicCredentialProvider {
	public_key: String,
	private_key: String,
}
impl BasicCredentialProvider {
	/// Creates a provider for the given key pair.
	pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
		Self { public_key: public_key.into(), private_key: private_key.into() }
	}
}
impl CredentialProvider for BasicCredentialProvider {
	fn keys(&self) -> Result<Credentials, CredentialError> {
		Credentials::new(self.public_key.as_str(), self.private_key.as_str())
	}
}
impl Debug for BasicCredentialProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BasicCredentialProvider")
			.field("public_key", &self.public_key)
			.finish_non_exhaustive()
	}
}

/// Provider reading the key pair from environment variables.
#[derive(Clone, Debug)]
pub struct EnvCredentialProvider {
	/// Variable holding the public key.
	pub public_key_var: String,
	/// Variable holding the private key.
	pub private_key_var: String,
}
impl EnvCredentialProvider {
	/// Creates a provider reading custom variable names.
	pub fn with_vars(
		public_key_var: impl Into<String>,
		private_key_var: impl Into<String>,
	) -> Self {
		Self { public_key_var: public_key_var.into(), private_key_var: private_key_var.into() }
	}
}
impl Default for EnvCredentialProvider {
	fn default() -> Self {
		Self::with_vars(PUBLIC_KEY_ENV, PRIVATE_KEY_ENV)
	}
}
impl CredentialProvider for EnvCredentialProvider {
	fn keys(&self) -> Result<Credentials, CredentialError> {
		let read = |variable: &str| {
			std::env::var(variable)
				.map_err(|_| CredentialError::MissingVariable { variable: variable.to_owned() })
		};

		Credentials::new(read(self.public_key_var.as_str())?, read(self.private_key_var.as_str())?)
	}
}
