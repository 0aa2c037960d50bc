//! Resource bindings: one method per API operation, each a single round trip.
//!
//! Bindings are inherent methods on [`Client`](crate::client::Client). Each validates local
//! input before any request exists; create and update calls return the resource as the service
//! echoes it back.

mod account;
mod datasets;
mod deployments;
mod feedback;
mod fields;
mod reports;
mod token;

/// Appends the dry-run flag the delete endpoints accept.
fn delete_path(path: String, dry_run: bool) -> String {
	if dry_run { crate::query::append_query(&path, "dry-run=true") } else { path }
}
