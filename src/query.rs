//! Pagination and filter query construction.
//!
//! Both fragments are appended to a relative path before the request is built, so they are part
//! of the signed path. Pagination is always applied before filters:
//!
//! ```
//! use mopinion::query::{
//! 	self, Filter, FilterCollection, FilterKey, FilterModifier, PaginationOptions,
//! };
//!
//! let pagination = PaginationOptions::new().page(1).limit(10);
//! let filters = FilterCollection::from_iter([Filter::new(
//! 	FilterKey::Date,
//! 	FilterModifier::Gte,
//! 	"2019-10-01",
//! )]);
//!
//! assert_eq!(
//! 	query::with_query("datasets/2/feedback", Some(&pagination), Some(&filters)),
//! 	"datasets/2/feedback?limit=10&page=1&filter[>>date]=2019-10-01",
//! );
//! ```

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::_prelude::*;

/// Page selection and ordering for list endpoints; zero/empty fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
	/// One-based page number.
	pub page: u32,
	/// Page size.
	pub limit: u32,
	/// Field to sort by.
	pub sort: String,
	/// Sort direction (`asc`/`desc`).
	pub order: String,
}
impl PaginationOptions {
	/// Creates an empty option set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the page number.
	pub fn page(mut self, page: u32) -> Self {
		self.page = page;

		self
	}

	/// Sets the page size.
	pub fn limit(mut self, limit: u32) -> Self {
		self.limit = limit;

		self
	}

	/// Sets the sort field.
	pub fn sort(mut self, sort: impl Into<String>) -> Self {
		self.sort = sort.into();

		self
	}

	/// Sets the sort direction.
	pub fn order(mut self, order: impl Into<String>) -> Self {
		self.order = order.into();

		self
	}

	/// Renders the present fields as a form-urlencoded fragment with keys in alphabetical order,
	/// or `None` when every field is zero/empty.
	pub fn to_query(&self) -> Option<String> {
		let mut serializer = Serializer::new(String::new());
		let mut present = false;

		if self.limit != 0 {
			serializer.append_pair("limit", &self.limit.to_string());
			present = true;
		}
		if !self.order.is_empty() {
			serializer.append_pair("order", &self.order);
			present = true;
		}
		if self.page != 0 {
			serializer.append_pair("page", &self.page.to_string());
			present = true;
		}
		if !self.sort.is_empty() {
			serializer.append_pair("sort", &self.sort);
			present = true;
		}

		present.then(|| serializer.finish())
	}
}

/// Feedback field a filter applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterKey {
	/// Creation date of the record.
	Date,
	/// General numeric rating.
	Rating,
	/// Net Promoter Score (0-10).
	Nps,
	/// Customer Effort Score (1-5).
	Ces,
	/// Inverse Customer Effort Score.
	CesInverse,
	/// Goal Completion Rate (`no`, `partly`, `yes`).
	Gcr,
	/// Tags assigned to feedback items.
	Tags,
	/// Any other key accepted by the service.
	Custom(String),
}
impl FilterKey {
	/// Returns the wire name.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Date => "date",
			Self::Rating => "rating",
			Self::Nps => "nps",
			Self::Ces => "ces",
			Self::CesInverse => "ces_inverse",
			Self::Gcr => "gcr",
			Self::Tags => "tags",
			Self::Custom(key) => key,
		}
	}
}
impl Display for FilterKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Comparison applied by a filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterModifier {
	/// Equality.
	#[default]
	None,
	/// Logical not (`!`).
	Not,
	/// Less than (`<`).
	Lt,
	/// Less than or equal (`<<`).
	Lte,
	/// Greater than (`>`).
	Gt,
	/// Greater than or equal (`>>`).
	Gte,
}
impl FilterModifier {
	/// Returns the wire prefix.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "",
			Self::Not => "!",
			Self::Lt => "<",
			Self::Lte => "<<",
			Self::Gt => ">",
			Self::Gte => ">>",
		}
	}
}
impl Display for FilterModifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A single `filter[<modifier><key>]=<value>` query pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
	/// Field being filtered.
	pub key: FilterKey,
	/// Comparison prefix.
	pub modifier: FilterModifier,
	/// Raw value, rendered as-is.
	pub value: String,
}
impl Filter {
	/// Creates a filter.
	pub fn new(key: FilterKey, modifier: FilterModifier, value: impl Into<String>) -> Self {
		Self { key, modifier, value: value.into() }
	}
}
impl Display for Filter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "filter[{}{}]={}", self.modifier, self.key, self.value)
	}
}

/// Ordered filters; rendering preserves insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCollection {
	/// Filters in insertion order.
	pub filters: Vec<Filter>,
}
impl FilterCollection {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a filter.
	pub fn with(mut self, filter: Filter) -> Self {
		self.filters.push(filter);

		self
	}

	/// Appends a filter in place.
	pub fn push(&mut self, filter: Filter) {
		self.filters.push(filter);
	}

	/// Returns `true` when no filters are present.
	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	/// Renders the `&`-joined fragment, or `None` when empty.
	pub fn to_query(&self) -> Option<String> {
		if self.filters.is_empty() {
			return None;
		}

		Some(self.filters.iter().map(Filter::to_string).collect::<Vec<_>>().join("&"))
	}
}
impl FromIterator<Filter> for FilterCollection {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Filter>,
	{
		Self { filters: iter.into_iter().collect() }
	}
}

/// Appends `fragment` after `?`, or after `&` when `path` already carries a query string.
pub fn append_query(path: &str, fragment: &str) -> String {
	let separator = if path.contains('?') { '&' } else { '?' };

	format!("{path}{separator}{fragment}")
}

/// Applies pagination, then filters, to `path`.
pub fn with_query(
	path: &str,
	pagination: Option<&PaginationOptions>,
	filters: Option<&FilterCollection>,
) -> String {
	let mut path = path.to_owned();

	if let Some(fragment) = pagination.and_then(PaginationOptions::to_query) {
		path = append_query(&path, &fragment);
	}
	if let Some(fragment) = filters.and_then(FilterCollection::to_query) {
		path = append_query(&path, &fragment);
	}

	path
}
