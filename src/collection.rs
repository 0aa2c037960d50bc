//! Decoder for collections the service encodes as JSON objects keyed by index strings.
//!
//! The wire shape is `{"_meta": {...}, "0": {...}, "1": {...}}`. JSON object order carries no
//! meaning, so the decoder collects every indexed entry, orders the entries by their numeric
//! index, and then stable-sorts them by the element's natural key. The result is deterministic
//! whatever order the object arrived in.

// crates.io
use serde::de::{Deserializer, Error as DeError};
use serde_json::Value;
// self
use crate::{_prelude::*, model::Meta};

/// Reserved key holding the collection's [`Meta`].
pub const META_KEY: &str = "_meta";

/// Elements that sort by a natural key inside an [`IndexedCollection`].
pub trait Keyed {
	/// Sort key type.
	type Key: ?Sized + Ord;

	/// Returns the natural key of the element.
	fn sort_key(&self) -> &Self::Key;
}

/// Ordered elements plus metadata, decoded from an index-keyed JSON object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedCollection<T> {
	/// Metadata from the `_meta` entry (zero value when absent).
	pub meta: Meta,
	/// Elements sorted by [`Keyed::sort_key`] ascending.
	pub items: Vec<T>,
}
impl<T> IndexedCollection<T> {
	/// Returns the number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` when the collection holds no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Iterates over the elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}
}
impl<T> Default for IndexedCollection<T> {
	fn default() -> Self {
		Self { meta: Meta::default(), items: Vec::new() }
	}
}
impl<T> IntoIterator for IndexedCollection<T> {
	type IntoIter = std::vec::IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
impl<'de, T> Deserialize<'de> for IndexedCollection<T>
where
	T: DeserializeOwned + Keyed,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = <BTreeMap<String, Value>>::deserialize(deserializer)?;
		let mut meta = Meta::default();
		let mut indexed = Vec::with_capacity(raw.len());

		for (key, value) in raw {
			if key == META_KEY {
				meta = Meta::deserialize(value).map_err(D::Error::custom)?;

				continue;
			}

			let index = key.parse::<u64>().map_err(|_| {
				D::Error::custom(format!("expected an index key or `{META_KEY}`, found `{key}`"))
			})?;
			let item = T::deserialize(value).map_err(D::Error::custom)?;

			indexed.push((index, item));
		}

		indexed.sort_by_key(|(index, _)| *index);

		let mut items = indexed.into_iter().map(|(_, item)| item).collect::<Vec<_>>();

		items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

		Ok(Self { meta, items })
	}
}
