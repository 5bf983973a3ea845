//! Owning, insertion-ordered asset collection

use crate::{Asset, Error, Result};
use log::{debug, warn};
use std::fmt;
use std::io::Write;

/// Capacity reserved the first time an empty collection grows
pub const DEFAULT_CAPACITY: usize = 20;

/// Ordered, index-addressable container that exclusively owns its assets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetCollection {
    assets: Vec<Asset>,
}

impl AssetCollection {
    /// Creates an empty collection without allocating
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Creates an empty collection with room for `capacity` assets
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assets: Vec::with_capacity(capacity),
        }
    }

    /// Appends an asset at the end of the collection.
    ///
    /// Growth is fallible: if the backing storage cannot be extended the
    /// collection is left untouched and `Error::AllocationFailure` is returned.
    pub fn push(&mut self, asset: Asset) -> Result<()> {
        if self.assets.len() == self.assets.capacity() {
            let additional = if self.assets.capacity() == 0 {
                DEFAULT_CAPACITY
            } else {
                1
            };
            self.assets.try_reserve(additional)?;
            debug!("Grew asset collection to capacity {}", self.assets.capacity());
        }

        self.assets.push(asset);
        Ok(())
    }

    /// Removes and returns the asset at `index`, shifting later assets down by one.
    ///
    /// An out-of-range index leaves the collection unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Asset> {
        let len = self.assets.len();
        if index >= len {
            warn!("Rejected removal of index {} from collection of length {}", index, len);
            return Err(Error::IndexOutOfRange { index, len });
        }

        let asset = self.assets.remove(index);
        debug!("Removed asset '{}' at index {}", asset.name, index);
        Ok(asset)
    }

    /// Renders one listing line per asset, in current order
    pub fn render(&self) -> Vec<String> {
        self.assets
            .iter()
            .enumerate()
            .map(|(i, asset)| asset.render(i))
            .collect()
    }

    /// Writes the rendered listing to a writer, one line per asset
    pub fn write_listing<W: Write>(&self, mut writer: W) -> Result<()> {
        for line in self.render() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Number of assets in the collection
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the collection holds no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of assets the collection can hold without growing
    pub fn capacity(&self) -> usize {
        self.assets.capacity()
    }

    /// Gets the asset at `index`
    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    /// Iterates over the assets in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    /// Serializes the collection as a pretty-printed JSON array
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl fmt::Display for AssetCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AssetCollection {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

impl FromIterator<Asset> for AssetCollection {
    fn from_iter<I: IntoIterator<Item = Asset>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}
