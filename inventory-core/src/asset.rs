//! Asset data structures for the inventory tracker

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of physical item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Laptop,
    IdCard,
}

impl ItemKind {
    /// Human-readable label used in listings
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Laptop => "Laptop",
            ItemKind::IdCard => "ID Card",
        }
    }
}

/// Division owning a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Division {
    Finance,
    It,
    Hr,
}

impl Division {
    /// Human-readable label used in listings
    pub fn label(self) -> &'static str {
        match self {
            Division::Finance => "Finance",
            Division::It => "IT",
            Division::Hr => "HR",
        }
    }
}

/// Variant of an asset, carrying the sub-kind that belongs to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetKind {
    Item(ItemKind),
    Document(Division),
}

impl AssetKind {
    /// Label for the variant itself ("Item" or "Document")
    pub fn type_label(self) -> &'static str {
        match self {
            AssetKind::Item(_) => "Item",
            AssetKind::Document(_) => "Document",
        }
    }

    /// Label naming what the sub-kind describes ("Item" or "Division")
    pub fn category_label(self) -> &'static str {
        match self {
            AssetKind::Item(_) => "Item",
            AssetKind::Document(_) => "Division",
        }
    }

    /// Label of the sub-kind
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Item(kind) => kind.label(),
            AssetKind::Document(division) => division.label(),
        }
    }
}

/// A single tracked inventory record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    /// Variant and sub-kind
    pub kind: AssetKind,
    /// Display name of the asset
    pub name: String,
    /// Person the asset is assigned to
    pub assignee: String,
}

impl Asset {
    /// Creates a new asset
    pub fn new(kind: AssetKind, name: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            assignee: assignee.into(),
        }
    }

    /// Creates a new item asset
    pub fn item(kind: ItemKind, name: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self::new(AssetKind::Item(kind), name, assignee)
    }

    /// Creates a new document asset
    pub fn document(
        division: Division,
        name: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self::new(AssetKind::Document(division), name, assignee)
    }

    /// Renders the asset as a listing line for the given 0-based position
    pub fn render(&self, position: usize) -> String {
        format!(
            "Asset {}: Type: {}, {}: {}, Name: {}, Assignee: {}",
            position + 1,
            self.kind.type_label(),
            self.kind.category_label(),
            self.kind.label(),
            self.name,
            self.assignee
        )
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercases and strips separators so "ID Card", "id-card" and "idcard" compare equal
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "laptop" => Ok(ItemKind::Laptop),
            "idcard" => Ok(ItemKind::IdCard),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl FromStr for Division {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "finance" => Ok(Division::Finance),
            "it" => Ok(Division::It),
            "hr" => Ok(Division::Hr),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// Parses `item:<kind>:<name>:<assignee>` or `document:<division>:<name>:<assignee>`.
///
/// The assignee is everything after the third colon, so it may itself contain colons.
impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.splitn(4, ':').collect();
        let [variant, sub_kind, name, assignee] = parts.as_slice() else {
            return Err(Error::InvalidAssetSpec(format!(
                "expected <variant>:<kind>:<name>:<assignee>, got '{}'",
                s
            )));
        };

        let name = name.trim();
        let assignee = assignee.trim();
        if name.is_empty() || assignee.is_empty() {
            return Err(Error::InvalidAssetSpec(format!(
                "name and assignee must not be empty in '{}'",
                s
            )));
        }

        let kind = match normalize(variant).as_str() {
            "item" => AssetKind::Item(sub_kind.parse()?),
            "document" | "doc" => AssetKind::Document(sub_kind.parse()?),
            _ => return Err(Error::UnknownKind(variant.to_string())),
        };

        Ok(Self::new(kind, name, assignee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_labels() {
        let cases = [
            (
                Asset::item(ItemKind::Laptop, "L", "A"),
                "Asset 1: Type: Item, Item: Laptop, Name: L, Assignee: A",
            ),
            (
                Asset::item(ItemKind::IdCard, "L", "A"),
                "Asset 1: Type: Item, Item: ID Card, Name: L, Assignee: A",
            ),
            (
                Asset::document(Division::Finance, "L", "A"),
                "Asset 1: Type: Document, Division: Finance, Name: L, Assignee: A",
            ),
            (
                Asset::document(Division::It, "L", "A"),
                "Asset 1: Type: Document, Division: IT, Name: L, Assignee: A",
            ),
            (
                Asset::document(Division::Hr, "L", "A"),
                "Asset 1: Type: Document, Division: HR, Name: L, Assignee: A",
            ),
        ];

        for (asset, expected) in cases {
            assert_eq!(asset.render(0), expected);
        }
    }

    #[test]
    fn test_render_uses_one_based_position() {
        let asset = Asset::document(Division::It, "IT Policy", "Charlie");
        assert_eq!(
            asset.render(2),
            "Asset 3: Type: Document, Division: IT, Name: IT Policy, Assignee: Charlie"
        );
    }

    #[test]
    fn test_display_uses_labels() {
        assert_eq!(ItemKind::IdCard.to_string(), "ID Card");
        assert_eq!(Division::Hr.to_string(), "HR");
        assert_eq!(AssetKind::Item(ItemKind::Laptop).to_string(), "Laptop");
        assert_eq!(AssetKind::Document(Division::It).to_string(), "IT");
    }

    #[test]
    fn test_parse_sub_kinds() {
        assert_eq!("laptop".parse::<ItemKind>().unwrap(), ItemKind::Laptop);
        assert_eq!("ID Card".parse::<ItemKind>().unwrap(), ItemKind::IdCard);
        assert_eq!("id-card".parse::<ItemKind>().unwrap(), ItemKind::IdCard);
        assert_eq!("Finance".parse::<Division>().unwrap(), Division::Finance);
        assert_eq!("IT".parse::<Division>().unwrap(), Division::It);
        assert_eq!("hr".parse::<Division>().unwrap(), Division::Hr);

        assert!(matches!(
            "phone".parse::<ItemKind>(),
            Err(Error::UnknownKind(_))
        ));
        // Divisions are not item kinds
        assert!("finance".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_parse_asset() {
        let asset: Asset = "item:laptop:Dell XPS 13:Alice".parse().unwrap();
        assert_eq!(asset, Asset::item(ItemKind::Laptop, "Dell XPS 13", "Alice"));

        let asset: Asset = "doc:it:IT Policy:Charlie".parse().unwrap();
        assert_eq!(asset, Asset::document(Division::It, "IT Policy", "Charlie"));

        let asset: Asset = "document:hr:Handbook:Team: People".parse().unwrap();
        assert_eq!(asset.assignee, "Team: People");
    }

    #[test]
    fn test_parse_asset_rejects_malformed() {
        assert!(matches!(
            "item:laptop:Dell".parse::<Asset>(),
            Err(Error::InvalidAssetSpec(_))
        ));
        assert!(matches!(
            "item:laptop: :Alice".parse::<Asset>(),
            Err(Error::InvalidAssetSpec(_))
        ));
        assert!(matches!(
            "vehicle:laptop:Dell:Alice".parse::<Asset>(),
            Err(Error::UnknownKind(_))
        ));
        assert!(matches!(
            "item:finance:Dell:Alice".parse::<Asset>(),
            Err(Error::UnknownKind(_))
        ));
    }
}
