//! Transport product (mode/category) type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when parsing an unknown product.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown product: {name}")]
pub struct InvalidProduct {
    name: String,
}

/// Transport mode/category of a line.
///
/// The feed uses a fixed set of product identifiers in camelCase
/// (e.g. `"nationalExpress"` for long-distance high-speed services,
/// `"suburban"` for S-Bahn). `Product::parse` accepts exactly those
/// identifiers.
///
/// # Examples
///
/// ```
/// use trip_reconciler::domain::Product;
///
/// let product = Product::parse("suburban").unwrap();
/// assert_eq!(product, Product::Suburban);
/// assert_eq!(product.as_str(), "suburban");
///
/// // Unknown identifiers are rejected
/// assert!(Product::parse("zeppelin").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Product {
    /// Long-distance high-speed (ICE)
    NationalExpress,
    /// Long-distance (IC/EC)
    National,
    /// Regional express (RE/IRE)
    RegionalExpress,
    /// Regional (RB)
    Regional,
    /// S-Bahn
    Suburban,
    /// U-Bahn
    Subway,
    Tram,
    Bus,
    Ferry,
    Taxi,
}

impl Product {
    /// Parse a product from its feed identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidProduct> {
        match s {
            "nationalExpress" => Ok(Product::NationalExpress),
            "national" => Ok(Product::National),
            "regionalExpress" => Ok(Product::RegionalExpress),
            "regional" => Ok(Product::Regional),
            "suburban" => Ok(Product::Suburban),
            "subway" => Ok(Product::Subway),
            "tram" => Ok(Product::Tram),
            "bus" => Ok(Product::Bus),
            "ferry" => Ok(Product::Ferry),
            "taxi" => Ok(Product::Taxi),
            _ => Err(InvalidProduct { name: s.to_string() }),
        }
    }

    /// Returns the feed identifier for this product.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::NationalExpress => "nationalExpress",
            Product::National => "national",
            Product::RegionalExpress => "regionalExpress",
            Product::Regional => "regional",
            Product::Suburban => "suburban",
            Product::Subway => "subway",
            Product::Tram => "tram",
            Product::Bus => "bus",
            Product::Ferry => "ferry",
            Product::Taxi => "taxi",
        }
    }

    /// Returns true for long-distance rail (ICE/IC/EC).
    pub fn is_long_distance(&self) -> bool {
        matches!(self, Product::NationalExpress | Product::National)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
