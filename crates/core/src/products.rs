//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, as issued by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw catalog identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw catalog identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Catalog record for a product.
///
/// Display attributes are carried through untouched; the cart only ever looks at `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Catalog identifier
    pub id: ProductId,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Unit price
    pub price: Decimal,

    /// Image URL
    #[serde(default)]
    pub image: String,
}

impl ProductDetails {
    /// Turn the catalog record into a cart line holding `amount` units.
    pub fn into_product(self, amount: u32) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount,
        }
    }
}

/// Product line held in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier
    pub id: ProductId,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Unit price
    pub price: Decimal,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Units in the cart, never below one.
    pub amount: u32,
}

impl Product {
    /// Price of every unit of this line, saturating at the decimal bounds.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.amount))
    }
}

/// Stock level reported by the catalog at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    /// Units available
    pub amount: u32,
}
