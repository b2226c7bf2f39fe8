//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    codec::{CodecError, decode, encode},
    products::{Product, ProductDetails, ProductId, StockInfo},
};
