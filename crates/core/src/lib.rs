//! Storefront
//!
//! Domain types for a storefront shopping cart: catalog products, the ordered id-unique cart, and
//! the blob codec used to mirror a cart into durable storage.

pub mod cart;
pub mod codec;
pub mod prelude;
pub mod products;
