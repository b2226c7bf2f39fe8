//! Storefront cart store, its catalog client and durable storage.

pub mod cart;
pub mod catalog;
pub mod context;
pub mod notifications;
pub mod storage;

#[cfg(test)]
mod test;
