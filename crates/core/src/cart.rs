//! Cart

use std::slice::Iter;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Errors raised when a cart operation would break the cart invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product already has a line in the cart.
    #[error("product {0} is already in the cart")]
    DuplicateProduct(ProductId),

    /// A cart line may not hold zero units.
    #[error("product {0} cannot have an amount of zero")]
    ZeroAmount(ProductId),

    /// The product has no line in the cart.
    #[error("product {0} is not in the cart")]
    ProductNotFound(ProductId),
}

/// Ordered sequence of products, unique by id.
///
/// Every line holds at least one unit. Lines keep the order they were added in; changing an
/// amount replaces the line in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Cart lines in order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the cart lines in order.
    pub fn iter(&self) -> Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up the line for `id`.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Check whether `id` has a line in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new line to the end of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the product is already present or holds zero units.
    pub fn push(&mut self, product: Product) -> Result<(), CartError> {
        if product.amount == 0 {
            return Err(CartError::ZeroAmount(product.id));
        }

        if self.contains(product.id) {
            return Err(CartError::DuplicateProduct(product.id));
        }

        self.products.push(product);

        Ok(())
    }

    /// Remove the line for `id`, keeping the order of the remaining lines.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if the product has no line in the cart.
    pub fn remove(&mut self, id: ProductId) -> Result<Product, CartError> {
        let position = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(CartError::ProductNotFound(id))?;

        Ok(self.products.remove(position))
    }

    /// Set the number of units held by the line for `id`.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if `amount` is zero or the product has no line in the cart.
    pub fn set_amount(&mut self, id: ProductId, amount: u32) -> Result<&Product, CartError> {
        if amount == 0 {
            return Err(CartError::ZeroAmount(id));
        }

        let product = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(CartError::ProductNotFound(id))?;

        product.amount = amount;

        Ok(product)
    }

    /// Total number of units across every line.
    pub fn total_items(&self) -> u64 {
        self.products
            .iter()
            .map(|product| u64::from(product.amount))
            .sum()
    }

    /// Sum of every line's subtotal, saturating at the decimal bounds.
    pub fn subtotal(&self) -> Decimal {
        self.products
            .iter()
            .fold(Decimal::ZERO, |total, product| {
                total.saturating_add(product.subtotal())
            })
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        let mut cart = Cart {
            products: Vec::with_capacity(products.len()),
        };

        for product in products {
            cart.push(product)?;
        }

        Ok(cart)
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductDetails;

    use super::*;

    fn product(id: u64, price: i64, amount: u32) -> Product {
        ProductDetails {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::from(price),
            image: format!("https://cdn.example.com/{id}.jpg"),
        }
        .into_product(amount)
    }

    fn ids(cart: &Cart) -> Vec<u64> {
        cart.iter().map(|product| product.id.get()).collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn push_appends_in_order() -> TestResult {
        let mut cart = Cart::new();

        cart.push(product(2, 10, 1))?;
        cart.push(product(1, 20, 1))?;

        assert_eq!(ids(&cart), [2, 1]);

        Ok(())
    }

    #[test]
    fn push_rejects_duplicate_id() -> TestResult {
        let mut cart = Cart::new();

        cart.push(product(1, 10, 1))?;

        let result = cart.push(product(1, 10, 4));

        assert_eq!(result, Err(CartError::DuplicateProduct(ProductId::new(1))));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(1));

        Ok(())
    }

    #[test]
    fn push_rejects_zero_amount() {
        let mut cart = Cart::new();

        let result = cart.push(product(1, 10, 0));

        assert_eq!(result, Err(CartError::ZeroAmount(ProductId::new(1))));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_keeps_remaining_order() -> TestResult {
        let mut cart = Cart::try_from(vec![
            product(1, 10, 1),
            product(2, 10, 1),
            product(3, 10, 1),
        ])?;

        let removed = cart.remove(ProductId::new(2))?;

        assert_eq!(removed.id, ProductId::new(2));
        assert_eq!(ids(&cart), [1, 3]);

        Ok(())
    }

    #[test]
    fn remove_missing_product_errors() -> TestResult {
        let mut cart = Cart::try_from(vec![product(1, 10, 1)])?;

        let result = cart.remove(ProductId::new(9));

        assert_eq!(result, Err(CartError::ProductNotFound(ProductId::new(9))));
        assert_eq!(ids(&cart), [1]);

        Ok(())
    }

    #[test]
    fn set_amount_replaces_in_place() -> TestResult {
        let mut cart = Cart::try_from(vec![product(1, 10, 1), product(2, 10, 1)])?;

        cart.set_amount(ProductId::new(1), 3)?;

        assert_eq!(ids(&cart), [1, 2]);
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(3));
        assert_eq!(cart.total_items(), 4);

        Ok(())
    }

    #[test]
    fn set_amount_rejects_zero() -> TestResult {
        let mut cart = Cart::try_from(vec![product(1, 10, 2)])?;

        let result = cart.set_amount(ProductId::new(1), 0).cloned();

        assert_eq!(result, Err(CartError::ZeroAmount(ProductId::new(1))));
        assert_eq!(cart.get(ProductId::new(1)).map(|p| p.amount), Some(2));

        Ok(())
    }

    #[test]
    fn set_amount_on_missing_product_errors() {
        let mut cart = Cart::new();

        let result = cart.set_amount(ProductId::new(1), 2).cloned();

        assert_eq!(result, Err(CartError::ProductNotFound(ProductId::new(1))));
    }

    #[test]
    fn try_from_rejects_duplicates() {
        let result = Cart::try_from(vec![product(1, 10, 1), product(1, 10, 2)]);

        assert_eq!(result, Err(CartError::DuplicateProduct(ProductId::new(1))));
    }

    #[test]
    fn subtotal_sums_lines() -> TestResult {
        let cart = Cart::try_from(vec![product(1, 10, 2), product(2, 5, 3)])?;

        assert_eq!(cart.subtotal(), Decimal::from(35));
        assert_eq!(cart.total_items(), 5);

        Ok(())
    }
}
