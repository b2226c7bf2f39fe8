//! Cart blob codec.
//!
//! A cart is stored as a JSON array of product records, in cart order. Decoding enforces the
//! cart invariants, so a blob holding duplicate ids or zero amounts is rejected rather than
//! silently repaired.

use thiserror::Error;

use crate::cart::Cart;

/// Errors raised while encoding or decoding a cart blob.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The cart could not be serialized.
    #[error("failed to encode cart")]
    Encode(#[source] serde_json::Error),

    /// The blob is not a valid cart.
    #[error("failed to decode cart")]
    Decode(#[source] serde_json::Error),
}

/// Serialize `cart` into its durable representation.
///
/// # Errors
///
/// Returns `CodecError::Encode` if serialization fails.
pub fn encode(cart: &Cart) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(cart).map_err(CodecError::Encode)
}

/// Deserialize a cart from its durable representation.
///
/// # Errors
///
/// Returns `CodecError::Decode` if the blob is malformed or breaks a cart invariant.
pub fn decode(bytes: &[u8]) -> Result<Cart, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::{ProductDetails, ProductId};

    use super::*;

    #[test]
    fn round_trip_preserves_order_and_attributes() -> TestResult {
        let mut cart = Cart::new();

        for (id, price, amount) in [(7, Decimal::new(1799, 1), 2), (3, Decimal::from(10), 1)] {
            cart.push(
                ProductDetails {
                    id: ProductId::new(id),
                    title: format!("Product {id}"),
                    price,
                    image: format!("https://cdn.example.com/{id}.jpg"),
                }
                .into_product(amount),
            )?;
        }

        let decoded = decode(&encode(&cart)?)?;

        assert_eq!(decoded, cart);
        assert_eq!(
            decoded.iter().map(|p| p.id.get()).collect::<Vec<_>>(),
            [7, 3]
        );

        Ok(())
    }

    #[test]
    fn empty_cart_encodes_as_empty_array() -> TestResult {
        assert_eq!(encode(&Cart::new())?, b"[]");

        Ok(())
    }

    #[test]
    fn decodes_numeric_prices() -> TestResult {
        let cart = decode(br#"[{"id":1,"title":"Shoe","price":139.9,"image":"","amount":2}]"#)?;

        let product = cart.get(ProductId::new(1));

        assert_eq!(product.map(|p| p.price), Some(Decimal::new(1399, 1)));
        assert_eq!(product.map(|p| p.amount), Some(2));

        Ok(())
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let result = decode(br#"[{"id":1,"price":1,"amount":1},{"id":1,"price":1,"amount":2}]"#);

        assert!(
            matches!(result, Err(CodecError::Decode(_))),
            "expected Decode error, got {result:?}"
        );
    }

    #[test]
    fn decode_rejects_zero_amount() {
        let result = decode(br#"[{"id":1,"price":1,"amount":0}]"#);

        assert!(
            matches!(result, Err(CodecError::Decode(_))),
            "expected Decode error, got {result:?}"
        );
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let result = decode(b"{not json");

        assert!(
            matches!(result, Err(CodecError::Decode(_))),
            "expected Decode error, got {result:?}"
        );
    }
}
