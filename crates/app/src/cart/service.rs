//! Cart store service.

use std::sync::Arc;

use storefront::{cart::Cart, codec, products::ProductId};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{info, instrument, warn};

use crate::{
    cart::{
        CartStoreConfig, CartStoreError, UpdateProductAmount,
        writer::{CartWriter, Command, Reply},
    },
    catalog::CatalogService,
    notifications::{Notification, Notifier},
    storage::{KeyValueStore, StorageError},
};

/// Handle to the authoritative cart.
///
/// Every mutation is queued to a single writer task, which persists the full cart after each
/// successful change before publishing the new snapshot. Handles are cheap to clone and may be
/// shared across tasks.
#[derive(Debug, Clone)]
pub struct CartStore {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Cart>,
    notifier: Notifier,
}

impl CartStore {
    /// Restore the cart from `storage` and start the writer task.
    ///
    /// A missing blob yields an empty cart, as does a blob that cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from `storage` fails.
    pub async fn open(
        catalog: Arc<dyn CatalogService>,
        storage: Arc<dyn KeyValueStore>,
        config: CartStoreConfig,
    ) -> Result<Self, CartStoreError> {
        let cart = restore(storage.as_ref(), &config.storage_key).await?;

        info!(
            products = cart.len(),
            key = %config.storage_key,
            "cart restored"
        );

        let (commands, receiver) = mpsc::channel(config.queue_capacity.max(1));
        let (publisher, snapshots) = watch::channel(cart.clone());
        let notifier = Notifier::new(config.notification_capacity);

        let writer = CartWriter {
            cart,
            catalog,
            storage,
            storage_key: config.storage_key,
            snapshots: publisher,
            notifier: notifier.clone(),
            commands: receiver,
        };

        tokio::spawn(writer.run());

        Ok(Self {
            commands,
            snapshots,
            notifier,
        })
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Cart {
        self.snapshots.borrow().clone()
    }

    /// Receiver that observes every committed cart.
    pub fn watch(&self) -> watch::Receiver<Cart> {
        self.snapshots.clone()
    }

    /// Subscribe to failure notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// Add one unit of `product`.
    ///
    /// A product not yet in the cart is looked up in the catalog and appended with a single
    /// unit; otherwise its amount is raised by one, subject to the stock check.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog lookup, the stock check or persistence fails.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product: ProductId) -> Result<Cart, CartStoreError> {
        self.request(|reply| Command::AddProduct { product, reply })
            .await
    }

    /// Remove the line for `product`.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::NotFound` if the product is not in the cart, or an error if
    /// persistence fails.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product: ProductId) -> Result<Cart, CartStoreError> {
        self.request(|reply| Command::RemoveProduct { product, reply })
            .await
    }

    /// Set the number of units held for a product already in the cart.
    ///
    /// An amount of zero leaves the cart untouched. The requested amount must stay strictly
    /// below the catalog's stock level.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError::OutOfStock` when the stock level is too low,
    /// `CartStoreError::NotFound` when the product is not in the cart, or an error if the stock
    /// lookup or persistence fails.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        request: UpdateProductAmount,
    ) -> Result<Cart, CartStoreError> {
        self.request(|reply| Command::UpdateProductAmount { request, reply })
            .await
    }

    /// Finish queued work, flush the durable store and stop the writer.
    ///
    /// Operations issued afterwards from any handle fail with `CartStoreError::Closed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store was already closed or flushing fails.
    pub async fn shutdown(&self) -> Result<(), CartStoreError> {
        self.request(|reply| Command::Shutdown { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> Command,
    ) -> Result<T, CartStoreError> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(command(reply))
            .await
            .map_err(|_closed| CartStoreError::Closed)?;

        response.await.map_err(|_dropped| CartStoreError::Closed)?
    }
}

async fn restore(storage: &dyn KeyValueStore, key: &str) -> Result<Cart, CartStoreError> {
    let blob = match storage.get(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) => return Ok(Cart::new()),
        Err(error @ StorageError::Encoding(..)) => {
            warn!(%error, key, "stored cart is unreadable, starting empty");

            return Ok(Cart::new());
        }
        Err(error) => return Err(error.into()),
    };

    Ok(codec::decode(&blob).unwrap_or_else(|error| {
        warn!(%error, key, "stored cart is unreadable, starting empty");

        Cart::new()
    }))
}
