//! Single-writer task owning the cart.
//!
//! Commands are handled strictly one at a time, including the catalog round trip, so two
//! mutations can never start from the same snapshot.

use std::sync::Arc;

use storefront::{cart::Cart, codec, products::ProductId};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::{
    cart::{CartStoreError, UpdateProductAmount},
    catalog::CatalogService,
    notifications::{CartOperation, Notifier},
    storage::KeyValueStore,
};

pub(super) type Reply<T> = oneshot::Sender<Result<T, CartStoreError>>;

pub(super) enum Command {
    AddProduct {
        product: ProductId,
        reply: Reply<Cart>,
    },
    RemoveProduct {
        product: ProductId,
        reply: Reply<Cart>,
    },
    UpdateProductAmount {
        request: UpdateProductAmount,
        reply: Reply<Cart>,
    },
    Shutdown {
        reply: Reply<()>,
    },
}

pub(super) struct CartWriter {
    pub(super) cart: Cart,
    pub(super) catalog: Arc<dyn CatalogService>,
    pub(super) storage: Arc<dyn KeyValueStore>,
    pub(super) storage_key: String,
    pub(super) snapshots: watch::Sender<Cart>,
    pub(super) notifier: Notifier,
    pub(super) commands: mpsc::Receiver<Command>,
}

impl CartWriter {
    pub(super) async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            if let Command::Shutdown { reply } = command {
                self.commands.close();

                // Commands queued ahead of the shutdown request still run.
                while let Some(queued) = self.commands.recv().await {
                    self.handle(queued).await;
                }

                let result = self.storage.flush().await.map_err(CartStoreError::from);
                send(reply, result);

                info!("cart store shut down");

                return;
            }

            self.handle(command).await;
        }

        if let Err(error) = self.storage.flush().await {
            warn!(%error, "failed to flush cart storage");
        }

        debug!("cart store handles dropped");
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::AddProduct { product, reply } => {
                let result = self.add_product(product).await;
                send(reply, result);
            }
            Command::RemoveProduct { product, reply } => {
                let result = self.remove_product(product).await;
                send(reply, result);
            }
            Command::UpdateProductAmount { request, reply } => {
                let result = self.update_product_amount(request).await;
                send(reply, result);
            }
            Command::Shutdown { reply } => send(reply, Ok(())),
        }
    }

    async fn add_product(&mut self, product: ProductId) -> Result<Cart, CartStoreError> {
        if let Some(current) = self.cart.get(product).map(|line| line.amount) {
            debug!(%product, current, "product already in cart");

            return self
                .increment_product(product, current)
                .await
                .inspect_err(|error| self.report(error, CartOperation::UpdateProductAmount));
        }

        self.append_product(product)
            .await
            .inspect_err(|error| self.report(error, CartOperation::AddProduct))
    }

    /// One more unit of a line already holding `current`, allowed while `current` is below stock.
    async fn increment_product(
        &mut self,
        product: ProductId,
        current: u32,
    ) -> Result<Cart, CartStoreError> {
        let amount = current.saturating_add(1);

        self.apply_amount(product, amount, current).await
    }

    async fn append_product(&mut self, product: ProductId) -> Result<Cart, CartStoreError> {
        let details = self.catalog.product(product).await?;

        let mut next = self.cart.clone();
        next.push(details.into_product(1))?;

        self.commit(next).await
    }

    async fn remove_product(&mut self, product: ProductId) -> Result<Cart, CartStoreError> {
        let mut next = self.cart.clone();

        let result = match next.remove(product) {
            Ok(_) => self.commit(next).await,
            Err(error) => Err(error.into()),
        };

        result.inspect_err(|error| self.report(error, CartOperation::RemoveProduct))
    }

    async fn update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> Result<Cart, CartStoreError> {
        if request.amount == 0 {
            return Ok(self.cart.clone());
        }

        self.apply_amount(request.product_id, request.amount, request.amount)
            .await
            .inspect_err(|error| self.report(error, CartOperation::UpdateProductAmount))
    }

    /// Set `product_id` to `amount`, provided `checked` is strictly below the stock level.
    async fn apply_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
        checked: u32,
    ) -> Result<Cart, CartStoreError> {
        if !self.cart.contains(product_id) {
            return Err(CartStoreError::NotFound(product_id));
        }

        let stock = self.catalog.stock(product_id).await?;

        if checked >= stock.amount {
            return Err(CartStoreError::OutOfStock {
                product: product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        next.set_amount(product_id, amount)?;

        self.commit(next).await
    }

    /// Persist `next` and, only once that succeeds, make it the current cart.
    async fn commit(&mut self, next: Cart) -> Result<Cart, CartStoreError> {
        let blob = codec::encode(&next)?;

        self.storage.set(&self.storage_key, blob).await?;

        self.cart = next;
        self.snapshots.send_replace(self.cart.clone());

        debug!(products = self.cart.len(), "cart persisted");

        Ok(self.cart.clone())
    }

    fn report(&self, error: &CartStoreError, operation: CartOperation) {
        let kind = error.notification(operation);

        warn!(?operation, ?kind, %error, "cart operation failed");

        self.notifier.notify(kind);
    }
}

fn send<T>(reply: Reply<T>, result: Result<T, CartStoreError>) {
    if reply.send(result).is_err() {
        debug!("caller went away before the cart store replied");
    }
}
