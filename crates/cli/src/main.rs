//! Storefront cart command-line client.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use storefront::{cart::Cart, products::ProductId};
use storefront_app::{
    cart::{CartStore, CartStoreError, UpdateProductAmount},
    context::{AppContext, AppInitError},
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::util::TryInitError;

use crate::config::{CliConfig, Command};

mod config;
mod logging;
mod render;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error(transparent)]
    Store(#[from] CartStoreError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for its own errors"
        )]
        {
            eprintln!("{}", CliError::from(error));
        }

        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let app = AppContext::from_config(config.app_config()).await?;
    let store = app.cart;
    let mut notifications = store.subscribe();

    let result = execute(&store, config.command).await;

    store.shutdown().await?;

    let mut stderr = io::stderr().lock();

    while let Ok(notification) = notifications.try_recv() {
        render::write_notification(&mut stderr, &notification)?;
    }

    let cart = result?;

    info!(products = cart.len(), "done");

    let mut stdout = io::stdout().lock();

    render::write_cart(&mut stdout, &cart)?;
    stdout.flush()?;

    Ok(())
}

async fn execute(store: &CartStore, command: Command) -> Result<Cart, CartStoreError> {
    match command {
        Command::Show => Ok(store.cart()),
        Command::Add { product } => store.add_product(ProductId::new(product)).await,
        Command::Remove { product } => store.remove_product(ProductId::new(product)).await,
        Command::Update { product, amount } => {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId::new(product),
                    amount,
                })
                .await
        }
    }
}
