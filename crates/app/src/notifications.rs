//! Failure notifications.
//!
//! Cart operations report failures on a broadcast channel carrying one of a fixed set of
//! user-facing messages. Publishing never fails an operation; with no subscribers the
//! notification is dropped.

use tokio::sync::broadcast::{self, Receiver, Sender};
use tracing::debug;

/// The cart operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl CartOperation {
    /// Notification published when this operation fails for any reason other than stock.
    pub const fn failure(self) -> NotificationKind {
        match self {
            Self::AddProduct => NotificationKind::AddProductFailed,
            Self::RemoveProduct => NotificationKind::RemoveProductFailed,
            Self::UpdateProductAmount => NotificationKind::UpdateAmountFailed,
        }
    }
}

/// Kind of failure notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    AddProductFailed,
    RemoveProductFailed,
    UpdateAmountFailed,
    OutOfStock,
}

impl NotificationKind {
    /// Fixed user-facing message for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::AddProductFailed => "Failed to add product",
            Self::RemoveProductFailed => "Failed to remove product",
            Self::UpdateAmountFailed => "Failed to update product amount",
            Self::OutOfStock => "Requested quantity is out of stock",
        }
    }
}

/// Error notification published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self {
            kind,
            message: kind.message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifier {
    sender: Sender<Notification>,
}

impl Notifier {
    /// Create a notifier buffering up to `capacity` notifications per lagging subscriber.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));

        Self { sender }
    }

    pub fn subscribe(&self) -> Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Publish `kind` to every current subscriber.
    pub fn notify(&self, kind: NotificationKind) {
        if self.sender.send(kind.into()).is_err() {
            debug!(?kind, "no notification subscribers");
        }
    }
}
