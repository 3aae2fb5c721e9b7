//! Carts service errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::{
    domain::carts::{
        models::{ProductId, UserId},
        store::StoreError,
    },
    operation::Interrupted,
};

/// Step of a cart operation that talked to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Opening the transaction.
    Begin,

    /// Reading or writing the cart row.
    Cart,

    /// Reading or writing line items.
    Items,

    /// Committing the transaction.
    Commit,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Begin => "tx",
            Self::Cart => "cart",
            Self::Items => "items",
            Self::Commit => "commit",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("user id must be positive, got {0}")]
    UserId(UserId),

    #[error("product id must be positive, got {0}")]
    ProductId(ProductId),

    #[error("quantity for product {product_id} must be positive, got {quantity}")]
    Quantity { product_id: ProductId, quantity: i64 },

    #[error("quantity for product {0} overflows")]
    QuantityOverflow(ProductId),
}

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("operation deadline exceeded")]
    DeadlineExceeded,

    #[error("cart not found")]
    NotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("{phase}: storage error")]
    Storage {
        phase: Phase,

        #[source]
        source: StoreError,
    },
}

impl CartsServiceError {
    /// Attach the failing phase to a storage error.
    #[must_use]
    pub fn storage(phase: Phase, source: StoreError) -> Self {
        match source {
            StoreError::NotFound => Self::NotFound,
            source => Self::Storage { phase, source },
        }
    }

    /// Phase that failed, when the error came from storage.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Storage { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}

impl From<Interrupted> for CartsServiceError {
    fn from(interrupted: Interrupted) -> Self {
        match interrupted {
            Interrupted::Cancelled => Self::Cancelled,
            Interrupted::DeadlineExceeded => Self::DeadlineExceeded,
        }
    }
}
