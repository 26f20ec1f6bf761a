//! # Checkout
//!
//! Ties the contact form, the cart, and order submission together.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout::confirm                                │
//! │                                                                         │
//! │  ContactForm                                                            │
//! │     │                                                                   │
//! │     ├── any field invalid ──► Invalid(validity)      (no request)      │
//! │     │                                                                   │
//! │     ├── cart empty ─────────► EmptyCart              (no request)      │
//! │     │                                                                   │
//! │     └── status: Submitting                                              │
//! │           POST orders.json with a snapshot of the items                 │
//! │              │                                                          │
//! │              ├── Ok  ──► clear cart, status: Submitted, Submitted{..}  │
//! │              └── Err ──► cart kept,  status: Failed(msg), Err(e)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Concurrent confirms are not deduplicated: two calls submit two orders.

use std::sync::Arc;

use mealcart_core::{ContactForm, ContactValidity, LineItem, Money};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use crate::error::SubmitError;
use crate::orders::OrderSubmitter;
use crate::store::CartStore;

/// Progress of the most recent order submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// The message is meant for display.
    Failed(String),
}

/// What a confirm attempt ended in, other than a submission error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The order was accepted and the cart has been cleared.
    Submitted { items: Vec<LineItem>, total: Money },
    /// The form has invalid fields; nothing was sent.
    Invalid(ContactValidity),
    /// There was nothing to order; nothing was sent.
    EmptyCart,
}

/// Checkout workflow bound to one cart.
#[derive(Debug, Clone)]
pub struct Checkout {
    store: CartStore,
    submitter: OrderSubmitter,
    status: Arc<watch::Sender<SubmissionStatus>>,
}

impl Checkout {
    /// Creates a checkout for the cart held by `store`.
    pub fn new(store: CartStore, submitter: OrderSubmitter) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Checkout {
            store,
            submitter,
            status: Arc::new(status),
        }
    }

    /// Validates the form and submits the cart.
    ///
    /// The cart is cleared only once the store has accepted the order.
    ///
    /// ## Errors
    /// Any `SubmitError` from the submission. The cart is left untouched.
    #[instrument(skip(self, form))]
    pub async fn confirm(&self, form: ContactForm) -> Result<CheckoutOutcome, SubmitError> {
        let contact = match form.into_contact() {
            Ok(contact) => contact,
            Err(validity) => {
                debug!(errors = validity.errors().len(), "Checkout form invalid");
                return Ok(CheckoutOutcome::Invalid(validity));
            }
        };

        let cart = self.store.snapshot();
        if cart.is_empty() {
            debug!("Checkout with an empty cart");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        self.status.send_replace(SubmissionStatus::Submitting);

        match self.submitter.submit_order(&contact, cart.items()).await {
            Ok(()) => {
                self.store.clear_cart();
                self.status.send_replace(SubmissionStatus::Submitted);
                info!(items = cart.item_count(), total = %cart.total_amount(), "Checkout complete");

                let total = cart.total_amount();
                Ok(CheckoutOutcome::Submitted {
                    items: cart.into_items(),
                    total,
                })
            }
            Err(e) => {
                error!(error = %e, "Checkout failed");
                self.status
                    .send_replace(SubmissionStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Subscribes to submission status changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Returns the status to `Idle`, e.g. when the checkout view is closed.
    pub fn reset(&self) {
        self.status.send_replace(SubmissionStatus::Idle);
    }

    /// The cart this checkout submits.
    pub fn store(&self) -> &CartStore {
        &self.store
    }
}
