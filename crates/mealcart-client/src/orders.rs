//! # Order Submission
//!
//! POSTs the order document to the remote store's orders collection.
//!
//! ```text
//! POST <base>/orders.json
//! Content-Type: application/json
//!
//! {
//!   "user": { "name": "...", "street": "...", "city": "...", "postalCode": "..." },
//!   "orderedItems": [ { "id": "m1", "name": "Sushi", "amount": 2, "price": 22.99 } ]
//! }
//! ```
//!
//! One attempt per call. The response body is never read.

use mealcart_core::{ContactInfo, LineItem, Order};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::StorefrontConfig;
use crate::error::{ConfigResult, SubmitError};

/// Sends orders to the remote store.
#[derive(Debug, Clone)]
pub struct OrderSubmitter {
    client: Client,
    orders_url: Url,
    check_status: bool,
}

impl OrderSubmitter {
    /// Creates a submitter for the configured orders URL using `client`.
    pub fn new(client: Client, config: &StorefrontConfig) -> ConfigResult<Self> {
        Ok(OrderSubmitter {
            client,
            orders_url: config.orders_url()?,
            check_status: config.orders.check_status,
        })
    }

    /// Creates a submitter with its own HTTP client built from `config`.
    pub fn from_config(config: &StorefrontConfig) -> ConfigResult<Self> {
        Self::new(config.http_client()?, config)
    }

    /// The URL orders are posted to.
    pub fn orders_url(&self) -> &Url {
        &self.orders_url
    }

    /// Submits `items` for delivery to `contact`.
    pub async fn submit_order(
        &self,
        contact: &ContactInfo,
        items: &[LineItem],
    ) -> Result<(), SubmitError> {
        let order = Order::new(contact.clone(), items.to_vec());
        self.submit(&order).await
    }

    /// Submits a prepared order.
    ///
    /// ## Errors
    /// - `SubmitError::Serialization` if the order cannot be encoded
    /// - `SubmitError::Transport` if no response arrives
    /// - `SubmitError::Status` for a non-2xx response, unless status checks
    ///   are turned off
    #[instrument(skip(self, order), fields(url = %self.orders_url, items = order.ordered_items.len()))]
    pub async fn submit(&self, order: &Order) -> Result<(), SubmitError> {
        let body = serde_json::to_vec(order)?;

        let response = self
            .client
            .post(self.orders_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if self.check_status {
                warn!(status = status.as_u16(), "Order rejected by store");
                return Err(SubmitError::Status {
                    status: status.as_u16(),
                });
            }
            warn!(
                status = status.as_u16(),
                "Order store returned an error status; treating as submitted"
            );
        }

        info!(total = %order.total(), "Order submitted");
        Ok(())
    }
}
