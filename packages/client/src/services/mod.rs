//! REST service wrappers, one per backend resource
//!
//! Every service routes through the [`Gateway`](crate::gateway::Gateway) and
//! returns a [`Envelope`](crate::api::Envelope). Transport failures are
//! folded into a `success == false` envelope so callers see one shape for
//! every business outcome; only a session expiry or a response that cannot
//! be parsed at all escapes as an error. No retries, no caching: every call
//! is a fresh round trip.

mod categories;
mod products;
mod users;

pub use categories::CategoryService;
pub use products::ProductService;
pub use users::UserService;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::api::Envelope;
use crate::auth::CONNECTIVITY_MESSAGE;
use crate::error::{ClientError, ClientResult};

/// Fold a gateway result into an envelope
///
/// Non-2xx responses still carry an envelope body and pass through as-is.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    result: ClientResult<Response>,
) -> ClientResult<Envelope<T>> {
    match result {
        Ok(response) => {
            let status = response.status();
            response.json::<Envelope<T>>().await.map_err(|e| {
                ClientError::Serialization(format!(
                    "invalid envelope from server (status {}): {}",
                    status, e
                ))
            })
        }
        Err(err) if err.is_network_error() => {
            tracing::warn!("request failed: {}", err);
            Ok(Envelope::failure(CONNECTIVITY_MESSAGE))
        }
        Err(err) => Err(err),
    }
}

/// Query tuple for the `/paged` endpoints
pub(crate) fn paged_query(query: crate::pagination::PageQuery) -> [(&'static str, String); 2] {
    [
        ("page", query.page.to_string()),
        ("pageSize", query.page_size.to_string()),
    ]
}
