//! Request Deadlines

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;

use crate::error::{CatalogError, CatalogResult};

/// Resolve `request`, or fail with [`CatalogError::Timeout`] once `deadline` fires first
pub async fn race_deadline<T>(
    request: impl Future<Output = CatalogResult<T>>,
    deadline: impl Future<Output = ()>,
    millis: u32,
) -> CatalogResult<T> {
    pin_mut!(request);
    pin_mut!(deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(CatalogError::Timeout { millis }),
    }
}

/// Race `request` against a browser timer of `millis` milliseconds
pub async fn with_deadline<T>(
    millis: u32,
    request: impl Future<Output = CatalogResult<T>>,
) -> CatalogResult<T> {
    race_deadline(request, TimeoutFuture::new(millis), millis).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::{pending, ready};

    #[tokio::test]
    async fn test_request_wins() {
        let result = race_deadline(ready(Ok(7)), pending::<()>(), 100).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn test_deadline_wins() {
        let result: CatalogResult<u32> = race_deadline(pending(), ready(()), 100).await;
        assert_eq!(result, Err(CatalogError::Timeout { millis: 100 }));
    }

    #[tokio::test]
    async fn test_request_error_passes_through() {
        let result: CatalogResult<u32> =
            race_deadline(ready(Err(CatalogError::Network("refused".into()))), pending::<()>(), 100).await;
        assert_eq!(result, Err(CatalogError::Network("refused".into())));
    }
}
