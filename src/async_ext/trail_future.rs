//! Future wrapper that tags a call site when the inner future fails.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::AsErrorSource;
use crate::types::{Location, TrailError};

pin_project! {
    /// A Future wrapper that absorbs its error into a [`TrailError`].
    ///
    /// On `Err`, the error goes through [`TrailError::from_source`] with the
    /// stored location. Successful output passes through untouched.
    ///
    /// # Cancel Safety
    ///
    /// `TrailFuture` is cancel-safe if the inner future is cancel-safe.
    #[must_use = "futures do nothing unless polled"]
    pub struct TrailFuture<Fut> {
        #[pin]
        future: Fut,
        location: Location<'static>,
        terminated: bool,
    }
}

impl<Fut> TrailFuture<Fut> {
    /// Wraps `future`, tagging `location` if it fails.
    #[inline]
    pub fn new(future: Fut, location: Location<'static>) -> Self {
        Self { future, location, terminated: false }
    }
}

impl<Fut, T, E> Future for TrailFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: AsErrorSource,
{
    type Output = Result<T, TrailError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        debug_assert!(!*this.terminated, "TrailFuture polled after completion");
        let location = *this.location;

        match this.future.poll(cx) {
            Poll::Ready(result) => {
                *this.terminated = true;
                Poll::Ready(result.map_err(|err| TrailError::from_source(&err, location)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<Fut, T, E> FusedFuture for TrailFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: AsErrorSource,
{
    fn is_terminated(&self) -> bool {
        self.terminated || self.future.is_terminated()
    }
}
