use core::future::Future;

use crate::async_ext::TrailFuture;
use crate::traits::AsErrorSource;
use crate::types::Location;

/// Extension trait for futures resolving to `Result<T, E>`.
///
/// # Examples
///
/// ```
/// use error_trail::async_ext::FutureTrailExt;
/// use error_trail::here;
///
/// # async fn run() {
/// let err = async { Err::<(), _>("connection reset") }
///     .trail_at(here!())
///     .await
///     .unwrap_err();
///
/// assert!(err.to_string().contains("connection reset"));
/// # }
/// ```
pub trait FutureTrailExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Tags `location` onto the error, if the future resolves to one.
    #[inline]
    fn trail_at(self, location: Location<'static>) -> TrailFuture<Self>
    where
        E: AsErrorSource,
    {
        TrailFuture::new(self, location)
    }
}

impl<F, T, E> FutureTrailExt<T, E> for F where F: Future<Output = Result<T, E>> {}
