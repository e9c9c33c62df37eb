//! Async extensions for error-trail.
//!
//! Each `.await` point an error crosses can be tagged like a synchronous
//! call site, without a `map_err` at every step.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use error_trail::async_ext::FutureTrailExt;
//! use error_trail::{here, TrailResult};
//!
//! async fn fetch_user(id: u64) -> TrailResult<User> {
//!     fetch_from_db(id).trail_at(here!()).await
//! }
//! ```

mod future_ext;
mod trail_future;

pub use future_ext::FutureTrailExt;
pub use trail_future::TrailFuture;
