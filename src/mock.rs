//! A test double for [`wrap`](crate::wrap).
//!
//! Handlers wrapped here behave exactly like handlers wrapped by
//! [`wrap`](crate::wrap), except that failures are discarded by default
//! instead of being logged. A sink can still be supplied with
//! [`Route::on_error`] or [`Route::call_with`] to observe them.
//!
//! A panicking handler is still reported to the process panic hook,
//! which prints the panic message to stderr before the panic is caught.
//! Install a silent hook with [`std::panic::set_hook`] if a test must keep
//! stderr clean.

use crate::{NoopSink, Route};

/// Wrap a handler, discarding its failures by default.
///
/// ```rust
/// # async fn run() {
/// let route = async_route::mock::wrap(|_: (), _: ()| async { Err::<(), _>("oops") });
///
/// // nothing is logged
/// route.call((), ()).await;
/// # }
/// ```
pub fn wrap<H>(handler: H) -> Route<H, NoopSink> {
    Route::new(handler, NoopSink::new())
}
