//! Wrap asynchronous request handlers so that their failures are never lost.
//!
//! A handler is any function of a request and a response that returns a
//! future resolving to a `Result`. [`wrap`] turns it into a [`Route`]:
//! calling the route runs the handler and, if it returns an error or
//! panics, hands the [`Failure`] to an [`ErrorSink`] instead of
//! propagating it.
//!
//! ```rust
//! # async fn run() {
//! use async_route::{sink_fn, wrap, Failure};
//!
//! let route = wrap(|path: &'static str, _: ()| async move {
//!     match path {
//!         "/" => Ok("index"),
//!         _ => Err(format!("no route for {}", path)),
//!     }
//! })
//! .on_error(sink_fn(|failure: Failure<String>| eprintln!("{}", failure)));
//!
//! route.call("/missing", ()).await;
//! # }
//! ```
//!
//! An error sink receives a [`Failure`] rather than the handler's bare
//! error, because a panic has no error value of the handler's type.
//! [`Failure::into_rejection`] (or [`Failure::rejection`] by reference)
//! returns the handler's original error unchanged:
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use std::sync::{Arc, Mutex};
//! use async_route::{sink_fn, wrap, Failure};
//!
//! let seen = Arc::new(Mutex::new(None));
//! let route = wrap(|_: (), _: ()| async { Err::<(), _>(404_u16) }).on_error({
//!     let seen = seen.clone();
//!     sink_fn(move |failure: Failure<u16>| {
//!         *seen.lock().unwrap() = failure.into_rejection();
//!     })
//! });
//!
//! route.call((), ()).await;
//! assert_eq!(*seen.lock().unwrap(), Some(404));
//! # }
//! ```
//!
//! Requests and responses are passed to the handler untouched.

mod adapter;
mod bounded;
mod failure;
mod route;
mod sink;

pub mod handler;
pub mod mock;

pub use adapter::{Adapter, AsyncRoute, MockAsyncRoute};
pub use failure::{Failure, Panic};
pub use handler::Handler;
pub use route::{wrap, BoxRoute, Forward, Route};
pub use sink::{sink_fn, ErrorSink, FnSink, LogSink, NoopSink};

pub use bounded::BoxFuture;
