use std::future::Future;
use std::pin::Pin;

pub use std::marker::{Send, Sync};
pub use std::sync::Arc as Rc;

/// An dynamically typed [`Future`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
