//! Handlers wrapped with an error sink.

mod erased;
mod forward;

pub use erased::BoxRoute;
pub use forward::Forward;

use crate::bounded::{self, Rc};
use crate::{ErrorSink, Failure, Handler, LogSink, Panic};

use std::panic::{self, AssertUnwindSafe};

/// Wrap a handler so that its failures are reported to an error sink.
///
/// Failures are logged through `tracing` by default. Use
/// [`Route::on_error`] to send them somewhere else.
///
/// ```rust
/// # async fn run() {
/// use async_route::wrap;
///
/// async fn greet(name: String, out: &mut String) -> Result<(), String> {
///     if name.is_empty() {
///         return Err("missing name".to_owned());
///     }
///
///     out.push_str(&format!("Hello, {}!", name));
///     Ok(())
/// }
///
/// let route = wrap(|name: String, mut out: String| async move {
///     greet(name, &mut out).await.map(|_| out)
/// });
///
/// // logs "missing name" instead of failing
/// route.call(String::new(), String::new()).await;
/// # }
/// ```
pub fn wrap<H>(handler: H) -> Route<H, LogSink> {
    Route::new(handler, LogSink::new())
}

/// A handler wrapped with an error sink.
///
/// See [`wrap`] for details.
pub struct Route<H, S> {
    handler: H,
    sink: Rc<S>,
}

impl<H, S> Route<H, S> {
    /// Wrap a handler with the given error sink.
    pub fn new(handler: H, sink: S) -> Self {
        Self {
            handler,
            sink: Rc::new(sink),
        }
    }

    /// Replace the default error sink of this route.
    pub fn on_error<O>(self, sink: O) -> Route<H, O> {
        Route::new(self.handler, sink)
    }

    /// Returns a reference to the wrapped handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns a reference to the default error sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Call the handler with a request and a response, reporting any
    /// failure to the route's error sink.
    ///
    /// The handler is called exactly once, immediately. The returned
    /// future resolves to `()` when the handler completes, whether it
    /// succeeded or not; the handler's output is discarded.
    ///
    /// This method never panics because of the handler. Panics raised
    /// while calling the handler, or while polling its future, are
    /// caught and reported as [`Failure::Panicked`].
    ///
    /// Failures that happen without waiting are reported even if the
    /// returned future is dropped without being awaited. A future dropped
    /// before its first poll is driven once, up to the handler's first
    /// suspension point; anything the handler would have done after that
    /// is abandoned along with its failure. Use [`Route::spawn`] to let a
    /// call run to completion in the background.
    pub fn call<Req, Res>(
        &self,
        req: Req,
        res: Res,
    ) -> Forward<H::Future, H::Rejection, Rc<S>>
    where
        H: Handler<Req, Res>,
        S: ErrorSink<H::Rejection>,
    {
        self.call_with(req, res, self.sink.clone())
    }

    /// Call the handler, reporting any failure to `sink` instead of
    /// the route's default sink.
    ///
    /// See [`Route::call`] for details.
    pub fn call_with<Req, Res, K>(
        &self,
        req: Req,
        res: Res,
        sink: K,
    ) -> Forward<H::Future, H::Rejection, K>
    where
        H: Handler<Req, Res>,
        K: ErrorSink<H::Rejection>,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| self.handler.call(req, res))) {
            Ok(future) => Forward::new(future, sink),
            Err(payload) => Forward::failed(Failure::Panicked(Panic::new(payload)), sink),
        }
    }

    /// Erase the types of the handler and sink.
    pub fn boxed<Req, Res>(self) -> BoxRoute<Req, Res>
    where
        H: Handler<Req, Res> + bounded::Send + bounded::Sync + 'static,
        H::Future: bounded::Send + 'static,
        H::Rejection: bounded::Send + 'static,
        S: ErrorSink<H::Rejection> + 'static,
    {
        BoxRoute::new(move |req, res| Box::pin(self.call(req, res)))
    }
}

bounded::cfg_send! {
    #[cfg(feature = "rt")]
    impl<H, S> Route<H, S> {
        /// Call the handler on a new tokio task.
        ///
        /// Failures are still reported to the route's error sink.
        /// The returned handle can be awaited, or dropped to let
        /// the call run in the background.
        pub fn spawn<Req, Res>(&self, req: Req, res: Res) -> tokio::task::JoinHandle<()>
        where
            H: Handler<Req, Res>,
            H::Future: Send + 'static,
            H::Rejection: Send + 'static,
            S: ErrorSink<H::Rejection> + 'static,
        {
            tokio::spawn(self.call(req, res))
        }
    }
}

bounded::cfg_not_send! {
    #[cfg(feature = "rt")]
    impl<H, S> Route<H, S> {
        /// Call the handler on a new task in the current [`tokio::task::LocalSet`].
        ///
        /// Failures are still reported to the route's error sink.
        /// The returned handle can be awaited, or dropped to let
        /// the call run in the background.
        pub fn spawn<Req, Res>(&self, req: Req, res: Res) -> tokio::task::JoinHandle<()>
        where
            H: Handler<Req, Res>,
            H::Future: 'static,
            H::Rejection: 'static,
            S: ErrorSink<H::Rejection> + 'static,
        {
            tokio::task::spawn_local(self.call(req, res))
        }
    }
}

impl<H: Clone, S> Clone for Route<H, S> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            sink: self.sink.clone(),
        }
    }
}
