//! Asynchronous functions that handle a request and a response.

mod function;

pub use function::{infallible_fn, ready_fn, InfallibleFn, InfallibleFut, ReadyFn};

use std::future::Future;

/// An asynchronous request handler.
///
/// You should not need to implement this trait directly, it is
/// automatically implemented for functions of the form
/// `Fn(Req, Res) -> impl Future<Output = Result<T, E>>`.
/// Handlers that return their result immediately can be adapted
/// with [`ready_fn`], and handlers that cannot fail with
/// [`infallible_fn`].
pub trait Handler<Req, Res> {
    /// The value the handler resolves to when it succeeds.
    type Output;

    /// An error that can occur when calling the handler.
    type Rejection;

    /// The future returned by [`Handler::call`].
    type Future: Future<Output = Result<Self::Output, Self::Rejection>>;

    /// Call the handler with a request and a response.
    fn call(&self, req: Req, res: Res) -> Self::Future;
}

impl<F, Req, Res, O, T, E> Handler<Req, Res> for F
where
    F: Fn(Req, Res) -> O,
    O: Future<Output = Result<T, E>>,
{
    type Output = T;
    type Rejection = E;
    type Future = O;

    fn call(&self, req: Req, res: Res) -> Self::Future {
        self(req, res)
    }
}

/// The result of a handler's future.
///
/// Implemented for `Result`, this is how a [`Route`](crate::Route)
/// tells a handler's success from its failure.
pub trait Outcome<E> {
    /// Returns the error, or `None` if the handler succeeded.
    fn into_rejection(self) -> Option<E>;
}

impl<T, E> Outcome<E> for Result<T, E> {
    fn into_rejection(self) -> Option<E> {
        self.err()
    }
}
