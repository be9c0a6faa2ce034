use crate::Handler;

use std::convert::Infallible;
use std::future::{self, Future};
use std::pin::Pin;
use std::task::{self, Poll};

/// Create a handler from a function that returns its result immediately.
///
/// The result is wrapped in an already completed future.
///
/// ```rust
/// use async_route::handler::ready_fn;
///
/// let route = async_route::wrap(ready_fn(|req: u32, _: ()| {
///     if req == 0 { Err("zero") } else { Ok(req) }
/// }));
/// ```
pub fn ready_fn<F>(f: F) -> ReadyFn<F> {
    ReadyFn { f }
}

/// A handler that returns its result immediately.
///
/// See [`ready_fn`] for details.
#[derive(Clone)]
pub struct ReadyFn<F> {
    f: F,
}

impl<F, Req, Res, T, E> Handler<Req, Res> for ReadyFn<F>
where
    F: Fn(Req, Res) -> Result<T, E>,
{
    type Output = T;
    type Rejection = E;
    type Future = future::Ready<Result<T, E>>;

    fn call(&self, req: Req, res: Res) -> Self::Future {
        future::ready((self.f)(req, res))
    }
}

/// Create a handler from an asynchronous function that cannot fail.
///
/// The handler can still panic, which is reported to the
/// error sink like any other failure.
pub fn infallible_fn<F>(f: F) -> InfallibleFn<F> {
    InfallibleFn { f }
}

/// A handler that cannot return an error.
///
/// See [`infallible_fn`] for details.
#[derive(Clone)]
pub struct InfallibleFn<F> {
    f: F,
}

impl<F, Req, Res, O> Handler<Req, Res> for InfallibleFn<F>
where
    F: Fn(Req, Res) -> O,
    O: Future,
{
    type Output = O::Output;
    type Rejection = Infallible;
    type Future = InfallibleFut<O>;

    fn call(&self, req: Req, res: Res) -> Self::Future {
        InfallibleFut {
            future: (self.f)(req, res),
        }
    }
}

pin_project_lite::pin_project! {
    /// The future returned by an [`InfallibleFn`] handler.
    pub struct InfallibleFut<F> {
        #[pin]
        future: F,
    }
}

impl<F: Future> Future for InfallibleFut<F> {
    type Output = Result<F::Output, Infallible>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Ok)
    }
}
