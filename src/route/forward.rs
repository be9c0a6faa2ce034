use crate::handler::Outcome;
use crate::{ErrorSink, Failure, Panic};

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;

use futures_util::task::noop_waker_ref;

pin_project_lite::pin_project! {
    /// The future returned by [`Route::call`](crate::Route::call).
    ///
    /// Resolves once the handler completes. If the handler failed,
    /// the error sink has been called by the time this future resolves.
    ///
    /// Dropping this future before it was ever polled still reports
    /// failures that happened without waiting: a panic while calling
    /// the handler, or a handler future that fails on its first poll.
    /// Only failures that have not happened yet are abandoned.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Forward<F, E, K>
    where
        F: Future,
        F::Output: Outcome<E>,
        K: ErrorSink<E>,
    {
        #[pin]
        future: Option<F>,
        failed: Option<Failure<E>>,
        polled: bool,
        sink: K,
    }

    impl<F, E, K> PinnedDrop for Forward<F, E, K>
    where
        F: Future,
        F::Output: Outcome<E>,
        K: ErrorSink<E>,
    {
        fn drop(this: Pin<&mut Self>) {
            if this.polled {
                return;
            }

            // never run handler code while unwinding
            if thread::panicking() {
                let this = this.project();
                if let Some(failure) = this.failed.take() {
                    this.sink.on_error(failure);
                }
                return;
            }

            let mut cx = Context::from_waker(noop_waker_ref());
            let _ = this.settle(&mut cx);
        }
    }
}

impl<F, E, K> Forward<F, E, K>
where
    F: Future,
    F::Output: Outcome<E>,
    K: ErrorSink<E>,
{
    pub(crate) fn new(future: F, sink: K) -> Self {
        Self {
            future: Some(future),
            failed: None,
            polled: false,
            sink,
        }
    }

    // the handler failed before a future could be created
    pub(crate) fn failed(failure: Failure<E>, sink: K) -> Self {
        Self {
            future: None,
            failed: Some(failure),
            polled: false,
            sink,
        }
    }

    fn settle(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut this = self.project();
        *this.polled = true;

        if let Some(failure) = this.failed.take() {
            this.sink.on_error(failure);
            return Poll::Ready(());
        }

        let future = match this.future.as_mut().as_pin_mut() {
            Some(future) => future,
            None => return Poll::Ready(()),
        };

        let failure = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => return Poll::Pending,
            Ok(Poll::Ready(outcome)) => outcome.into_rejection().map(Failure::Rejected),
            Err(payload) => Some(Failure::Panicked(Panic::new(payload))),
        };

        // a completed or panicked future must not be polled again
        this.future.set(None);

        if let Some(failure) = failure {
            this.sink.on_error(failure);
        }

        Poll::Ready(())
    }
}

impl<F, E, K> Future for Forward<F, E, K>
where
    F: Future,
    F::Output: Outcome<E>,
    K: ErrorSink<E>,
{
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.settle(cx)
    }
}
