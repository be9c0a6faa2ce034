//! Destinations for handler failures.

use crate::bounded::{Rc, Send, Sync};
use crate::Failure;

use std::fmt::Debug;

use tracing::Level;

/// Receives the failure of a wrapped handler.
///
/// A sink is called at most once per call of a [`Route`](crate::Route),
/// and only when the handler failed. Panics raised by the sink itself are
/// not caught.
pub trait ErrorSink<E>: Send + Sync {
    /// Handle the failure of a handler.
    fn on_error(&self, failure: Failure<E>);
}

impl<E, S> ErrorSink<E> for &S
where
    S: ErrorSink<E> + ?Sized,
{
    fn on_error(&self, failure: Failure<E>) {
        S::on_error(self, failure)
    }
}

impl<E, S> ErrorSink<E> for Rc<S>
where
    S: ErrorSink<E> + ?Sized,
{
    fn on_error(&self, failure: Failure<E>) {
        S::on_error(self, failure)
    }
}

impl<E, S> ErrorSink<E> for Box<S>
where
    S: ErrorSink<E> + ?Sized,
{
    fn on_error(&self, failure: Failure<E>) {
        S::on_error(self, failure)
    }
}

/// A sink that reports failures as `tracing` events.
///
/// This is the default sink of [`wrap`](crate::wrap). Events are emitted at
/// [`Level::ERROR`] unless configured otherwise with [`LogSink::with_level`].
#[derive(Clone, Copy, Debug)]
pub struct LogSink {
    level: Level,
}

impl LogSink {
    /// Create a sink that logs at the `ERROR` level.
    pub fn new() -> Self {
        Self {
            level: Level::ERROR,
        }
    }

    /// Set the level failures are logged at.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// The level failures are logged at.
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ErrorSink<E> for LogSink
where
    E: Debug,
{
    fn on_error(&self, failure: Failure<E>) {
        // tracing requires the level of an event to be a constant
        if self.level == Level::ERROR {
            tracing::error!(?failure, "unhandled route failure");
        } else if self.level == Level::WARN {
            tracing::warn!(?failure, "unhandled route failure");
        } else if self.level == Level::INFO {
            tracing::info!(?failure, "unhandled route failure");
        } else if self.level == Level::DEBUG {
            tracing::debug!(?failure, "unhandled route failure");
        } else {
            tracing::trace!(?failure, "unhandled route failure");
        }
    }
}

/// A sink that silently discards failures.
///
/// This is the default sink of [`mock::wrap`](crate::mock::wrap).
/// It emits no `tracing` events. Panics raised by a handler still pass
/// through the process panic hook before they reach the sink.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct NoopSink;

impl NoopSink {
    /// Create a new instance of this type.
    pub fn new() -> Self {
        Self
    }
}

impl<E> ErrorSink<E> for NoopSink {
    fn on_error(&self, _: Failure<E>) {}
}

/// Create a sink from a closure.
///
/// ```rust
/// use async_route::{sink_fn, Failure};
///
/// let sink = sink_fn(|failure: Failure<String>| {
///     eprintln!("request failed: {}", failure);
/// });
/// ```
pub fn sink_fn<F, E>(f: F) -> FnSink<F>
where
    F: Fn(Failure<E>) + Send + Sync,
{
    FnSink { f }
}

/// A sink created from a closure.
///
/// See [`sink_fn`] for details.
#[derive(Clone)]
pub struct FnSink<F> {
    f: F,
}

impl<F, E> ErrorSink<E> for FnSink<F>
where
    F: Fn(Failure<E>) + Send + Sync,
{
    fn on_error(&self, failure: Failure<E>) {
        (self.f)(failure)
    }
}
