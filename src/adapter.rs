use crate::{LogSink, NoopSink, Route};

/// A way of wrapping handlers.
///
/// Code that wraps handlers can be generic over this trait instead of
/// calling [`wrap`](crate::wrap) directly, so that tests can inject
/// [`MockAsyncRoute`] and keep failures out of the logs.
///
/// ```rust
/// use async_route::{Adapter, AsyncRoute, MockAsyncRoute};
///
/// fn routes<A: Adapter>(adapter: &A) {
///     let _health = adapter.wrap(|_: (), _: ()| async { Ok::<_, String>(()) });
/// }
///
/// routes(&AsyncRoute::new());
/// routes(&MockAsyncRoute::new());
/// ```
pub trait Adapter {
    /// `true` if this adapter is a test double.
    const MOCK: bool;

    /// The default error sink of wrapped handlers.
    type Sink;

    /// Wrap a handler with this adapter's default sink.
    fn wrap<H>(&self, handler: H) -> Route<H, Self::Sink>;
}

/// The production adapter.
///
/// Wraps handlers with a [`LogSink`], like [`wrap`](crate::wrap).
#[derive(Clone, Copy, Debug, Default)]
pub struct AsyncRoute {
    sink: LogSink,
}

impl AsyncRoute {
    /// Create an adapter that logs failures at the `ERROR` level.
    pub fn new() -> Self {
        Self {
            sink: LogSink::new(),
        }
    }

    /// Create an adapter that logs failures with the given sink.
    pub fn with_sink(sink: LogSink) -> Self {
        Self { sink }
    }
}

impl Adapter for AsyncRoute {
    const MOCK: bool = false;

    type Sink = LogSink;

    fn wrap<H>(&self, handler: H) -> Route<H, LogSink> {
        Route::new(handler, self.sink)
    }
}

/// The test double adapter.
///
/// Wraps handlers with a [`NoopSink`], like [`mock::wrap`](crate::mock::wrap).
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct MockAsyncRoute;

impl MockAsyncRoute {
    /// Create a new instance of this type.
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for MockAsyncRoute {
    const MOCK: bool = true;

    type Sink = NoopSink;

    fn wrap<H>(&self, handler: H) -> Route<H, NoopSink> {
        crate::mock::wrap(handler)
    }
}
