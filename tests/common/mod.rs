#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_route::{sink_fn, ErrorSink, Failure};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

pub type Request = http::Request<()>;
pub type Response = http::Response<()>;

pub fn request(uri: &str) -> Request {
    http::Request::builder().uri(uri).body(()).unwrap()
}

pub fn response() -> Response {
    http::Response::new(())
}

/// Failures reported to a sink, in order.
pub struct Spy<E> {
    failures: Arc<Mutex<Vec<Failure<E>>>>,
}

impl<E: Send + 'static> Spy<E> {
    pub fn new() -> Self {
        Self {
            failures: Arc::default(),
        }
    }

    pub fn sink(&self) -> impl ErrorSink<E> + Clone {
        let failures = self.failures.clone();
        sink_fn(move |failure: Failure<E>| failures.lock().unwrap().push(failure))
    }

    pub fn count(&self) -> usize {
        self.failures.lock().unwrap().len()
    }

    pub fn take(&self) -> Vec<Failure<E>> {
        std::mem::take(&mut *self.failures.lock().unwrap())
    }
}

/// Counts how many times a handler was called.
#[derive(Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Records the level of every `tracing` event on the current thread.
#[derive(Clone, Default)]
pub struct Events(Arc<Mutex<Vec<Level>>>);

impl Events {
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for Events {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Oops {
    pub message: &'static str,
}

pub fn oops() -> Oops {
    Oops { message: "oops" }
}
