use std::any::Any;
use std::error::Error;
use std::fmt::{self, Debug, Display};

/// Why a wrapped handler did not complete successfully.
///
/// This is the value an [`ErrorSink`](crate::ErrorSink) receives. A handler
/// that returns `Err(e)` produces [`Failure::Rejected`] holding `e` exactly
/// as the handler returned it. A handler that panics, either while it is
/// called or while its future is polled, produces [`Failure::Panicked`].
pub enum Failure<E> {
    /// The handler returned an error.
    Rejected(E),
    /// The handler panicked.
    Panicked(Panic),
}

impl<E> Failure<E> {
    /// Returns the handler's error, if it returned one.
    pub fn rejection(&self) -> Option<&E> {
        match self {
            Failure::Rejected(err) => Some(err),
            Failure::Panicked(_) => None,
        }
    }

    /// Converts this failure into the handler's error, if it returned one.
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Failure::Rejected(err) => Some(err),
            Failure::Panicked(_) => None,
        }
    }

    /// Returns `true` if the handler panicked.
    pub fn is_panic(&self) -> bool {
        matches!(self, Failure::Panicked(_))
    }

    /// Maps the handler's error with a function, leaving panics untouched.
    pub fn map<F, O>(self, f: F) -> Failure<O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Failure::Rejected(err) => Failure::Rejected(f(err)),
            Failure::Panicked(panic) => Failure::Panicked(panic),
        }
    }
}

impl<E: Debug> Debug for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Rejected(err) => f.debug_tuple("Rejected").field(err).finish(),
            Failure::Panicked(panic) => f.debug_tuple("Panicked").field(panic).finish(),
        }
    }
}

impl<E: Display> Display for Failure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Rejected(err) => Display::fmt(err, f),
            Failure::Panicked(panic) => Display::fmt(panic, f),
        }
    }
}

impl<E> Error for Failure<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Failure::Rejected(err) => Some(err),
            Failure::Panicked(_) => None,
        }
    }
}

impl<E> From<Panic> for Failure<E> {
    fn from(panic: Panic) -> Self {
        Failure::Panicked(panic)
    }
}

/// The payload of a handler that panicked.
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, if the handler panicked with a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            return Some(s);
        }

        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Consumes the panic, returning the original payload.
    ///
    /// The payload can be passed to [`std::panic::resume_unwind`]
    /// to continue unwinding.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Panic").field(&message).finish(),
            None => f.debug_tuple("Panic").finish_non_exhaustive(),
        }
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "handler panicked: {}", message),
            None => f.write_str("handler panicked"),
        }
    }
}

impl Error for Panic {}
