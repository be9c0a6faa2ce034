use crate::bounded::{self, BoxFuture, Send, Sync};

use std::fmt;

bounded::cfg_send! {
    type Call<Req, Res> = Box<dyn Fn(Req, Res) -> BoxFuture<'static, ()> + Send + Sync>;
}

bounded::cfg_not_send! {
    type Call<Req, Res> = Box<dyn Fn(Req, Res) -> BoxFuture<'static, ()>>;
}

/// A type-erased [`Route`](crate::Route).
///
/// Useful for storing routes with different handlers
/// and sinks in the same collection.
pub struct BoxRoute<Req, Res> {
    call: Call<Req, Res>,
}

impl<Req, Res> BoxRoute<Req, Res> {
    pub(crate) fn new<F>(call: F) -> Self
    where
        F: Fn(Req, Res) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        Self {
            call: Box::new(call),
        }
    }

    /// Call the route with a request and a response.
    ///
    /// See [`Route::call`](crate::Route::call) for details.
    pub fn call(&self, req: Req, res: Res) -> BoxFuture<'static, ()> {
        (self.call)(req, res)
    }
}

impl<Req, Res> fmt::Debug for BoxRoute<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxRoute").finish_non_exhaustive()
    }
}
