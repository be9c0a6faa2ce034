use std::future::Future;
use std::pin::Pin;

pub use std::rc::Rc;

pub trait Send {}

impl<T: ?Sized> Send for T {}

pub trait Sync {}

impl<T: ?Sized> Sync for T {}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
