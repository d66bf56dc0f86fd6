#[macro_use]
extern crate log;

pub mod collection;
pub mod describe;
pub mod factory;
pub mod window;

pub use collection::Collection;
pub use describe::{Describe, Indent};
pub use factory::{FactoryError, ObjectFactory};
pub use window::{HeadlessWindow, RenderWindow, RenderWindowCollection};
