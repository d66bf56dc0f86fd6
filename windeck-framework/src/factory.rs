use std::any::{self, Any};

use indexmap::IndexMap;

use crate::window::{HeadlessWindow, RenderWindowCollection};

type Constructor = Box<dyn Fn() -> Box<dyn Any>>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Type {0:?} is already registered")]
    AlreadyRegistered(String),
    #[error("Type {0:?} is not registered")]
    NotRegistered(String),
    #[error("Type {name:?} does not construct a {expected}")]
    TypeMismatch { name: String, expected: &'static str },
}

/// Maps type names to constructors.
///
/// Built once during start up and handed to whoever needs to create objects
/// by name.
#[derive(Default)]
pub struct ObjectFactory {
    constructors: IndexMap<String, Constructor>,
}

impl ObjectFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory knowing about every type this crate provides
    pub fn with_defaults() -> Self {
        let mut factory = Self::new();
        factory.insert("RenderWindowCollection", RenderWindowCollection::new);
        factory.insert("HeadlessWindow", HeadlessWindow::default);
        factory
    }

    pub fn register<F, T>(&mut self, name: &str, constructor: F) -> Result<(), FactoryError>
    where
        F: Fn() -> T + 'static,
        T: Any,
    {
        if self.constructors.contains_key(name) {
            return Err(FactoryError::AlreadyRegistered(name.to_owned()));
        }

        self.insert(name, constructor);
        Ok(())
    }

    /// Registers `constructor` under `name`, replacing any previous one.
    ///
    /// Returns `true` if an existing constructor got replaced.
    pub fn register_override<F, T>(&mut self, name: &str, constructor: F) -> bool
    where
        F: Fn() -> T + 'static,
        T: Any,
    {
        self.insert(name, constructor)
    }

    pub fn create<T: Any>(&self, name: &str) -> Result<T, FactoryError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| FactoryError::NotRegistered(name.to_owned()))?;

        constructor()
            .downcast::<T>()
            .map(|object| *object)
            .map_err(|_| FactoryError::TypeMismatch {
                name: name.to_owned(),
                expected: any::type_name::<T>(),
            })
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    fn insert<F, T>(&mut self, name: &str, constructor: F) -> bool
    where
        F: Fn() -> T + 'static,
        T: Any,
    {
        let boxed: Constructor = Box::new(move || Box::new(constructor()) as Box<dyn Any>);
        let replaced = self.constructors.insert(name.to_owned(), boxed).is_some();

        if replaced {
            debug!("Overriding {:?} with {}", name, any::type_name::<T>());
        } else {
            debug!("Registering {:?} as {}", name, any::type_name::<T>());
        }
        replaced
    }
}
