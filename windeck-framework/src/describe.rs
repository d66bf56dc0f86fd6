use std::{fmt, io};

/// Deepest indentation level, further nesting is rendered flat.
pub const MAX_INDENT_LEVEL: usize = 20;

/// Indentation of a diagnostic description, two spaces per level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Indent {
    level: usize,
}

impl Indent {
    pub fn new(level: usize) -> Self {
        Self {
            level: level.min(MAX_INDENT_LEVEL),
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Indentation for nested objects
    pub fn next_level(self) -> Self {
        Self::new(self.level + 1)
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.level * 2)
    }
}

/// Human readable dump of an object's state, for debugging only.
///
/// Types built on top of another describable type should describe the inner
/// value first and append their own fields after it.
pub trait Describe {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()>;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()> {
        (**self).describe(sink, indent)
    }
}

impl<T: Describe + ?Sized> Describe for std::rc::Rc<T> {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()> {
        (**self).describe(sink, indent)
    }
}
