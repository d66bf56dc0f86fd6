use std::{fmt, io, iter::FusedIterator, ptr, rc::Rc, slice};

use crate::describe::{Describe, Indent};

/// Ordered list of shared references to objects owned elsewhere.
///
/// The collection only holds an `Rc` handle per entry, so removing an entry
/// (or dropping the whole collection) never destroys an object someone else
/// still holds. Entries are compared by identity, not by value.
pub struct Collection<T: ?Sized> {
    items: Vec<Rc<T>>,
}

impl<T: ?Sized> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` at the end.
    pub fn add(&mut self, item: Rc<T>) {
        self.items.push(item)
    }

    /// Inserts `item` before position `index`, past the end it is appended.
    pub fn insert_at(&mut self, index: usize, item: Rc<T>) {
        let index = index.min(self.items.len());
        self.items.insert(index, item)
    }

    /// Puts `item` at `index` and hands back the previous entry.
    pub fn replace(&mut self, index: usize, item: Rc<T>) -> Option<Rc<T>> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, item))
    }

    /// Removes the first entry that is the very same object as `item`.
    ///
    /// Returns `false` and leaves the collection untouched when `item` is not
    /// in it.
    pub fn remove(&mut self, item: &Rc<T>) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => {
                trace!("Tried to remove an item that is not in the collection");
                false
            }
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Rc<T>> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn remove_all(&mut self) {
        self.items.clear()
    }

    /// Position of the first entry that is the very same object as `item`.
    pub fn index_of(&self, item: &Rc<T>) -> Option<usize> {
        self.items.iter().position(|i| same_object(i, item))
    }

    pub fn contains(&self, item: &Rc<T>) -> bool {
        self.index_of(item).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&Rc<T>> {
        self.items.get(index)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in insertion order. Use `.rev()` to walk backwards.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Rc<T>),
    {
        self.iter().for_each(f)
    }
}

/// Identity check that ignores vtable pointers of trait objects.
fn same_object<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl<T: ?Sized> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow clone, the new collection refers to the same objects.
impl<T: ?Sized> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: ?Sized> Describe for Collection<T> {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()> {
        writeln!(sink, "{}Number Of Items: {}", indent, self.count())
    }
}

impl<T: ?Sized> Extend<Rc<T>> for Collection<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T: ?Sized> FromIterator<Rc<T>> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a Collection<T> {
    type Item = &'a Rc<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Collection`].
pub struct Iter<'a, T: ?Sized> {
    inner: slice::Iter<'a, Rc<T>>,
}

impl<'a, T: ?Sized> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a Rc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: ?Sized> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T: ?Sized> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T: ?Sized> FusedIterator for Iter<'a, T> {}
