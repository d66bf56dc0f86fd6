use std::{fmt::Debug, io, rc::Rc};

use crate::{
    collection::{Collection, Iter},
    describe::{Describe, Indent},
};

/// Anything that can be tracked in a [`RenderWindowCollection`].
pub trait RenderWindow: Describe + Debug {
    fn title(&self) -> &str;

    /// Size in logical pixels (width, height)
    fn size(&self) -> (u32, u32);
}

/// Window that only carries its description, nothing is ever drawn to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessWindow {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl HeadlessWindow {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new("Untitled", 300, 300)
    }
}

impl RenderWindow for HeadlessWindow {
    fn title(&self) -> &str {
        &self.title
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Describe for HeadlessWindow {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()> {
        writeln!(sink, "{}Title: {}", indent, self.title)?;
        writeln!(sink, "{}Size: {}x{}", indent, self.width, self.height)
    }
}

/// Collection of render windows.
///
/// Restricts a [`Collection`] to [`RenderWindow`]s and adds lookup by title.
/// Its description is the plain collection's one.
#[derive(Debug, Default, Clone)]
pub struct RenderWindowCollection {
    windows: Collection<dyn RenderWindow>,
}

impl RenderWindowCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, window: Rc<dyn RenderWindow>) {
        self.windows.add(window)
    }

    pub fn insert_at(&mut self, index: usize, window: Rc<dyn RenderWindow>) {
        self.windows.insert_at(index, window)
    }

    pub fn replace(
        &mut self,
        index: usize,
        window: Rc<dyn RenderWindow>,
    ) -> Option<Rc<dyn RenderWindow>> {
        self.windows.replace(index, window)
    }

    pub fn remove(&mut self, window: &Rc<dyn RenderWindow>) -> bool {
        self.windows.remove(window)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Rc<dyn RenderWindow>> {
        self.windows.remove_at(index)
    }

    pub fn remove_all(&mut self) {
        self.windows.remove_all()
    }

    pub fn index_of(&self, window: &Rc<dyn RenderWindow>) -> Option<usize> {
        self.windows.index_of(window)
    }

    pub fn contains(&self, window: &Rc<dyn RenderWindow>) -> bool {
        self.windows.contains(window)
    }

    pub fn get(&self, index: usize) -> Option<&Rc<dyn RenderWindow>> {
        self.windows.get(index)
    }

    /// First window with the given title.
    pub fn find_by_title(&self, title: &str) -> Option<&Rc<dyn RenderWindow>> {
        self.windows.iter().find(|w| w.title() == title)
    }

    pub fn count(&self) -> usize {
        self.windows.count()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, dyn RenderWindow> {
        self.windows.iter()
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Rc<dyn RenderWindow>),
    {
        self.windows.for_each(f)
    }

    pub fn as_collection(&self) -> &Collection<dyn RenderWindow> {
        &self.windows
    }
}

impl Describe for RenderWindowCollection {
    fn describe(&self, sink: &mut dyn io::Write, indent: Indent) -> io::Result<()> {
        self.windows.describe(sink, indent)
    }
}

impl<'a> IntoIterator for &'a RenderWindowCollection {
    type Item = &'a Rc<dyn RenderWindow>;
    type IntoIter = Iter<'a, dyn RenderWindow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{HeadlessWindow, RenderWindow, RenderWindowCollection};
    use crate::describe::{Describe, Indent};

    fn titles(windows: &RenderWindowCollection) -> Vec<&str> {
        windows.iter().map(|w| w.title()).collect()
    }

    #[test]
    fn test_describe_matches_plain_collection() {
        let mut windows = RenderWindowCollection::new();
        windows.add(Rc::new(HeadlessWindow::new("main", 800, 600)));
        windows.add(Rc::new(HeadlessWindow::default()));

        let mut ours = Vec::new();
        windows.describe(&mut ours, Indent::new(2)).unwrap();
        let mut base = Vec::new();
        windows.as_collection().describe(&mut base, Indent::new(2)).unwrap();

        assert_eq!(ours, base);
        assert_eq!(String::from_utf8(ours).unwrap(), "    Number Of Items: 2\n");
    }

    #[test]
    fn test_window_describe() {
        let window = HeadlessWindow::new("main", 800, 600);
        let mut out = Vec::new();
        window.describe(&mut out, Indent::new(1)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Title: main\n  Size: 800x600\n"
        );
    }

    #[test]
    fn test_remove_by_identity() {
        let first: Rc<dyn RenderWindow> = Rc::new(HeadlessWindow::new("same", 10, 10));
        let second: Rc<dyn RenderWindow> = Rc::new(HeadlessWindow::new("same", 10, 10));
        let mut windows = RenderWindowCollection::new();
        windows.add(first.clone());
        windows.add(second.clone());

        assert!(windows.remove(&second));
        assert_eq!(windows.count(), 1);
        assert!(windows.contains(&first));
        assert!(!windows.contains(&second));
        assert!(!windows.remove(&second));
    }

    #[test]
    fn test_positional_ops() {
        let (a, b, c): (Rc<dyn RenderWindow>, Rc<dyn RenderWindow>, Rc<dyn RenderWindow>) = (
            Rc::new(HeadlessWindow::new("a", 1, 1)),
            Rc::new(HeadlessWindow::new("b", 2, 2)),
            Rc::new(HeadlessWindow::new("c", 3, 3)),
        );
        let mut windows = RenderWindowCollection::new();
        windows.add(a.clone());
        windows.add(c.clone());

        windows.insert_at(1, b.clone());
        windows.insert_at(10, Rc::new(HeadlessWindow::new("d", 4, 4)));
        assert_eq!(titles(&windows), ["a", "b", "c", "d"]);
        assert_eq!(windows.index_of(&c), Some(2));

        let old = windows.replace(0, Rc::new(HeadlessWindow::new("e", 5, 5))).unwrap();
        assert!(Rc::ptr_eq(&old, &a));
        assert!(windows.replace(4, a.clone()).is_none());
        assert_eq!(windows.index_of(&a), None);

        let removed = windows.remove_at(1).unwrap();
        assert!(Rc::ptr_eq(&removed, &b));
        assert!(windows.remove_at(3).is_none());
        assert_eq!(windows.get(1).map(|w| w.title()), Some("c"));
        assert_eq!(titles(&windows), ["e", "c", "d"]);

        windows.remove_all();
        assert!(windows.is_empty());
        assert_eq!(Rc::strong_count(&c), 1);
    }

    #[test]
    fn test_find_by_title() {
        let mut windows = RenderWindowCollection::new();
        windows.add(Rc::new(HeadlessWindow::new("a", 1, 1)));
        windows.add(Rc::new(HeadlessWindow::new("b", 2, 2)));
        windows.add(Rc::new(HeadlessWindow::new("b", 3, 3)));

        let found = windows.find_by_title("b").unwrap();
        assert_eq!(found.size(), (2, 2));
        assert!(windows.find_by_title("c").is_none());
        assert_eq!(titles(&windows), ["a", "b", "b"]);
    }
}
