use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
#[cfg(debug_assertions)]
use crate::list::node::assert_adjacent;
use crate::list::node::{connect, Link, SentinelLink, ValueLink};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
pub(crate) mod node;

/// A doubly-linked list that owns its nodes and closes them into a ring
/// through a sentinel node.
///
/// Linking and unlinking next to a known position costs *O*(1); reaching a
/// position by index walks the ring and costs *O*(*n*).
///
/// The `List` value itself is one pointer to the heap-allocated sentinel,
/// which also stores the length. Because the sentinel never lives inline,
/// moving the `List` leaves every link intact.
///
/// Throughout the crate `front`/`back` name the first/last element node, and
/// the sentinel is the past-the-end position.
pub struct List<T> {
    sentinel: NonNull<SentinelLink>,
    _marker: PhantomData<Box<ValueLink<T>>>,
}

impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Link> {
        self.sentinel.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Link> {
        // SAFETY: the sentinel's successor is the first element, or the
        // sentinel itself when empty.
        unsafe { (*self.sentinel_node().as_ptr()).next() }
    }
    pub(crate) fn back_node(&self) -> NonNull<Link> {
        // SAFETY: the sentinel's predecessor is the last element, or the
        // sentinel itself when empty.
        unsafe { (*self.sentinel_node().as_ptr()).prev() }
    }

    fn sentinel_mut(&mut self) -> &mut SentinelLink {
        // SAFETY: the list owns its sentinel and `&mut self` is exclusive.
        unsafe { &mut *self.sentinel.as_ptr() }
    }

    /// Unlink `node` from the ring and take ownership of it again.
    ///
    /// `node` must be an element node of this list, never the sentinel.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Link>) -> Box<ValueLink<T>> {
        let (prev, next) = {
            let link = &*node.as_ptr();
            (link.prev(), link.next())
        };
        connect(prev, next);
        self.sentinel_mut().dec_len();
        ValueLink::from_link(node)
    }

    /// Splice the detached `node` in between `prev` and `next`.
    ///
    /// `prev` and `next` must be neighbours in this list; debug builds check
    /// that they are.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Link>,
        next: NonNull<Link>,
        node: NonNull<Link>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.sentinel_mut().inc_len();
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Point the first and last nodes back at this list's own sentinel, or
    /// restore the self-loop if the list is empty.
    ///
    /// After the contents of two sentinels are exchanged, their neighbors still
    /// point at the sentinel they came from.
    unsafe fn repair_boundary(&mut self) {
        let sentinel = self.sentinel_node();
        if self.is_empty() {
            connect(sentinel, sentinel);
        } else {
            connect(self.back_node(), sentinel);
            connect(sentinel, self.front_node());
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        let len = self.len();
        tracing::debug!(index, len, "index out of range");
        Error::IndexOutOfRange { index, len }
    }
}

impl<T> List<T> {
    /// An empty list: a lone sentinel linked to itself.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list: List<char> = List::new();
    /// assert_eq!(list.cursor_start(), list.cursor_end());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: SentinelLink::new(),
            _marker: PhantomData,
        }
    }

    /// Copy the elements from `start` up to, not including, `end` into a new
    /// list, converting each with `T::from`.
    ///
    /// # Panics
    ///
    /// Panics if the walk from `start` reaches the sentinel before `end`, for
    /// example when `end` is a cursor of another list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let words = List::from(["a", "b", "c", "d"]);
    /// let (start, end) = (words.cursor(1), words.cursor(3));
    /// let list: List<String> = List::from_range(start, end);
    /// assert_eq!(list, List::from([String::from("b"), String::from("c")]));
    /// ```
    pub fn from_range<U>(start: Cursor<'_, U>, end: Cursor<'_, U>) -> Self
    where
        U: Clone,
        T: From<U>,
    {
        let mut list = List::new();
        let mut cursor = start;
        while cursor != end {
            list.push_back(T::from((*cursor).clone()));
            cursor.move_next();
        }
        list
    }

    /// Whether the list holds no elements. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut queue = List::from(["job"]);
    /// assert!(!queue.is_empty());
    /// queue.pop_front();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements, read from the sentinel. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(['x'; 4]);
    /// assert_eq!(list.len(), 4);
    /// list.cursor_mut(2).erase();
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        // SAFETY: the sentinel is valid as long as the list is.
        unsafe { (*self.sentinel.as_ptr()).len }
    }

    /// Drop every element, front to back. The list stays usable.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([vec![1], vec![2, 3]]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// list.push_back(vec![4]);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len(), "clear");
        while self.pop_front().is_some() {}
    }

    /// The first element, `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front().is_none());
    /// list.push_back('b');
    /// list.push_front('a');
    /// assert_eq!(list.front(), Some(&'a'));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Mutable access to the first element, `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut scores = List::from([70, 85]);
    /// if let Some(first) = scores.front_mut() {
    ///     *first += 5;
    /// }
    /// assert_eq!(scores, List::from([75, 85]));
    /// assert_eq!(List::<u8>::new().front_mut(), None);
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is a value node.
        Some(unsafe { ValueLink::value_mut(self.front_node()) })
    }

    /// The last element, `None` when empty. Read through the sentinel's
    /// predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(["a", "b"]);
    /// assert_eq!(list.back(), Some(&"b"));
    /// list.pop_back();
    /// list.pop_back();
    /// assert_eq!(list.back(), None);
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Mutable access to the last element, `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut path = List::from([String::from("usr"), String::from("lib")]);
    /// path.back_mut().unwrap().push_str("exec");
    /// assert_eq!(path.back().map(String::as_str), Some("libexec"));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is a value node.
        Some(unsafe { ValueLink::value_mut(self.back_node()) })
    }

    /// The element at `index`, `None` when `index >= len`. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.get(1), Some(&2));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.cursor(index).current()
    }

    /// Mutable counterpart of [`List::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        let node = self.cursor(index).current;
        // SAFETY: `index < len`, so the cursor stopped at a value node, and
        // `&mut self` guarantees the value is not borrowed elsewhere.
        Some(unsafe { ValueLink::value_mut(node) })
    }

    /// Checked indexing: the element at `index`, or
    /// [`Error::IndexOutOfRange`] when `index >= len`. *O*(*n*).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::{Error, List};
    ///
    /// let list = List::from(["Hello", "World"]);
    /// assert_eq!(list.at(1), Ok(&"World"));
    /// assert_eq!(list.at(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Mutable counterpart of [`List::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        let node = self.cursor(index).current;
        // SAFETY: `index < len`, so the cursor stopped at a value node.
        Ok(unsafe { ValueLink::value_mut(node) })
    }

    /// Link `elt` in as the new first element and return a cursor on it.
    /// *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut stack = List::new();
    /// stack.push_front("bottom");
    /// let top = stack.push_front("top");
    /// assert_eq!(top.index(), 0);
    /// assert_eq!(stack, List::from(["top", "bottom"]));
    /// ```
    pub fn push_front(&mut self, elt: T) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor.insert(elt);
        cursor
    }

    /// [`List::push_front`] for an element built with `T::from(args)`.
    pub fn emplace_front<A>(&mut self, args: A) -> CursorMut<'_, T>
    where
        T: From<A>,
    {
        self.push_front(T::from(args))
    }

    /// Unlink and return the first element, `None` when empty. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut queue = List::from(["first", "second"]);
    /// assert_eq!(queue.pop_front(), Some("first"));
    /// assert_eq!(queue.pop_front(), Some("second"));
    /// assert!(queue.pop_front().is_none());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Link `elt` in right before the sentinel and return a cursor on it.
    /// *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1]);
    /// let mut cursor = list.push_back(3);
    /// assert_eq!(cursor.index(), 1);
    /// *cursor += 1;
    /// assert_eq!(list.back(), Some(&4));
    /// ```
    pub fn push_back(&mut self, elt: T) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_end_mut();
        cursor.insert(elt);
        cursor
    }

    /// [`List::push_back`] for an element built with `T::from(args)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list: List<String> = List::new();
    /// list.emplace_back("Hello");
    /// list.emplace_back('!');
    /// assert_eq!(list.back().map(String::as_str), Some("!"));
    /// ```
    pub fn emplace_back<A>(&mut self, args: A) -> CursorMut<'_, T>
    where
        T: From<A>,
    {
        self.push_back(T::from(args))
    }

    /// Unlink and return the last element, `None` when empty. *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut undo = List::from(["type", "paste"]);
    /// assert_eq!(undo.pop_back(), Some("paste"));
    /// assert_eq!(undo.back(), Some(&"type"));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Exchanges the contents of two lists in *O*(1) time.
    ///
    /// The element nodes stay where they are; only the states of the two
    /// sentinel nodes are exchanged, and the boundary links are repaired.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut full = List::from([1, 2, 3]);
    /// let mut empty = List::new();
    /// full.swap(&mut empty);
    /// assert!(full.is_empty());
    /// assert_eq!(empty, List::from([1, 2, 3]));
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        tracing::trace!(len = self.len(), other_len = other.len(), "swap");
        let (this, that) = (self.sentinel.as_ptr(), other.sentinel.as_ptr());
        // SAFETY: `self` and `other` are distinct lists, so are their sentinels.
        unsafe {
            std::mem::swap(&mut (*this).link, &mut (*that).link);
            std::mem::swap(&mut (*this).len, &mut (*that).len);
            self.repair_boundary();
            other.repair_boundary();
        }
    }

    /// A cursor at position `at`; `at == len` gives the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(['a', 'b', 'c']);
    /// assert_eq!(*list.cursor(2), 'c');
    /// assert!(list.cursor(3).is_end());
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        assert!(at <= self.len(), "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// A cursor on the first element, the `begin` position. Equal to
    /// [`List::cursor_end`] when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let empty: List<i32> = List::new();
    /// assert_eq!(empty.cursor_start(), empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// A cursor on the sentinel, the `end` position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(["a", "z"]);
    /// let end = list.cursor_end();
    /// assert_eq!((end.index(), end.previous()), (2, Some(&"z")));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel_node(), self.len())
    }

    /// An editing cursor at position `at`; `at == len` gives the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 4]);
    /// list.cursor_mut(2).insert(3);
    /// list.cursor_mut(4).insert(5);
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        assert!(at <= self.len(), "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// An editing cursor on the first element (the sentinel when empty).
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// An editing cursor on the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut log = List::from(["boot"]);
    /// let mut tail = log.cursor_end_mut();
    /// tail.insert("login");
    /// tail.move_next();
    /// tail.insert("logout");
    /// assert_eq!(log, List::from(["boot", "login", "logout"]));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (sentinel, len) = (self.sentinel_node(), self.len());
        CursorMut::new(self, sentinel, len)
    }

    /// Borrowing iterator, front to back. It stops at the sentinel instead of
    /// wrapping around like a cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([2, 3, 5, 7]);
    /// let odd: Vec<_> = list.iter().filter(|&&p| p % 2 == 1).collect();
    /// assert_eq!(odd, [&3, &5, &7]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterator over mutable references. The elements may change, the links
    /// may not.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut names = List::from([String::from("ada"), String::from("alan")]);
    /// for name in names.iter_mut() {
    ///     name.make_ascii_uppercase();
    /// }
    /// assert_eq!(names.front().map(String::as_str), Some("ADA"));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Unlink and return the element at position `at`. *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.remove(1), 'b');
    /// assert_eq!(list, List::from(['a', 'c']));
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len(),
            "Cannot remove at an index outside of the list bounds"
        );
        self.cursor_mut(at).erase()
    }

    /// Link `elt` in at position `at`, shifting the rest back, and return a
    /// cursor on it. `at == len` appends. *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([10, 30]);
    /// let cursor = list.insert(1, 20);
    /// assert_eq!(cursor.previous(), Some(&10));
    /// list.insert(3, 40);
    /// assert_eq!(list.iter().sum::<i32>(), 100);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) -> CursorMut<'_, T> {
        assert!(
            at <= self.len(),
            "Cannot insert at an index outside of the list bounds"
        );
        let mut cursor = self.cursor_mut(at);
        cursor.insert(elt);
        cursor
    }

    /// Walks the ring in both directions and checks every link and the length.
    #[cfg(test)]
    pub(crate) fn assert_valid(&self) {
        let sentinel = self.sentinel_node();
        let (mut forward, mut node) = (0_usize, sentinel);
        unsafe {
            loop {
                let next = (*node.as_ptr()).next();
                assert_eq!((*next.as_ptr()).prev(), node, "broken back link");
                node = next;
                if node == sentinel {
                    break;
                }
                forward += 1;
            }
            let (mut backward, mut node) = (0_usize, sentinel);
            loop {
                node = (*node.as_ptr()).prev();
                if node == sentinel {
                    break;
                }
                backward += 1;
            }
            assert_eq!(forward, backward);
        }
        assert_eq!(forward, self.len(), "length out of sync with the ring");
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elt) => elt,
            None => panic!("index {} out of range for list of length {}", index, self.len()),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elt) => elt,
            None => panic!("index {} out of range for list of length {}", index, len),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Nodes are unlinked one at a time from the front, so the empty
        // self-loop is all that is left when the sentinel is freed.
        self.clear();
        // SAFETY: the list is empty and the sentinel is never used again.
        unsafe { SentinelLink::free(self.sentinel) }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Lists, their read-only iterators and cursors must stay covariant in `T`.
#[allow(dead_code)]
fn assert_covariance() {
    fn list<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn iter<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn into_iter<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn cursor<'i, 'a>(x: Cursor<'i, &'static str>) -> Cursor<'i, &'a str> {
        x
    }
}
