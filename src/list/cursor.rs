use crate::list::node::{Link, ValueLink};
use crate::list::List;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// A read-only position in a [`List`].
///
/// A cursor stands on one node of the ring: either an element or the sentinel,
/// which plays the part of the past-the-end position. A list of *n* elements
/// has *n* + 1 positions; the sentinel is position *n*.
///
/// Stepping is cyclic. `move_next` on the sentinel lands on the first element
/// and `move_prev` on the first element lands on the sentinel.
///
/// # Examples
///
/// Positions are drawn as `|`, the sentinel as `#`.
/// ```
/// use sentinel_list::List;
///
/// let list = List::from(["red", "green", "blue"]);
///
/// // [|red green blue #]
/// let mut cursor = list.cursor_start();
/// assert_eq!(*cursor, "red");
///
/// // [ red green blue|#]
/// cursor.move_prev();
/// assert!(cursor.is_end());
/// assert_eq!(cursor.index(), 3);
///
/// // [ red green|blue #]
/// cursor.move_prev();
/// assert_eq!(*cursor, "blue");
///
/// // back around to [|red green blue #]
/// cursor.move_next();
/// cursor.move_next();
/// assert_eq!(cursor, list.cursor_start());
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Link>,
    pub(crate) list: &'a List<T>,
}

/// A position in a [`List`] that can also edit it.
///
/// Besides everything a [`Cursor`] does, a `CursorMut` changes elements in
/// place and links or unlinks nodes around itself. It holds the only borrow of
/// the list, so no other handle can free the node it stands on.
///
/// Use [`CursorMut::view`] to read the whole list without giving up the cursor.
///
/// # Examples
///
/// The list cannot be touched directly while the cursor is alive:
///
/// ```compile_fail
/// use sentinel_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// list.push_back(4);
/// cursor.insert(0);
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Link>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_sentinel_node(&self) -> bool {
                self.current == self.list.sentinel_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.sentinel_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Link> {
                // SAFETY: every node of the ring has a live successor.
                unsafe { (*self.current.as_ptr()).next() }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Link> {
                // SAFETY: every node of the ring has a live predecessor.
                unsafe { (*self.current.as_ptr()).prev() }
            }

            /// Walk `steps` nodes towards the back.
            ///
            /// The caller guarantees the walk does not cross the sentinel,
            /// otherwise `index` goes stale.
            unsafe fn walk_forward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.current = self.next_node();
                }
                self.index += steps;
            }

            /// Walk `steps` nodes towards the front.
            ///
            /// The caller guarantees the walk does not cross the sentinel,
            /// otherwise `index` goes stale.
            unsafe fn walk_backward(&mut self, steps: usize) {
                for _ in 0..steps {
                    self.current = self.prev_node();
                }
                self.index -= steps;
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Position of the cursor, `len()` at the sentinel.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Whether the cursor stands on the sentinel.
            pub fn is_end(&self) -> bool {
                self.is_sentinel_node()
            }

            /// See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Step one node towards the back, wrapping from the sentinel to the
            /// first element. On an empty list the cursor does not move.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from([7, 8]);
            /// let mut cursor = list.cursor(1);
            /// cursor.move_next();
            /// assert!(cursor.is_end());
            /// cursor.move_next();
            /// assert_eq!((cursor.index(), *cursor), (0, 7));
            /// ```
            pub fn move_next(&mut self) {
                self.index = if self.is_sentinel_node() { 0 } else { self.index + 1 };
                self.current = self.next_node();
            }

            /// Step one node towards the front, wrapping from the first element
            /// to the sentinel. On an empty list the cursor does not move.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from([7, 8]);
            /// let mut cursor = list.cursor_start();
            /// cursor.move_prev();
            /// assert_eq!(cursor.index(), 2);
            /// assert_eq!(cursor.previous(), Some(&8));
            /// ```
            pub fn move_prev(&mut self) {
                self.index = if self.is_front_node() {
                    self.list.len()
                } else {
                    self.index - 1
                };
                self.current = self.prev_node();
            }

            /// Jump to position `target`, which may be `len()` for the sentinel.
            ///
            /// The cursor walks from whichever of its own node, the first node
            /// or the sentinel is closest. A `target` past the sentinel leaves
            /// the cursor where it was and returns by how much it overshot.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from(['a', 'b', 'c', 'd']);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert_eq!(cursor.seek_to(3), Ok(()));
            /// assert_eq!(*cursor, 'd');
            /// assert_eq!(cursor.seek_to(6), Err(2));
            /// assert_eq!(*cursor, 'd');
            /// assert_eq!(cursor.seek_to(4), Ok(()));
            /// assert!(cursor.is_end());
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                let from_here = if target > self.index {
                    target - self.index
                } else {
                    self.index - target
                };
                // SAFETY: every walk below stays between the first node and
                // the sentinel, both inclusive.
                unsafe {
                    if from_here <= target && from_here <= len - target {
                        if target > self.index {
                            self.walk_forward(from_here);
                        } else {
                            self.walk_backward(from_here);
                        }
                    } else if target <= len - target {
                        self.move_to_start();
                        self.walk_forward(target);
                    } else {
                        self.move_to_end();
                        self.walk_backward(len - target);
                    }
                }
                Ok(())
            }

            /// Jump to the first element, or to the sentinel if the list is empty.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Jump to the sentinel.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.sentinel_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }

        /// The element under the cursor.
        ///
        /// # Panics
        ///
        /// Panics at the sentinel.
        impl<'a, T: 'a> Deref for $CURSOR<'a, T> {
            type Target = T;

            fn deref(&self) -> &T {
                self.current().expect("Cannot dereference a cursor at the end of the list")
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

/// Two cursors are equal when they stand on the same node.
///
/// Each list owns a distinct sentinel, so even the end positions of two
/// different lists compare unequal.
///
/// # Examples
/// ```
/// use sentinel_list::List;
///
/// let first = List::from(["x", "y"]);
/// let second = first.clone();
///
/// let mut walker = first.cursor_end();
/// walker.move_prev();
/// walker.move_prev();
/// assert_eq!(walker, first.cursor_start());
/// assert_ne!(walker, first.cursor(1));
/// assert_ne!(first.cursor_end(), second.cursor_end());
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, T> Eq for CursorMut<'a, T> {}

/// Mixed comparison, by node as well.
///
/// # Examples
/// ```
/// use sentinel_list::List;
///
/// let mut list = List::from([1, 2]);
/// let mut cursor = list.cursor_start_mut();
/// cursor.move_next();
/// assert!(cursor == cursor.view().cursor(1));
/// assert!(cursor.view().cursor_end() != cursor);
/// ```
impl<'a, 'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'a, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, 'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'a, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.current == other.current
    }
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            list: self.list,
        }
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Link>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// The element under the cursor, `None` at the sentinel.
    ///
    /// The reference lives as long as the list borrow, not the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(["only"]);
    /// let element = {
    ///     let cursor = list.cursor_start();
    ///     cursor.current()
    /// };
    /// assert_eq!(element, Some(&"only"));
    /// assert_eq!(list.cursor_end().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: a non-sentinel node is a `ValueLink<T>`, and the list is
        // borrowed for `'a`.
        unsafe { Some(ValueLink::value(self.current)) }
    }

    /// The element just before the cursor, `None` on the first node.
    ///
    /// At the sentinel this is the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(["first", "last"]);
    /// assert_eq!(list.cursor_start().previous(), None);
    /// assert_eq!(list.cursor_end().previous(), Some(&"last"));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the predecessor of anything but the first node holds a value.
        unsafe { Some(ValueLink::value(self.prev_node())) }
    }

    /// The list this cursor walks over.
    pub fn view(&self) -> &'a List<T> {
        self.list
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Link>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Link a fresh node holding `item` right before `next`.
    ///
    /// `next` must be a node of this cursor's list.
    unsafe fn link_before(&mut self, next: NonNull<Link>, item: T) -> NonNull<Link> {
        let node = ValueLink::new_detached(item);
        let prev = (*next.as_ptr()).prev();
        self.list.attach_node(prev, next, node);
        node
    }
}

// Element access; the ring itself is left alone.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// See [`Cursor::current`].
    pub fn current(&self) -> Option<&T> {
        self.as_cursor().current()
    }

    /// See [`Cursor::previous`].
    pub fn previous(&self) -> Option<&T> {
        self.as_cursor().previous()
    }

    /// Mutable access to the element under the cursor, `None` at the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([String::from("draft")]);
    /// let mut cursor = list.cursor_start_mut();
    /// if let Some(s) = cursor.current_mut() {
    ///     s.push_str("-2");
    /// }
    /// cursor.move_next();
    /// assert!(cursor.current_mut().is_none());
    /// assert_eq!(list[0], "draft-2");
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_sentinel_node() {
            return None;
        }
        // SAFETY: a non-sentinel node is a `ValueLink<T>`; the borrow is tied
        // to the cursor.
        unsafe { Some(ValueLink::value_mut(self.current)) }
    }

    /// Mutable access to the element before the cursor, `None` on the first
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([10, 20]);
    /// let mut tail = list.cursor_end_mut();
    /// *tail.previous_mut().unwrap() += 1;
    /// tail.move_to_start();
    /// assert_eq!(tail.previous_mut(), None);
    /// assert_eq!(list, List::from([10, 21]));
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the predecessor of anything but the first node holds a value.
        unsafe { Some(ValueLink::value_mut(self.prev_node())) }
    }

    /// A read-only cursor at the same position, reborrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.list, self.current, self.index)
    }

    /// Give up editing and keep the position.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Read the whole list while keeping the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(['p', 'q', 'r']);
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.erase();
    /// assert_eq!(cursor.view().len(), 2);
    /// assert_eq!(cursor.view().back(), Some(&'r'));
    /// ```
    pub fn view(&self) -> &List<T> {
        &*self.list
    }
}

// Edits that relink nodes.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Link `item` in front of the cursor's node and move onto it. The index is
    /// unchanged; the old node is now one step ahead.
    ///
    /// At the sentinel this appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(["mon", "wed"]);
    /// let mut cursor = list.cursor_mut(1);
    /// cursor.insert("tue");
    /// assert_eq!((cursor.index(), *cursor), (1, "tue"));
    ///
    /// cursor.move_to_end();
    /// cursor.insert("thu");
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(list, List::from(["mon", "tue", "wed", "thu"]));
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` belongs to the borrowed list.
        self.current = unsafe { self.link_before(self.current, item) };
    }

    /// Build an element from `args` and [`insert`](CursorMut::insert) it.
    pub fn emplace<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.insert(T::from(args))
    }

    /// Unlink the element under the cursor and hand it back, leaving the cursor
    /// on its successor. `None` at the sentinel, where nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(["keep", "drop"]);
    /// let mut cursor = list.cursor_mut(1);
    /// assert_eq!(cursor.remove(), Some("drop"));
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_sentinel_node() {
            return None;
        }
        let (node, next) = (self.current, self.next_node());
        // SAFETY: `node` is an element node of the borrowed list.
        let node = unsafe { self.list.detach_node(node) };
        self.current = next;
        Some(node.into_value())
    }

    /// Like [`remove`](CursorMut::remove), for callers that know the cursor is
    /// on an element.
    ///
    /// # Panics
    ///
    /// Panics at the sentinel, which is the only position of an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([3, 1, 4, 1, 5]);
    /// let mut cursor = list.cursor_mut(1);
    /// while !cursor.is_end() {
    ///     if *cursor == 1 {
    ///         cursor.erase();
    ///     } else {
    ///         cursor.move_next();
    ///     }
    /// }
    /// assert_eq!(list, List::from([3, 4, 5]));
    /// ```
    pub fn erase(&mut self) -> T {
        self.remove().expect("Cannot erase at the end of the list")
    }

    /// Unlink the element just before the cursor and hand it back. The cursor
    /// keeps its node, so its index drops by one. `None` on the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(['a', 'b', 'c']);
    /// let mut cursor = list.cursor_end_mut();
    /// assert_eq!(cursor.backspace(), Some('c'));
    /// assert_eq!(cursor.backspace(), Some('b'));
    /// assert_eq!(cursor.index(), 1);
    /// cursor.move_prev();
    /// assert_eq!(cursor.backspace(), None);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        if self.is_front_node() {
            return None;
        }
        self.move_prev();
        self.remove()
    }
}

/// Mutable access to the element under the cursor.
///
/// # Panics
///
/// Panics at the sentinel.
impl<'a, T: 'a> DerefMut for CursorMut<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.current_mut().expect("Cannot dereference a cursor at the end of the list")
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn persons() -> List<Person> {
        [("Alice", 20), ("Bob", 21), ("Cindy", 22), ("Derek", 23)]
            .iter()
            .map(|&(name, age)| Person {
                name: name.to_string(),
                age,
            })
            .collect()
    }

    #[test]
    fn cursor_empty_list() {
        let list = List::<String>::new();
        assert_eq!(list.cursor_start(), list.cursor_end());

        let mut cursor = list.cursor_start();
        cursor.move_next();
        assert_eq!(cursor, list.cursor_end());
        assert_eq!(cursor.index(), 0);

        let mut cursor = list.cursor_end();
        cursor.move_prev();
        assert_eq!(cursor, list.cursor_start());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn cursor_round_trip() {
        let list = (0..5).collect::<List<_>>();

        let mut cursor = list.cursor_end();
        cursor.move_prev();
        assert_eq!(cursor.index(), 4);
        cursor.move_next();
        assert_eq!(cursor, list.cursor_end());
        assert_eq!(cursor.index(), 5);

        let mut cursor = list.cursor_start();
        cursor.move_next();
        cursor.move_prev();
        assert_eq!(cursor, list.cursor_start());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_cycles() {
        let list = List::from(["Hello", "Iterators"]);
        let mut cursor = list.cursor_start();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(cursor.current());
            cursor.move_next();
        }
        assert_eq!(
            seen,
            vec![
                Some(&"Hello"),
                Some(&"Iterators"),
                None,
                Some(&"Hello"),
                Some(&"Iterators"),
                None
            ]
        );

        let mut cursor = list.cursor_start();
        cursor.move_prev();
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), 2);
        cursor.move_prev();
        assert_eq!(*cursor, "Iterators");
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn cursor_seek() {
        let list = (0..10).collect::<List<_>>();
        let mut cursor = list.cursor_start();
        for &target in &[3, 9, 1, 10, 0, 7, 7, 5] {
            assert_eq!(cursor.seek_to(target), Ok(()));
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor.current(), list.get(target));
        }
        assert_eq!(cursor.seek_to(12), Err(2));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn cursor_deref_and_member_access() {
        let mut list = persons();

        let mut cursor = list.cursor_start_mut();
        assert_eq!((*cursor).name, "Alice");
        cursor.move_next();
        assert_eq!(cursor.name, "Bob");

        cursor.name = "Bobby".to_string();
        (*cursor).age = 42;

        let bobby = list.cursor(1);
        assert_eq!(bobby.name, "Bobby");
        assert_eq!(bobby.age, 42);
        assert_eq!(
            list[1],
            Person {
                name: "Bobby".to_string(),
                age: 42
            }
        );
    }

    #[test]
    #[should_panic(expected = "Cannot dereference a cursor at the end of the list")]
    fn cursor_deref_at_end() {
        let list = List::from([1, 2]);
        let cursor = list.cursor_end();
        let _value: i32 = *cursor;
    }

    #[test]
    fn cursor_insert() {
        let mut list = List::from(["Hello", "Welcome", "Iterators", "Tests"]);
        let mut cursor = list.cursor_mut(1);
        cursor.insert("Inserted");
        assert_eq!(cursor.len(), 5);
        assert_eq!(*cursor, "Inserted");
        assert_eq!(cursor.index(), 1);

        cursor.move_next();
        assert_eq!(*cursor, "Welcome");
        assert_eq!(cursor.index(), 2);
        cursor.move_prev();
        assert_eq!(*cursor, "Inserted");

        for _ in 0..4 {
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), 5);

        list.assert_valid();
        assert_eq!(
            list,
            List::from(["Hello", "Inserted", "Welcome", "Iterators", "Tests"])
        );
    }

    #[test]
    fn cursor_insert_at_ends() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_end_mut();
        cursor.insert(2);
        assert_eq!(cursor.index(), 0);
        cursor.move_next();
        cursor.insert(3);
        assert_eq!(cursor.index(), 1);
        cursor.move_to_start();
        cursor.emplace(1_u8);
        assert_eq!(cursor.index(), 0);
        list.assert_valid();
        assert_eq!(list, List::from([1_i32, 2, 3]));
    }

    #[test]
    fn cursor_erase() {
        let mut list = List::from(["Hello", "Welcome", "Iterators", "Tests"]);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.erase(), "Welcome");
        assert_eq!(cursor.len(), 3);
        assert_eq!(*cursor, "Iterators");
        assert_eq!(cursor.index(), 1);

        cursor.move_next();
        cursor.move_next();
        assert!(cursor.is_end());

        cursor.move_prev();
        assert_eq!(cursor.erase(), "Tests");
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), 2);

        list.assert_valid();
        assert_eq!(list, List::from(["Hello", "Iterators"]));
    }

    #[test]
    #[should_panic(expected = "Cannot erase at the end of the list")]
    fn cursor_erase_at_end() {
        let mut list = List::from([1]);
        list.cursor_end_mut().erase();
    }

    #[test]
    #[should_panic(expected = "Cannot erase at the end of the list")]
    fn cursor_erase_on_empty_list() {
        let mut list = List::<i32>::new();
        list.cursor_start_mut().erase();
    }

    #[test]
    fn cursor_backspace() {
        let mut list = List::from(["Hello", "Welcome", "Iterators"]);

        let mut cursor = list.cursor_end_mut();
        assert_eq!(cursor.backspace(), Some("Iterators"));
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), 2);

        cursor.move_prev();
        assert_eq!(cursor.backspace(), Some("Hello"));
        assert_eq!(*cursor, "Welcome");
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.backspace(), None);
        assert_eq!(cursor.len(), 1);

        list.assert_valid();
        assert_eq!(list, List::from(["Welcome"]));
    }

    #[test]
    fn cursor_cross_compare() {
        let mut list = List::from([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        assert!(cursor == cursor.as_cursor());
        assert!(cursor.as_cursor() == cursor);
        assert!(cursor.view().cursor(0) == cursor);
        cursor.move_next();
        assert!(cursor.view().cursor(0) != cursor);
        assert!(cursor != cursor.view().cursor_end());

        let index = cursor.index();
        let cursor = cursor.into_cursor();
        assert_eq!(cursor, cursor.view().cursor(index));
        assert_eq!(*cursor, 2);
    }

    #[test]
    fn cursor_mutation_is_visible_everywhere() {
        let mut list = (0..4).collect::<List<_>>();
        let mut cursor = list.cursor_mut(2);
        *cursor.current_mut().unwrap() = 20;
        *cursor.previous_mut().unwrap() = 10;
        assert_eq!(list[2], 20);
        assert_eq!(list.at(1), Ok(&10));
        assert_eq!(list.cursor(2).current(), Some(&20));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 10, 20, 3]);
    }

    #[test]
    fn cursor_debug() {
        let list = List::from([1, 2]);
        assert_eq!(
            format!("{:?}", list.cursor(1)),
            "Cursor { list: [1, 2], current: Some(2), index: 1 }"
        );
    }
}
