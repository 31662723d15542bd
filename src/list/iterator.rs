use crate::list::node::{Link, ValueLink};
use crate::list::List;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// The value links of a list that an iterator has not yielded yet.
///
/// `front` and `back` are the next links to yield from either side. Once
/// `remaining` drops to zero both of them are stale and never read again,
/// which is how the iteration stops short of the sentinel.
#[derive(Clone, Copy)]
struct Span {
    front: NonNull<Link>,
    back: NonNull<Link>,
    remaining: usize,
}

impl Span {
    fn of<T>(list: &List<T>) -> Self {
        Span {
            front: list.front_node(),
            back: list.back_node(),
            remaining: list.len(),
        }
    }

    fn take_front(&mut self) -> Option<NonNull<Link>> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.front;
        self.remaining -= 1;
        // SAFETY: `link` is a live value link of the list, so its `next` is valid.
        self.front = unsafe { (*link.as_ptr()).next() };
        Some(link)
    }

    fn take_back(&mut self) -> Option<NonNull<Link>> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.back;
        self.remaining -= 1;
        // SAFETY: `link` is a live value link of the list, so its `prev` is valid.
        self.back = unsafe { (*link.as_ptr()).prev() };
        Some(link)
    }

    /// Formats the values left in the span as the fields of a tuple named `name`.
    ///
    /// # Safety
    ///
    /// The span must come from a live `List<T>`, and no mutable reference to
    /// a value inside it may be alive.
    unsafe fn fmt_values<T: fmt::Debug>(
        self,
        name: &str,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut tuple = f.debug_tuple(name);
        let mut rest = self;
        while let Some(link) = rest.take_front() {
            tuple.field(ValueLink::<T>::value(link));
        }
        tuple.finish()
    }
}

/// A borrowing iterator over the values of a `List`, from the first element
/// to the last.
///
/// Unlike a [`Cursor`](crate::Cursor), it never reaches the sentinel and does
/// not wrap around: it yields exactly `len` values, from either end, and then
/// keeps returning `None`.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// let list = List::from(["Hello", "Welcome", "Iterators"]);
/// let mut iter = list.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&"Hello"));
/// assert_eq!(iter.next_back(), Some(&"Iterators"));
/// assert_eq!(iter.next(), Some(&"Welcome"));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next_back(), None);
/// ```
///
/// The list stays borrowed while the iterator lives:
///
/// ```compile_fail
/// use sentinel_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
/// list.clear();
/// iter.next();
/// ```
pub struct Iter<'a, T: 'a> {
    span: Span,
    _list: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            span: Span::of(list),
            _list: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            _list: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: the list is borrowed immutably for `'a`.
        unsafe { self.span.fmt_values::<T>("Iter", f) }
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // SAFETY: the span only hands out value links of the borrowed list.
        self.span
            .take_front()
            .map(|link| unsafe { ValueLink::value(link) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        // SAFETY: the span only hands out value links of the borrowed list.
        self.span
            .take_back()
            .map(|link| unsafe { ValueLink::value(link) })
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A borrowing iterator over mutable references to the values of a `List`.
///
/// It walks the same links as [`Iter`]. The elements can be changed in place,
/// but the links between them cannot.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// for (i, value) in list.iter_mut().rev().enumerate() {
///     *value += 10 * i;
/// }
/// assert_eq!(list, List::from([21, 12, 3]));
/// ```
pub struct IterMut<'a, T: 'a> {
    span: Span,
    _list: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            span: Span::of(list),
            _list: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: values already yielded are outside the span, so none of
        // the values read here is mutably borrowed.
        unsafe { self.span.fmt_values::<T>("IterMut", f) }
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        // SAFETY: each link leaves the span when it is yielded, so no value
        // is handed out twice.
        self.span
            .take_front()
            .map(|link| unsafe { ValueLink::value_mut(link) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining, Some(self.span.remaining))
    }

    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        // SAFETY: as in `next`.
        self.span
            .take_back()
            .map(|link| unsafe { ValueLink::value_mut(link) })
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator that unlinks the values of a `List` one by one.
///
/// Values not consumed are dropped together with the iterator.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Builds a list by appending every value of the iterator, the way an
/// initializer list does.
impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn iter_stops_where_cursor_wraps() {
        let list = List::from(["Hello", "Iterators"]);

        let mut cursor = list.cursor_start();
        let mut iter = list.iter();
        for _ in 0..2 {
            assert_eq!(iter.next(), cursor.current());
            cursor.move_next();
        }
        assert!(cursor.is_end());
        assert_eq!(iter.next(), None);

        // The cursor goes on to the first element again, the iterator does not.
        cursor.move_next();
        assert_eq!(*cursor, "Hello");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_on_empty_list() {
        let mut list = List::<String>::new();
        assert_eq!(list.iter().len(), 0);
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.iter().next_back(), None);
        assert_eq!(list.iter_mut().next(), None);
        assert_eq!(list.into_iter().next(), None);
    }

    #[test]
    fn iter_from_both_ends_meets_once() {
        for len in 0..6 {
            let list: List<usize> = (0..len).collect();
            for from_front in 0..=len {
                let mut iter = list.iter();
                let mut seen = Vec::new();
                for _ in 0..from_front {
                    seen.extend(iter.next().copied());
                }
                let mut tail: Vec<usize> = iter.by_ref().rev().copied().collect();
                assert_eq!(iter.len(), 0);
                assert_eq!(iter.next(), None);
                tail.reverse();
                seen.extend(tail);
                let expected: Vec<usize> = (0..len).collect();
                assert_eq!(seen, expected, "len {} split {}", len, from_front);
            }
        }
    }

    #[test]
    fn iter_mut_from_both_ends() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        let mut iter = list.iter_mut();
        *iter.next().unwrap() *= 10;
        *iter.next_back().unwrap() *= 10;
        assert_eq!(iter.len(), 3);
        for value in iter {
            *value = 0;
        }
        list.assert_valid();
        assert_eq!(list, List::from([10, 0, 0, 0, 50]));
    }

    #[test]
    fn iter_len_tracks_remaining() {
        let list = List::from([1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next_back();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().last(), Some(&2));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn into_iter_consumes_in_order() {
        let list = List::from(["Hello", "Welcome", "Iterators", "Tests"]);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some("Hello"));
        assert_eq!(iter.next_back(), Some("Tests"));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["Welcome", "Iterators"]);
    }

    #[test]
    fn into_iter_after_swap() {
        let mut full = List::from([1, 2, 3]);
        let mut empty = List::new();
        full.swap(&mut empty);

        assert_eq!(full.into_iter().next(), None);
        assert_eq!(empty.into_iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn into_iter_drops_the_rest() {
        use std::rc::Rc;

        let shared = Rc::new(());
        let list: List<Rc<()>> = (0..4).map(|_| Rc::clone(&shared)).collect();
        let mut iter = list.into_iter();
        drop(iter.next());
        assert_eq!(Rc::strong_count(&shared), 4);
        drop(iter);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn for_loops_over_references() {
        let mut list: List<i32> = (1..=4).collect();
        for value in &mut list {
            *value *= 42;
        }
        let sum: i32 = (&list).into_iter().sum();
        assert_eq!(sum, 420);
    }

    #[test]
    fn extend_by_value_and_by_reference() {
        let mut list = List::from([1, 2]);
        list.extend(vec![3, 4]);
        list.extend(&[5, 6]);
        list.extend(List::from([7]).iter());
        list.assert_valid();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn debug_shows_values_left() {
        let mut list = List::from([1, 2, 3]);
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(2, 3)");
        let mut iter = list.iter_mut();
        iter.next_back();
        assert_eq!(format!("{:?}", iter), "IterMut(1, 2)");
        assert_eq!(format!("{:?}", list.into_iter()), "IntoIter([1, 2, 3])");
    }
}
