use std::ptr::NonNull;

/// The header shared by every node of the ring.
///
/// Both [`ValueLink`] and [`SentinelLink`] start with a `Link` and are
/// `#[repr(C)]`, so a pointer to either of them can be cast to a pointer
/// to its `Link` and back. Traversal only ever deals with `NonNull<Link>`.
///
/// `prev` is an observation pointer and never takes part in freeing a node.
/// The nodes reachable through `next` are owned by the list of the sentinel
/// they eventually lead back to.
#[repr(C)]
pub(crate) struct Link {
    pub(crate) next: NonNull<Link>,
    pub(crate) prev: NonNull<Link>,
}

/// A node holding one element of the list.
#[repr(C)]
pub(crate) struct ValueLink<T> {
    pub(crate) link: Link,
    pub(crate) value: T,
}

/// The unique node of a list that holds no element. It marks both ends of
/// the sequence and keeps the number of value links in the ring.
#[repr(C)]
pub(crate) struct SentinelLink {
    pub(crate) link: Link,
    pub(crate) len: usize,
}

impl Link {
    #[inline]
    pub(crate) fn next(&self) -> NonNull<Link> {
        self.next
    }

    #[inline]
    pub(crate) fn prev(&self) -> NonNull<Link> {
        self.prev
    }
}

impl<T> ValueLink<T> {
    /// Allocate a node holding `value`, not linked into any ring.
    ///
    /// Its `next` and `prev` are dangling and must be written by the list
    /// before they are read. The neighbors are not touched here.
    pub(crate) fn new_detached(value: T) -> NonNull<Link> {
        let node = Box::new(ValueLink {
            link: Link {
                next: NonNull::dangling(),
                prev: NonNull::dangling(),
            },
            value,
        });
        // SAFETY: `Box::into_raw` never returns null.
        unsafe { NonNull::new_unchecked(Box::into_raw(node)) }.cast()
    }

    /// Take back ownership of a node created by [`ValueLink::new_detached`].
    ///
    /// # Safety
    ///
    /// `link` must point to a `ValueLink<T>` that has already been unlinked
    /// from its ring, and it must not be used again afterwards.
    pub(crate) unsafe fn from_link(link: NonNull<Link>) -> Box<Self> {
        Box::from_raw(link.cast::<ValueLink<T>>().as_ptr())
    }

    /// # Safety
    ///
    /// `link` must point to a live `ValueLink<T>` (not a sentinel), and the
    /// returned reference must not outlive it.
    #[inline]
    pub(crate) unsafe fn value<'a>(link: NonNull<Link>) -> &'a T {
        &(*link.cast::<ValueLink<T>>().as_ptr()).value
    }

    /// # Safety
    ///
    /// Same as [`ValueLink::value`], and no other reference to the value may
    /// be alive while the returned one is used.
    #[inline]
    pub(crate) unsafe fn value_mut<'a>(link: NonNull<Link>) -> &'a mut T {
        &mut (*link.cast::<ValueLink<T>>().as_ptr()).value
    }

    pub(crate) fn into_value(self: Box<Self>) -> T {
        self.value
    }
}

impl SentinelLink {
    /// Allocate an empty sentinel, of which `next` and `prev` point to itself.
    pub(crate) fn new() -> NonNull<SentinelLink> {
        let sentinel = Box::new(SentinelLink {
            link: Link {
                next: NonNull::dangling(),
                prev: NonNull::dangling(),
            },
            len: 0,
        });
        // SAFETY: `Box::into_raw` never returns null.
        let ptr = unsafe { NonNull::new_unchecked(Box::into_raw(sentinel)) };
        let link = ptr.cast::<Link>();
        // SAFETY: `ptr` is freshly allocated and uniquely owned here.
        unsafe {
            (*link.as_ptr()).next = link;
            (*link.as_ptr()).prev = link;
        }
        ptr
    }

    /// Free a sentinel created by [`SentinelLink::new`].
    ///
    /// # Safety
    ///
    /// The ring of the sentinel must be empty, and `sentinel` must not be
    /// used again afterwards.
    pub(crate) unsafe fn free(sentinel: NonNull<SentinelLink>) {
        debug_assert_eq!((*sentinel.as_ptr()).len, 0);
        drop(Box::from_raw(sentinel.as_ptr()));
    }

    #[inline]
    pub(crate) fn inc_len(&mut self) -> usize {
        self.len += 1;
        self.len
    }

    #[inline]
    pub(crate) fn dec_len(&mut self) -> usize {
        self.len -= 1;
        self.len
    }
}

/// Link `prev` and `next` as adjacent nodes.
///
/// # Safety
///
/// Both pointers must point to live links, and no reference to either link
/// may be alive during the call.
#[inline]
pub(crate) unsafe fn connect(prev: NonNull<Link>, next: NonNull<Link>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

#[cfg(debug_assertions)]
pub(crate) fn assert_adjacent(prev: NonNull<Link>, next: NonNull<Link>) {
    unsafe {
        assert_eq!((*prev.as_ptr()).next(), next);
        assert_eq!((*next.as_ptr()).prev(), prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_starts_as_self_loop() {
        let sentinel = SentinelLink::new();
        let link = sentinel.cast::<Link>();
        unsafe {
            assert_eq!(link.as_ref().next(), link);
            assert_eq!(link.as_ref().prev(), link);
            assert_eq!(sentinel.as_ref().len, 0);
            SentinelLink::free(sentinel);
        }
    }

    #[test]
    fn value_link_round_trip() {
        let sentinel = SentinelLink::new();
        let head = sentinel.cast::<Link>();
        let node = ValueLink::new_detached(String::from("value"));
        unsafe {
            connect(head, node);
            connect(node, head);
            assert_eq!(head.as_ref().next(), node);
            assert_eq!(head.as_ref().prev(), node);
            assert_eq!(node.as_ref().next(), head);
            assert_eq!(node.as_ref().prev(), head);
            assert_eq!(ValueLink::<String>::value(node), "value");
            ValueLink::<String>::value_mut(node).push('!');

            connect(head, head);
            let boxed = ValueLink::<String>::from_link(node);
            assert_eq!(boxed.into_value(), "value!");
            SentinelLink::free(sentinel);
        }
    }
}
