//! A doubly-linked list that owns its nodes and closes them into a ring
//! through a sentinel node, navigated with bidirectional cursors.
//!
//! [`List`] links and unlinks elements next to a cursor in constant time;
//! reaching a position by index walks the ring.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut playlist = List::from(["intro", "verse", "outro"]);
//!
//! let mut cursor = playlist.cursor_mut(2);
//! cursor.insert("chorus"); // linked before "outro", cursor now on it
//! assert_eq!((cursor.index(), *cursor), (2, "chorus"));
//!
//! cursor.move_prev();
//! assert_eq!(cursor.erase(), "verse"); // cursor slides onto "chorus"
//! assert_eq!(*cursor, "chorus");
//!
//! assert_eq!(playlist, List::from(["intro", "chorus", "outro"]));
//! ```
//!
//! # Memory Layout
//!
//! ```text
//!     List
//! ╔═══════════╗
//! ║ sentinel  ║ ────────────────────────────────────────────┐
//! ╚═══════════╝                                             ↓
//!   ┌──────────────┐      ┌──────────────┐      ┌──────────────────┐
//! ┌→│ next ────────┼─────→│ next ────────┼─────→│ next ────────────┼─┐
//! │ │ prev         │←─────┼─ prev        │←─────┼─ prev            │ │
//! │ │ value        │      │ value        │      │ len              │ │
//! │ └──────────────┘      └──────────────┘      └──────────────────┘ │
//! │   ValueLink             ValueLink             SentinelLink       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `List` handle is a single pointer to a heap-allocated
//! `SentinelLink`, so moving the handle never disturbs the ring. All nodes
//! begin with the same `Link { next, prev }` header. Element nodes
//! (`ValueLink`) append the value; the sentinel appends the length instead.
//!
//! An empty list is a sentinel whose `next` and `prev` point at itself. With
//! elements, the sentinel's `next` is the first element and its `prev` the
//! last. Positions are numbered 0 to *n* - 1 for the elements and *n* for the
//! sentinel, so an empty list has exactly one position, 0.
//!
//! # Iteration
//!
//! [`Iter`], [`IterMut`] and [`IntoIter`] are double-ended, exact-size and
//! fused. Unlike cursors they never wrap: they stop at the sentinel from
//! either side. [`IterMut`] can change elements but not links.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut temps = List::from([18, 21, 19]);
//! let mut iter = temps.iter();
//! assert_eq!(iter.next_back(), Some(&19));
//! assert_eq!(iter.len(), 2);
//!
//! temps.iter_mut().for_each(|t| *t += 1);
//! let warmest = temps.into_iter().max();
//! assert_eq!(warmest, Some(22));
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] or [`CursorMut`] stands on one of the *n* + 1 positions and
//! steps cyclically: past the sentinel it comes back to the first element.
//! Dereferencing gives the element under it and panics at the sentinel.
//! Because a cursor borrows its list, the node under it cannot be freed
//! behind its back.
//!
//! ```
//! use sentinel_list::List;
//!
//! let ring = List::from(['n', 'e', 's', 'w']);
//! let mut compass = ring.cursor(3);
//! compass.move_next();
//! assert!(compass.is_end());
//! compass.move_next();
//! assert_eq!(*compass, 'n');
//! ```
//!
//! [`CursorMut`] edits around its position:
//! - [`insert`] links an element before the cursor and moves onto it;
//! - [`erase`] unlinks the element under the cursor and moves to its successor;
//! - [`remove`] does the same but returns `None` at the sentinel;
//! - [`backspace`] unlinks the element before the cursor.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut line = List::from(['c', 'a', 'r', 't']);
//! let mut caret = line.cursor_mut(3);
//! assert_eq!(caret.backspace(), Some('r'));
//! caret.insert('s');
//! assert_eq!(caret.remove(), Some('s'));
//! assert_eq!(*caret, 't');
//! assert_eq!(line, List::from(['c', 'a', 't']));
//! ```
//!
//! # Logging
//!
//! Structural edits such as `clear` and `swap`, and failed checked lookups,
//! emit [`tracing`] events at `trace` and `debug` level. The library never
//! installs a subscriber.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`IntoIter`]: crate::IntoIter
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`erase`]: crate::list::cursor::CursorMut::erase
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
