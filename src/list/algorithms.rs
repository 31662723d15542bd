use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy. The copy owns its own sentinel and nodes, so the two lists
/// never share anything afterwards.
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// let list = List::from([String::from("Alice"), String::from("Bob")]);
/// let mut copy = list.clone();
/// copy[1].push_str("by");
/// assert_eq!(list[1], "Bob");
/// assert_eq!(copy[1], "Bobby");
///
/// // Copy assignment
/// let mut other = List::from([String::from("Cindy")]);
/// other.clone_from(&list);
/// assert_eq!(other, list);
/// ```
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Create a list from an array, in the order of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(["Hello", "Iterators"]);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list[0], "Hello");
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(IntoIterator::into_iter(arr))
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the
    /// given value.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.to_string(),
            age,
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_and_ord() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        let c = List::from([1, 2]);
        let d = List::from([1, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);
        assert!(a < d);
        assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
        assert_eq!(List::<i32>::new(), List::new());
        assert!(List::<f64>::from([f64::NAN]).partial_cmp(&List::from([1.0])).is_none());
    }

    #[test]
    fn test_hash() {
        assert_eq!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([1, 2, 3])));
        assert_ne!(hash_of(&List::from([1, 2, 3])), hash_of(&List::from([3, 2, 1])));
    }

    #[test]
    fn test_clone_is_deep() {
        let list = List::from([
            person("Alice", 20),
            person("Bob", 21),
            person("Cindy", 22),
            person("Derek", 23),
        ]);
        let mut copy = list.clone();
        copy.assert_valid();
        assert_eq!(copy, list);

        copy[2].age = 99;
        copy.cursor_mut(3).name = "Dora".to_string();
        assert_eq!(list[2], person("Cindy", 22));
        assert_eq!(list[3], person("Derek", 23));
        assert_eq!(copy[2], person("Cindy", 99));
        assert_eq!(copy[3].name, "Dora");
        assert_ne!(copy.cursor_start(), list.cursor_start());
    }

    #[test]
    fn test_clone_from() {
        let source = List::from([1, 2, 3]);

        let mut longer = List::from([9, 9, 9, 9, 9]);
        longer.clone_from(&source);
        longer.assert_valid();
        assert_eq!(longer, source);

        let mut shorter = List::from([9]);
        shorter.clone_from(&source);
        assert_eq!(shorter, source);

        let mut cleared = List::from([9, 9]);
        cleared.clone_from(&List::new());
        assert!(cleared.is_empty());
        cleared.assert_valid();
    }

    #[test]
    fn test_contains() {
        let list = List::from(["Hello", "Iterators"]);
        assert!(list.contains(&"Hello"));
        assert!(!list.contains(&"World"));
        assert!(!List::<i32>::new().contains(&0));
    }
}
