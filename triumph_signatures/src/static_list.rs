use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// A list borrowed from a `const` signature, or owned by a parsed one.
///
/// Comparisons and hashing only look at the contents, so a borrowed list equals an owned list
/// with the same elements. Unlike `Cow<'a, [T]>`, this is covariant over `'a`.
#[derive(Debug, Clone)]
pub enum StaticList<'a, T> {
    Borrowed(&'a [T]),
    Owned(Vec<T>),
}

impl<'a, T> Deref for StaticList<'a, T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        match self {
            StaticList::Borrowed(list) => list,
            StaticList::Owned(list) => list,
        }
    }
}
impl<'a, T> From<Vec<T>> for StaticList<'a, T> {
    fn from(list: Vec<T>) -> Self {
        StaticList::Owned(list)
    }
}

impl<'a, T: PartialEq> PartialEq for StaticList<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}
impl<'a, T: Eq> Eq for StaticList<'a, T> {}
impl<'a, T: PartialOrd> PartialOrd for StaticList<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}
impl<'a, T: Ord> Ord for StaticList<'a, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}
impl<'a, T: Hash> Hash for StaticList<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}
