//! Ordering and equality. A disengaged container orders before every engaged
//! one; two engaged containers compare by value.

use crate::marker::Nullopt;
use crate::optional::Optional;
use core::cmp::Ordering;

impl<T: PartialEq> PartialEq for Optional<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(l), Some(r)) => *l == *r,
            (Some(_), None) => false,
            (None, Some(_)) => false,
            (None, None) => true,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: PartialOrd> PartialOrd for Optional<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(l), Some(r)) => l.partial_cmp(r),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Ord> Ord for Optional<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_option(), other.as_option()) {
            (Some(l), Some(r)) => l.cmp(r),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T> PartialEq<Nullopt> for Optional<T> {
    #[inline]
    fn eq(&self, _: &Nullopt) -> bool {
        self.is_disengaged()
    }
}

impl<T> PartialEq<Optional<T>> for Nullopt {
    #[inline]
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_disengaged()
    }
}

impl<T> PartialOrd<Nullopt> for Optional<T> {
    #[inline]
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        if self.is_engaged() {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }
}

impl<T> PartialOrd<Optional<T>> for Nullopt {
    #[inline]
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        <Optional<T> as PartialOrd<Nullopt>>::partial_cmp(other, self).map(Ordering::reverse)
    }
}
