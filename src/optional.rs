use crate::error::BadOptionalAccess;
use crate::marker::{NULLOPT, Nullopt};
use crate::slot::Slot;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::ops::{Deref, DerefMut};

/// A container that either holds one `T` (engaged) or nothing (disengaged).
///
/// The contained value is created when the container becomes engaged and
/// dropped exactly once when it becomes disengaged or is itself dropped.
///
/// Access comes in two tiers. `*opt` and the `unsafe` `get_unchecked*`
/// accessors assume the container is engaged; [`value`](Self::value) and
/// friends check and report [`BadOptionalAccess`].
pub struct Optional<T> {
    slot: Slot<T>,
}

impl<T> Optional<T> {
    /// A disengaged container.
    pub const fn new() -> Self {
        Self { slot: Slot::vacant() }
    }

    /// A disengaged container, spelled with the marker.
    pub const fn from_nullopt(_: Nullopt) -> Self {
        Self::new()
    }

    /// An engaged container holding `value`.
    pub const fn some(value: T) -> Self {
        Self { slot: Slot::occupied(value) }
    }

    /// Builds the value directly from `args`.
    ///
    /// ```
    /// # use better_optional::Optional;
    /// let pair = Optional::<(i32, i32)>::in_place((1, 2));
    /// assert_eq!(pair.0, 1);
    /// assert_eq!(pair.1, 2);
    /// ```
    pub fn in_place<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::in_place_with(|| T::from(args))
    }

    /// Builds the value from a leading fixed-size sequence followed by `args`.
    pub fn in_place_list<U, A, const N: usize>(list: [U; N], args: A) -> Self
    where
        T: From<([U; N], A)>,
    {
        Self::in_place_with(|| T::from((list, args)))
    }

    /// Builds the value with `f`. If `f` panics no container is produced and
    /// nothing is dropped for the unfinished value.
    pub fn in_place_with<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut slot = Slot::vacant();
        slot.construct_with(f);
        Self { slot }
    }

    /// Builds the value with a fallible `f`, passing its error through
    /// untouched.
    pub fn try_in_place_with<F, E>(f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = Slot::vacant();
        slot.try_construct_with(f)?;
        Ok(Self { slot })
    }

    pub const fn is_engaged(&self) -> bool {
        self.slot.is_engaged()
    }

    pub const fn is_disengaged(&self) -> bool {
        !self.is_engaged()
    }

    /// Drops the value if there is one.
    pub fn disengage(&mut self) {
        if self.is_engaged() {
            self.slot.destroy();
        }
    }

    pub fn assign_nullopt(&mut self, _: Nullopt) -> &mut Self {
        self.disengage();
        self
    }

    /// Copy-assigns from `other`. Same as [`Clone::clone_from`].
    ///
    /// When both sides are engaged the value is updated with `T::clone_from`
    /// and keeps whatever state that leaves behind if it panics. When only
    /// `other` is engaged and the clone panics, `self` stays disengaged.
    pub fn assign_from(&mut self, other: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.slot.clone_from(&other.slot);
        self
    }

    /// Move-assigns from `other`: engaged `other` assigns into or builds the
    /// value, disengaged `other` disengages `self`.
    pub fn assign(&mut self, other: Self) -> &mut Self {
        match other.slot.into_inner() {
            Some(value) => self.assign_value(value),
            None => self.assign_nullopt(NULLOPT),
        }
    }

    /// Assigns into the held value, or builds one from `value` if disengaged.
    pub fn assign_value(&mut self, value: T) -> &mut Self {
        if let Some(current) = self.slot.get_mut() {
            *current = value;
        } else {
            self.slot.construct(value);
        }
        self
    }

    /// Drops the current value, if any, and builds a new one from `args`.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    pub fn emplace_list<U, A, const N: usize>(&mut self, list: [U; N], args: A) -> &mut T
    where
        T: From<([U; N], A)>,
    {
        self.emplace_with(|| T::from((list, args)))
    }

    /// Drops the current value, if any, and builds a new one with `f`.
    ///
    /// The old value is gone before `f` runs: if `f` panics the container is
    /// left disengaged.
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.disengage();
        self.slot.construct_with(f)
    }

    /// Fallible [`emplace_with`](Self::emplace_with). On `Err` the container
    /// is left disengaged and the error is returned as is.
    pub fn try_emplace_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.disengage();
        self.slot.try_construct_with(f)
    }

    pub fn get_or_insert_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.is_disengaged() {
            self.slot.construct_with(f);
        }

        // SAFETY: a disengaged `self` was engaged just above.
        unsafe { self.slot.get_unchecked_mut() }
    }

    /// Moves the value out, leaving `self` disengaged.
    pub const fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Stores `value`, returning the previous contents.
    pub const fn replace(&mut self, value: T) -> Self {
        mem::replace(self, Self::some(value))
    }

    /// Exchanges contents with `other`.
    ///
    /// Two engaged containers swap their values in place and nothing is
    /// rebuilt. Otherwise the one value moves across and both states flip.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.is_engaged(), other.is_engaged()) {
            (true, true) => {
                // SAFETY: both sides are engaged.
                let ours = unsafe { self.slot.get_unchecked_mut() };
                // SAFETY: both sides are engaged.
                let theirs = unsafe { other.slot.get_unchecked_mut() };
                mem::swap(ours, theirs);
            }
            (true, false) => {
                other.slot.construct(self.slot.take());
            }
            (false, true) => {
                self.slot.construct(other.slot.take());
            }
            (false, false) => (),
        }
    }

    /// Checked access.
    ///
    /// ```
    /// # use better_optional::{BadOptionalAccess, Optional};
    /// let full = Optional::some(3);
    /// let empty = Optional::<i32>::new();
    /// assert_eq!(full.value(), Ok(&3));
    /// assert_eq!(empty.value(), Err(BadOptionalAccess));
    /// ```
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.slot.get().ok_or(BadOptionalAccess)
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.slot.get_mut().ok_or(BadOptionalAccess)
    }

    pub fn into_value(self) -> Result<T, BadOptionalAccess> {
        self.slot.into_inner().ok_or(BadOptionalAccess)
    }

    /// A clone of the value, or `default` converted into `T`. Never engages
    /// `self`.
    pub fn value_or<U>(&self, default: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match self.slot.get() {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    pub fn into_value_or<U>(self, default: U) -> T
    where
        U: Into<T>,
    {
        match self.slot.into_inner() {
            Some(value) => value,
            None => default.into(),
        }
    }

    /// # Safety
    ///
    /// `self` must be engaged. Checked only by a debug assertion.
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: the safety contract must be upheld by the caller.
        unsafe { self.slot.get_unchecked() }
    }

    /// # Safety
    ///
    /// `self` must be engaged. Checked only by a debug assertion.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: the safety contract must be upheld by the caller.
        unsafe { self.slot.get_unchecked_mut() }
    }

    pub const fn as_option(&self) -> Option<&T> {
        self.slot.get()
    }

    pub const fn as_option_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    pub fn into_option(self) -> Option<T> {
        self.slot.into_inner()
    }

    /// Whether `self` is engaged with a value equal to `value`.
    pub fn eq_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_option().is_some_and(|held| held == value)
    }

    /// Orders against a bare value. Disengaged sorts before every value.
    pub fn partial_cmp_value(&self, value: &T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        match self.as_option() {
            Some(held) => held.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }

    pub fn cmp_value(&self, value: &T) -> Ordering
    where
        T: Ord,
    {
        match self.as_option() {
            Some(held) => held.cmp(value),
            None => Ordering::Less,
        }
    }

    /// Hashes the value with `build`, or returns `0` when disengaged.
    ///
    /// A disengaged container and one holding a value that happens to hash
    /// to `0` collide.
    pub fn hash_with<S>(&self, build: &S) -> u64
    where
        T: Hash,
        S: BuildHasher,
    {
        self.as_option().map_or(0, |value| build.hash_one(value))
    }
}

/// Builds an engaged [`Optional`] holding `value`.
pub const fn make_optional<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// Exchanges the contents of two containers. See [`Optional::swap`].
pub fn swap<T>(a: &mut Optional<T>, b: &mut Optional<T>) {
    a.swap(b);
}

#[cold]
#[track_caller]
fn disengaged_access() -> ! {
    panic!("optional is disengaged")
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if `self` is disengaged. That is a bug in the caller, not a
    /// recoverable condition; use [`Optional::value`] for the checked form.
    #[track_caller]
    fn deref(&self) -> &T {
        match self.slot.get() {
            Some(value) => value,
            None => disengaged_access(),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.slot.get_mut() {
            Some(value) => value,
            None => disengaged_access(),
        }
    }
}

impl<T> Clone for Optional<T>
where
    T: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.slot.clone_from(&source.slot);
    }
}

impl<T> Copy for Optional<T> where T: Copy {}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Optional<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Engaged").field(value).finish(),
            None => f.write_str("Disengaged"),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> From<&Optional<T>> for bool {
    fn from(value: &Optional<T>) -> Self {
        value.is_engaged()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{Optional, make_optional, swap};
    use crate::error::BadOptionalAccess;
    use crate::marker::NULLOPT;
    use std::string::String;
    use std::vec::Vec;

    struct Variadic {
        v: Vec<i32>,
        f: f32,
        c: char,
        b: bool,
    }

    impl From<([i32; 4], (f32, char, bool))> for Variadic {
        fn from((list, (f, c, b)): ([i32; 4], (f32, char, bool))) -> Self {
            Self { v: list.to_vec(), f, c, b }
        }
    }

    #[test]
    fn construction() {
        let a: Optional<i32> = Optional::new();
        let b: Optional<i32> = Optional::from_nullopt(NULLOPT);
        assert!(a.is_disengaged());
        assert!(b.is_disengaged());
        assert_eq!(a.value(), Err(BadOptionalAccess));

        let s = String::from("hello");
        let c = Optional::some(s.clone());
        assert!(c.is_engaged());
        assert_eq!(*c, s);

        let d: Optional<String> = s.into();
        assert_eq!(d.value().map(String::as_str), Ok("hello"));
    }

    #[test]
    fn construction_in_place() {
        let pair = Optional::<(i32, i32)>::in_place((1, 2));
        assert_eq!(pair.0, 1);
        assert_eq!(pair.1, 2);

        let v = Optional::<Variadic>::in_place_list([1, 2, 3, 4], (4.12, 'a', true));
        assert_eq!(v.v, [1, 2, 3, 4]);
        assert_eq!(v.f, 4.12);
        assert_eq!(v.c, 'a');
        assert!(v.b);
    }

    #[test]
    fn emplace_list_rebuilds() {
        let mut v = Optional::<Variadic>::new();
        v.emplace_list([1, 2, 3, 4], (1.5, 'a', true));
        assert_eq!(v.v, [1, 2, 3, 4]);

        let rebuilt = v.emplace_list([5, 6, 7, 8], (2.5, 'z', false));
        assert_eq!(rebuilt.v, [5, 6, 7, 8]);
        assert_eq!(rebuilt.f, 2.5);
        assert_eq!(rebuilt.c, 'z');
        assert!(!rebuilt.b);
        assert!(v.is_engaged());
    }

    #[test]
    fn const_construction() {
        const A: Optional<i32> = Optional::some(32);
        const B: Optional<f32> = Optional::new();
        const ENGAGED: bool = A.is_engaged();
        assert!(ENGAGED);
        assert_eq!(*A, 32);
        assert!(B.is_disengaged());
    }

    #[test]
    fn try_in_place_passes_error_through() {
        let bad = Optional::<u8>::try_in_place_with(|| "256".parse::<u8>());
        assert_eq!(bad.map(|_| ()), Err("256".parse::<u8>().unwrap_err()));
        let good = Optional::<u8>::try_in_place_with(|| "255".parse::<u8>());
        assert_eq!(good.ok().and_then(Optional::into_option), Some(255));
    }

    #[test]
    fn assignment_matrix() {
        let mut a = Optional::<i32>::new();
        a.assign_from(&Optional::new());
        assert!(a.is_disengaged());

        let mut a = Optional::some(1);
        a.assign_from(&Optional::new());
        assert!(a.is_disengaged());

        let mut a = Optional::<i32>::new();
        a.assign_from(&Optional::some(1));
        assert_eq!(a.value(), Ok(&1));

        let mut a = Optional::some(1);
        a.assign_from(&Optional::some(2));
        assert_eq!(*a, 2);

        let mut a = Optional::some(1);
        a.assign_nullopt(NULLOPT);
        assert!(a.is_disengaged());

        let mut a = Optional::<i32>::new();
        a.assign_value(1);
        assert_eq!(*a, 1);

        let mut a = Optional::some(String::from("a"));
        a.assign(Optional::some(String::from("b")));
        assert_eq!(*a, "b");
        a.assign(Optional::new());
        assert!(a.is_disengaged());
    }

    #[test]
    fn observers() {
        let a = Optional::<i32>::new();
        assert_eq!(a.value_or(1), 1);
        assert!(a.is_disengaged());
        assert!(!bool::from(&a));

        let mut s = Optional::some(String::from("1234"));
        assert_eq!(s.len(), 4);
        assert_eq!(s.value_or("12345"), "1234");
        s.clear();
        assert_eq!(*s, "");
        *s.value_mut().unwrap() = String::from("x");
        assert_eq!(s.into_value_or("y"), "x");

        let mut n = Optional::some(1);
        *n = 2;
        assert_eq!(*n, 2);
    }

    #[test]
    fn modifiers() {
        let mut a = Optional::<String>::new();
        let mut b = Optional::<String>::new();
        a.swap(&mut b);
        assert!(a.is_disengaged() && b.is_disengaged());

        let mut a = Optional::<String>::new();
        let mut b = Optional::some(String::from("b"));
        a.swap(&mut b);
        assert_eq!(*a, "b");
        assert!(b.is_disengaged());

        let mut a = Optional::some(String::from("a"));
        let mut b = Optional::<String>::new();
        swap(&mut a, &mut b);
        assert_eq!(*b, "a");
        assert!(a.is_disengaged());

        let mut a = Optional::some(String::from("a"));
        let mut b = Optional::some(String::from("b"));
        a.swap(&mut b);
        assert_eq!(*a, "b");
        assert_eq!(*b, "a");

        let mut a = Optional::<String>::new();
        a.emplace("b");
        assert_eq!(*a, "b");
        a.emplace("c");
        assert_eq!(*a, "c");
    }

    #[test]
    fn take_replace_insert() {
        let mut a = Optional::some(1);
        let taken = a.take();
        assert!(a.is_disengaged());
        assert_eq!(*taken, 1);

        let old = a.replace(2);
        assert!(old.is_disengaged());
        assert_eq!(a.replace(3).into_option(), Some(2));

        let mut b = Optional::<i32>::new();
        *b.get_or_insert_with(|| 5) += 1;
        assert_eq!(*b.get_or_insert_with(|| 0), 6);
    }

    #[test]
    fn make_optional_deduces() {
        let a = make_optional(String::from("1234567890"));
        assert_eq!(*a, "1234567890");

        let i = 1;
        let r = &i;
        let b: Optional<i32> = make_optional(*r);
        assert_eq!(*b, i);
    }

    #[test]
    fn debug_format() {
        assert_eq!(std::format!("{:?}", Optional::some(1)), "Engaged(1)");
        assert_eq!(std::format!("{:?}", Optional::<i32>::new()), "Disengaged");
    }

    #[test]
    #[should_panic(expected = "optional is disengaged")]
    fn deref_disengaged_panics() {
        let a = Optional::<i32>::new();
        assert_eq!(*a, 0);
    }
}
