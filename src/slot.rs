//! Storage for at most one value.
//!
//! The engaged flag and the value live in one sum type, so a vacant slot can
//! never hold a live value and an occupied slot always holds exactly one.
//! Types without drop glue tear down for free; the compiler elides the drop.

use core::hint;

pub(crate) struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    pub(crate) const fn vacant() -> Self {
        Self { value: None }
    }

    pub(crate) const fn occupied(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub(crate) const fn is_engaged(&self) -> bool {
        self.value.is_some()
    }

    /// Stores `value`. The slot must be vacant.
    pub(crate) fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.is_engaged(), "construct into an occupied slot");
        self.value.insert(value)
    }

    /// Runs `f` while the slot is still vacant and stores its result.
    ///
    /// If `f` unwinds the slot stays vacant and nothing is dropped on its
    /// behalf.
    pub(crate) fn construct_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        debug_assert!(!self.is_engaged(), "construct into an occupied slot");
        let value = f();
        self.value.insert(value)
    }

    pub(crate) fn try_construct_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        debug_assert!(!self.is_engaged(), "construct into an occupied slot");
        let value = f()?;
        Ok(self.value.insert(value))
    }

    /// Drops the value. The slot must be occupied.
    pub(crate) fn destroy(&mut self) {
        debug_assert!(self.is_engaged(), "destroy of a vacant slot");
        self.value = None;
    }

    /// Moves the value out. The slot must be occupied.
    pub(crate) fn take(&mut self) -> T {
        debug_assert!(self.is_engaged(), "take from a vacant slot");
        match self.value.take() {
            Some(value) => value,
            None => vacant_slot(),
        }
    }

    pub(crate) const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub(crate) const fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// # Safety
    ///
    /// The slot must be occupied.
    pub(crate) unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.is_engaged(), "unchecked access to a vacant slot");
        match self.value {
            Some(ref value) => value,
            // SAFETY: the caller guarantees the slot is occupied.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    /// # Safety
    ///
    /// The slot must be occupied.
    pub(crate) unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_engaged(), "unchecked access to a vacant slot");
        match self.value {
            Some(ref mut value) => value,
            // SAFETY: the caller guarantees the slot is occupied.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }

    pub(crate) fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T> Clone for Slot<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self.value {
            Some(ref value) => Self::occupied(value.clone()),
            None => Self::vacant(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match (&mut self.value, &source.value) {
            (Some(to), Some(from)) => to.clone_from(from),
            // the right-hand side is cloned before the slot is written
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T> Copy for Slot<T> where T: Copy {}

#[cold]
#[track_caller]
fn vacant_slot() -> ! {
    panic!("slot is vacant")
}
