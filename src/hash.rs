use crate::optional::Optional;
use core::hash::{Hash, Hasher};

/// An engaged container feeds only its value, so it hashes like the value.
/// A disengaged one feeds a `0_u64` sentinel, the same `0` that
/// [`Optional::hash_with`] reports.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_option() {
            Some(value) => value.hash(state),
            None => state.write_u64(0),
        }
    }
}
