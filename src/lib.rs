//! An optional value container that tracks whether it is engaged and owns
//! the lifetime of the value it holds.
//! ```ignore
//! Optional<T>
//!
//! new()                          -> Optional<T> disengaged
//! from_nullopt(Nullopt)          -> Optional<T> disengaged
//! some(T)                        -> Optional<T>
//! where T: From<A>
//! in_place(A)                    -> Optional<T>
//! in_place_list([U; N], A)       -> Optional<T>
//! in_place_with(|| T)            -> Optional<T> ?panic leaves nothing behind
//! try_in_place_with(|| Result)   -> Result<Optional<T>, E>
//!
//! disengage()                    Drops T
//! assign_nullopt(Nullopt)        Drops T
//! assign_from(&Optional<T>)      clone_from / clone / Drops T
//! assign(Optional<T>)            move into / Drops T
//! assign_value(T)                move into
//! emplace(A), emplace_list, emplace_with, try_emplace_with
//!                                Drops T, then builds ?panic/Err leaves it disengaged
//! swap(&mut Optional<T>)         mem::swap values, or move one across
//!
//! *opt, opt.field                ?panic when disengaged
//! unsafe get_unchecked()         ?ub when disengaged
//! value(), value_mut()           -> Result<&T, BadOptionalAccess>
//! into_value()                   -> Result<T, BadOptionalAccess>
//! value_or(U), into_value_or(U)  -> T
//! is_engaged(), is_disengaged()  -> bool
//!
//! eq_value(&T), cmp_value(&T), partial_cmp_value(&T)
//! hash_with(&BuildHasher)        -> u64, 0 when disengaged
//! ```
//!
//! ```
//! use better_optional::{NULLOPT, Optional};
//!
//! let mut opt = Optional::<i32>::new();
//! assert!(!opt.is_engaged());
//!
//! opt.assign_value(5);
//! assert!(opt.is_engaged());
//! assert_eq!(*opt, 5);
//!
//! opt.assign_nullopt(NULLOPT);
//! assert!(opt == NULLOPT);
//! assert_eq!(opt.value_or(7), 7);
//! assert!(!opt.is_engaged());
//! ```
#![no_std]

mod cmp;
mod error;
mod hash;
mod marker;
mod optional;
mod slot;

pub use error::BadOptionalAccess;
pub use marker::{NULLOPT, Nullopt};
pub use optional::{Optional, make_optional, swap};

/// Short name for [`Optional`].
///
/// ```
/// use better_optional::{NONE, Opt};
///
/// let mut opt: Opt<u8> = Opt::new();
/// assert!(opt == NONE);
/// opt.assign_value(1);
/// assert!(NONE < opt);
/// ```
#[cfg(feature = "aliases")]
pub type Opt<T> = Optional<T>;

/// Short name for [`NULLOPT`].
#[cfg(feature = "aliases")]
pub const NONE: Nullopt = NULLOPT;
