use core::error::Error;
use derive_more::Display;

/// Returned by the checked accessors of [`Optional`](crate::Optional) when the
/// container is disengaged.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "optional is disengaged")]
pub struct BadOptionalAccess;

impl Error for BadOptionalAccess {}
