/// Marker for a disengaged [`Optional`](crate::Optional).
///
/// Compares equal to every disengaged container and orders before every
/// engaged one. `Optional<Nullopt>` is not a meaningful type: comparing it
/// against the marker tests engagement, never the held marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullopt(());

/// The disengaged marker.
pub const NULLOPT: Nullopt = Nullopt(());
