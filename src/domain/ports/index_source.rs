//! IndexSource port - where the resolver gets its lookup indexes from

use crate::domain::entities::LookupIndex;
use crate::domain::value_objects::EntityKind;

/// Supplies the lookup index for an entity kind
///
/// Implementations must not fail: anything that goes wrong degrades to a
/// smaller (possibly empty) index.
pub trait IndexSource {
    fn load_index(&self, kind: EntityKind) -> LookupIndex;
}

impl<F> IndexSource for F
where
    F: Fn(EntityKind) -> LookupIndex,
{
    fn load_index(&self, kind: EntityKind) -> LookupIndex {
        self(kind)
    }
}
