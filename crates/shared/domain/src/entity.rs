//! Identity capability shared by every persisted record.

use crate::constants::TRANSIENT_ID;
use crate::error::DomainResult;

/// Numeric identity assigned by the store.
pub type EntityId = i64;

/// A record with a stable identifier.
///
/// Repositories are generic over this capability: anything that exposes an
/// id and can check its own invariants can be created, replaced, removed
/// and read back by id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier of this record; `<= 0` while the record is transient.
    fn id(&self) -> EntityId;

    /// Check the record's invariants before it is written.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    /// True until the store has assigned an identifier.
    fn is_transient(&self) -> bool {
        self.id() <= TRANSIENT_ID
    }
}
