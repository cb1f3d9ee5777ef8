/// Pet identifiers are UUIDv7, assigned by the store and never reused.
pub type PetId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh pet identifier.
pub fn new_pet_id() -> PetId {
    uuid::Uuid::now_v7()
}

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a well-formed UUID; such an id
/// can never have been issued by the store.
pub fn parse_pet_id(raw: &str) -> Option<PetId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
