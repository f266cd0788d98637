/// All catalog documents are keyed by a UUID (version 4).
pub type EntityId = uuid::Uuid;
