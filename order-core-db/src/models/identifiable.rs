use uuid::Uuid;

/// Rows keyed by a UUID primary key.
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
