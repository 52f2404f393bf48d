use uuid::Uuid;

/// Opaque identifier of the form `<prefix>-<32 hex chars>`.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
