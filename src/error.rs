#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Gets returned when nothing is stored under the key's identity.
    #[error("Key not found in dictionary")]
    KeyNotFound,
    /// Gets returned when the stored value is of a different type than the one the key addresses.
    #[error("Stored value does not match the type requested by the key")]
    TypeMismatch,
}
