/// Crate-wide Result alias with anyhow::Error as the error type.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
