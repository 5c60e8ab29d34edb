/// Crate-wide Result alias over anyhow::Error, so fallible functions share
/// one error type and `?` conversions work across layer boundaries.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
