#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Neither page layout produced a single entry. The title survives so
    /// the caller can still print a header for the failed lookup.
    #[error("no definitions found")]
    EmptyResult { title: String },
}
