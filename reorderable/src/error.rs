/// Boxed error returned by a fallible `on_move` callback.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// The `on_move` callback failed. The drag session is kept as it was before the call.
    #[error("moving item from index {from} to index {to} failed")]
    MoveFailed {
        from: usize,
        to: usize,
        #[source]
        source: BoxError,
    },
}
