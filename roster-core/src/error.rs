/// Errors produced by the `roster-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A power description was shorter than the required minimum.
    #[error("description must be at least 20 characters long")]
    DescriptionTooShort {
        /// Character count of the rejected value.
        len: usize,
    },

    /// A strength value was outside the closed set.
    #[error("strength must be one of: Strong, Weak, Average")]
    InvalidStrength {
        /// The rejected value.
        value: String,
    },
}
