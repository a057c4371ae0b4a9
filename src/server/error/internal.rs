use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored password hash could not be checked.
    ///
    /// Happens when the hash column holds something bcrypt cannot parse. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Failed to verify password hash for user {user_id}: {source}")]
    PasswordVerification {
        /// User whose hash failed to parse
        user_id: i32,
        /// The underlying bcrypt error
        #[source]
        source: bcrypt::BcryptError,
    },

    /// Password could not be hashed during registration.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[source] bcrypt::BcryptError),

    /// A status column holds a value outside its known set.
    #[error("Unknown {kind} status '{value}' in database")]
    UnknownStatus {
        /// Which status column
        kind: &'static str,
        /// The raw stored value
        value: String,
    },
}
