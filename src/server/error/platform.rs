use thiserror::Error;

/// Failure of an outbound call to the chat platform.
///
/// Returned by the channel and guild surfaces that commands and the dispatcher use to
/// reply, react, look up members and change nicknames.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// The platform refused or could not complete the request.
    #[error("{0}")]
    Unavailable(String),
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        PlatformError::Discord(Box::new(err))
    }
}
