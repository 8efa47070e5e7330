use reqwest::StatusCode;
use thiserror::Error;

/// Closed error taxonomy shared by the network and persistence paths.
///
/// Every fallible operation in this crate resolves to exactly one of these
/// kinds; callers map each kind to user-facing presentation. The image cache
/// is the one exception and degrades all failures to "no image" instead.
#[derive(Error, Debug)]
pub enum FollowerError {
    /// The input could not be formed into a valid request URL. The name is
    /// inherited from the username path, but any malformed request input
    /// lands here.
    #[error("This username created an invalid request. Please try again.")]
    InvalidUsername,

    /// Transport-level failure: no connectivity, DNS, timeout.
    #[error("Unable to complete your request. Please check your internet connection")]
    UnableToComplete(#[source] reqwest::Error),

    /// The server answered with a non-200 status. The status is carried for
    /// callers that inspect it; the message stays generic.
    #[error("Invalid response from the server, please try again")]
    InvalidResponse(StatusCode),

    /// Success status but the body was missing or did not match the schema.
    #[error("The data received from the server was invalid. Please try again")]
    InvalidData,

    /// Reading, decoding or rewriting the persisted favorites blob failed.
    #[error("There was an error favoriting this user. Please try again.")]
    UnableToFavorite,

    /// Add requested for a login that is already favorited.
    #[error("You've already favorited this user. You must REALLY like them!")]
    AlreadyInFavorites,
}

pub type Result<T> = std::result::Result<T, FollowerError>;
