use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Username and room are required!")]
    MissingUsernameOrRoom,
    #[error("Username is in use!")]
    UsernameTaken,
    #[error("Already in a room!")]
    AlreadyJoined,
    #[error("Profanity is not allowed!")]
    ProfanityNotAllowed,
    #[error("You must join a room first!")]
    NotJoined,
}
