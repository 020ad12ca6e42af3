use thiserror::Error;

/// Reasons a key record is rejected before it is compiled into the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("registration key must not be empty")]
    EmptyKey,

    #[error("registration key may only contain lowercase ASCII letters and digits (found {0:?})")]
    KeyCharacter(char),

    #[error("client id must not be empty")]
    EmptyClientId,

    #[error("client id may only contain uppercase ASCII letters, digits and '_' (found {0:?})")]
    ClientIdCharacter(char),

    #[error("client id must not start or end with '_'")]
    ClientIdUnderscore,
}
