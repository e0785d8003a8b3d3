use crate::error::PowerUpError;

pub type PowerUpResult<T> = Result<T, PowerUpError>;
