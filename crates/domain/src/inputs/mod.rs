//! Form inputs, their schemas, and the live per-field checks.

mod account_creation;
mod account_deletion;

pub use account_creation::{
    password_too_short, AccountCreationInput, MIN_PASSWORD_LENGTH, PASSWORD_TOO_SHORT_MESSAGE,
};
pub use account_deletion::{
    comment_too_long, AccountDeletionInput, COMMENT_TOO_LONG_MESSAGE, MAX_COMMENT_LENGTH,
};
