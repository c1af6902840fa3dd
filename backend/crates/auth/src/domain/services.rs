//! Credential Validator
//!
//! Normalizes registration input and reports every rule it breaks, in a
//! fixed order, so the caller can show all problems at once.
//!
//! ## Order
//! 1. user name present, then letters and digits only
//! 2. email syntax
//! 3. password present, then minimum length, then maximum length
//! 4. user name minimum length, then maximum length
//! 5. user name taken, then email taken
//!
//! Uniqueness is only asked about for fields that passed their syntax
//! rules. Both lookups run concurrently.

use std::fmt;
use std::sync::Arc;

use platform::password::PasswordPolicyError;
use thiserror::Error;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::{Email, EmailError},
    user_name::{UserName, UserNameError},
    user_password::RawPassword,
};
use crate::error::AuthResult;

/// A single broken registration rule
///
/// The display strings are the messages shown to people registering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialFailure {
    #[error("You must provide a username.")]
    UserNameMissing,

    #[error("Username can only contain letters and numbers.")]
    UserNameNotAlphanumeric,

    #[error("You must provide a valid email address.")]
    EmailInvalid,

    #[error("You must provide a valid password.")]
    PasswordMissing,

    #[error("Passwords must have 12 or more characters.")]
    PasswordTooShort,

    #[error("Password cannot exceed 50 characters.")]
    PasswordTooLong,

    #[error("Username must have 3 or more characters.")]
    UserNameTooShort,

    #[error("Username cannot exceed 30 characters.")]
    UserNameTooLong,

    #[error("Username is already taken.")]
    UserNameTaken,

    #[error("Email is already in use.")]
    EmailTaken,
}

impl From<UserNameError> for CredentialFailure {
    fn from(err: UserNameError) -> Self {
        match err {
            UserNameError::Empty => Self::UserNameMissing,
            UserNameError::NotAlphanumeric => Self::UserNameNotAlphanumeric,
            UserNameError::TooShort { .. } => Self::UserNameTooShort,
            UserNameError::TooLong { .. } => Self::UserNameTooLong,
        }
    }
}

impl From<EmailError> for CredentialFailure {
    fn from(_: EmailError) -> Self {
        Self::EmailInvalid
    }
}

impl From<PasswordPolicyError> for CredentialFailure {
    fn from(err: PasswordPolicyError) -> Self {
        match err {
            PasswordPolicyError::Empty => Self::PasswordMissing,
            PasswordPolicyError::TooShort { .. } => Self::PasswordTooShort,
            PasswordPolicyError::TooLong { .. } => Self::PasswordTooLong,
        }
    }
}

/// Raw registration fields as submitted
#[derive(Clone, Default)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of validation: normalized fields plus every broken rule
#[derive(Debug)]
pub struct ValidationReport {
    /// Trimmed, lowercased user name
    pub username: String,
    /// Trimmed, lowercased email
    pub email: String,
    /// Password exactly as submitted
    pub password: RawPassword,
    pub failures: Vec<CredentialFailure>,
}

/// Registration fields that passed every rule
#[derive(Debug)]
pub struct ValidCredentials {
    pub user_name: UserName,
    pub email: Email,
    pub password: RawPassword,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Typed credentials, or the failures if any rule was broken
    pub fn into_valid(self) -> Result<ValidCredentials, Vec<CredentialFailure>> {
        if !self.is_valid() {
            return Err(self.failures);
        }

        let user_name = UserName::new(&self.username).map_err(|e| vec![e.into()])?;
        let email = Email::new(&self.email).map_err(|e| vec![e.into()])?;

        Ok(ValidCredentials {
            user_name,
            email,
            password: self.password,
        })
    }
}

/// Validates registration input against syntax and uniqueness rules
pub struct CredentialValidator<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CredentialValidator<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Normalize and check the input
    ///
    /// Returns `Err` only when the uniqueness lookups fail.
    pub async fn validate(&self, input: RegistrationInput) -> AuthResult<ValidationReport> {
        let username = UserName::normalize(&input.username);
        let email = Email::normalize(&input.email);
        let password = RawPassword::new(input.password);

        let mut failures: Vec<CredentialFailure> = Vec::new();

        let charset = UserName::check_charset(&username);
        if let Err(e) = &charset {
            failures.push(e.clone().into());
        }

        let parsed_email = Email::new(&email);
        if let Err(e) = &parsed_email {
            failures.push(e.clone().into());
        }

        if let Err(e) = password.check_policy() {
            failures.push(e.into());
        }

        let length = UserName::check_length(&username);
        if let Err(e) = &length {
            failures.push(e.clone().into());
        }

        let user_name = match (charset, length) {
            (Ok(()), Ok(())) => Some(UserName::from_db(username.clone())),
            _ => None,
        };
        let parsed_email = parsed_email.ok();

        let (user_name_taken, email_taken) = tokio::try_join!(
            async {
                match &user_name {
                    Some(name) => self.user_repo.exists_by_user_name(name).await,
                    None => Ok(false),
                }
            },
            async {
                match &parsed_email {
                    Some(email) => self.user_repo.exists_by_email(email).await,
                    None => Ok(false),
                }
            },
        )?;

        if user_name_taken {
            failures.push(CredentialFailure::UserNameTaken);
        }
        if email_taken {
            failures.push(CredentialFailure::EmailTaken);
        }

        Ok(ValidationReport {
            username,
            email,
            password,
            failures,
        })
    }
}
