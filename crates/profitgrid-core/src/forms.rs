//! Login and registration form input with client-side checks.

use crate::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_USERNAME_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks run in a fixed order; the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort {
                min: MIN_USERNAME_LEN,
            });
        }
        Ok(())
    }

    /// Blank every field, as after a successful registration.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_reported_before_length_checks() {
        let form = RegisterForm::new("al", "abc", "abd");
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn short_password_is_reported_before_short_username() {
        let form = RegisterForm::new("al", "abc", "abc");
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Password must be at least 6 characters long."
        );
    }

    #[test]
    fn short_username_is_rejected() {
        let form = RegisterForm::new("al", "secret1", "secret1");
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Username must be at least 3 characters long."
        );
    }

    #[test]
    fn minimum_lengths_are_inclusive() {
        assert!(RegisterForm::new("ada", "secret", "secret").validate().is_ok());
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            LoginForm::new(" ", "x").validate(),
            Err(ValidationError::MissingUsername)
        );
        assert_eq!(
            LoginForm::new("ada", "").validate(),
            Err(ValidationError::MissingPassword)
        );
        assert!(LoginForm::new("ada", "x").validate().is_ok());
    }

    #[test]
    fn clear_blanks_every_field() {
        let mut form = RegisterForm::new("ada", "secret1", "secret1");
        form.clear();
        assert_eq!(form, RegisterForm::default());
    }
}
