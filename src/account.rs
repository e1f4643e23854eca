//! Account service: sign-in/up and the per-user profile document.
//!
//! The real app talks to a hosted auth + document store. Here it sits behind
//! `AccountService`; `InMemoryAccounts` is the bundled demo backend.

use std::collections::HashMap;

use crate::profile::ProfileDocument;

/// Signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AccountError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please make sure your passwords match.")]
    PasswordMismatch,
    #[error("The email address is badly formatted.")]
    InvalidEmail,
    #[error("Password should be at least {0} characters.")]
    WeakPassword(usize),
    #[error("The email address is already in use by another account.")]
    EmailInUse,
    #[error("Invalid email or password.")]
    InvalidCredential,
    #[error("No user is signed in.")]
    NotSignedIn,
    #[error("Permission denied for profile '{0}'.")]
    PermissionDenied(String),
}

impl AccountError {
    /// Short toast title for the error.
    pub fn title(&self) -> &'static str {
        match self {
            AccountError::MissingFields => "Missing Fields",
            AccountError::PasswordMismatch => "Password Mismatch",
            AccountError::NotSignedIn | AccountError::PermissionDenied(_) => "Error Saving",
            _ => "Authentication Failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;

/// Auth + profile storage backend.
pub trait AccountService {
    fn sign_up(&mut self, full_name: &str, email: &str, password: &str) -> Result<User>;
    fn sign_in(&mut self, email: &str, password: &str) -> Result<User>;
    fn sign_out(&mut self) -> Result<()>;
    fn current_user(&self) -> Option<&User>;
    /// `Ok(None)` when the user has no profile document yet.
    fn load_profile(&self, uid: &str) -> Result<Option<ProfileDocument>>;
    fn save_profile(&mut self, uid: &str, document: ProfileDocument) -> Result<()>;
}

// ─── Form validation ─────────────────────────────────────────────────────────

/// Login form fields.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        Ok(())
    }

    pub fn submit(&self, service: &mut dyn AccountService) -> Result<User> {
        self.validate()?;
        service.sign_in(self.email.trim(), &self.password)
    }
}

/// Sign-up form fields.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AccountError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn submit(&self, service: &mut dyn AccountService) -> Result<User> {
        self.validate()?;
        service.sign_up(self.full_name.trim(), self.email.trim(), &self.password)
    }
}

// ─── In-memory backend ───────────────────────────────────────────────────────

const MIN_PASSWORD_LEN: usize = 6;

struct Account {
    user: User,
    password: String,
}

/// Demo backend keeping accounts and profiles in memory.
#[derive(Default)]
pub struct InMemoryAccounts {
    /// Keyed by lowercase email
    accounts: HashMap<String, Account>,
    profiles: HashMap<String, ProfileDocument>,
    current: Option<User>,
    next_uid: u64,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn looks_like_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain
                        .split_once('.')
                        .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                        .unwrap_or(false)
            }
            None => false,
        }
    }
}

impl AccountService for InMemoryAccounts {
    fn sign_up(&mut self, full_name: &str, email: &str, password: &str) -> Result<User> {
        if !Self::looks_like_email(email) {
            return Err(AccountError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::WeakPassword(MIN_PASSWORD_LEN));
        }
        let key = email.to_lowercase();
        if self.accounts.contains_key(&key) {
            return Err(AccountError::EmailInUse);
        }

        self.next_uid += 1;
        let user = User {
            uid: format!("u{:08x}", self.next_uid),
            email: email.to_string(),
            display_name: Some(full_name.to_string()).filter(|n| !n.is_empty()),
        };
        self.accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        log::info!("account created: {}", user.uid);
        self.current = Some(user.clone());
        Ok(user)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> Result<User> {
        let account = self
            .accounts
            .get(&email.to_lowercase())
            .filter(|a| a.password == password)
            .ok_or(AccountError::InvalidCredential)?;
        log::info!("signed in: {}", account.user.uid);
        self.current = Some(account.user.clone());
        Ok(account.user.clone())
    }

    fn sign_out(&mut self) -> Result<()> {
        match self.current.take() {
            Some(user) => {
                log::info!("signed out: {}", user.uid);
                Ok(())
            }
            None => Err(AccountError::NotSignedIn),
        }
    }

    fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    fn load_profile(&self, uid: &str) -> Result<Option<ProfileDocument>> {
        Ok(self.profiles.get(uid).cloned())
    }

    fn save_profile(&mut self, uid: &str, document: ProfileDocument) -> Result<()> {
        let user = self.current.as_ref().ok_or(AccountError::NotSignedIn)?;
        if user.uid != uid || document.user_id != uid {
            return Err(AccountError::PermissionDenied(uid.to_string()));
        }
        log::info!("profile saved: {}", uid);
        self.profiles.insert(uid.to_string(), document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::tests::completed_form;

    #[test]
    fn test_signup_then_signin() {
        let mut svc = InMemoryAccounts::new();
        let user = match svc.sign_up("Alex Doe", "alex@example.com", "secret1") {
            Ok(u) => u,
            Err(e) => panic!("Expected sign up to succeed, got {}", e),
        };
        assert_eq!(user.display_name.as_deref(), Some("Alex Doe"));
        assert_eq!(svc.current_user(), Some(&user));

        assert!(svc.sign_out().is_ok());
        assert!(svc.current_user().is_none());
        assert_eq!(svc.sign_out(), Err(AccountError::NotSignedIn));

        let again = svc.sign_in("ALEX@example.com", "secret1");
        assert_eq!(again, Ok(user));
    }

    #[test]
    fn test_signup_rejections() {
        let mut svc = InMemoryAccounts::new();
        assert_eq!(
            svc.sign_up("A", "not-an-email", "secret1").err(),
            Some(AccountError::InvalidEmail)
        );
        assert_eq!(
            svc.sign_up("A", "a@b.co", "123").err(),
            Some(AccountError::WeakPassword(6))
        );
        assert!(svc.sign_up("A", "a@b.co", "123456").is_ok());
        assert_eq!(
            svc.sign_up("B", "A@B.co", "abcdef").err(),
            Some(AccountError::EmailInUse)
        );
    }

    #[test]
    fn test_wrong_password() {
        let mut svc = InMemoryAccounts::new();
        assert!(svc.sign_up("A", "a@b.co", "123456").is_ok());
        assert_eq!(
            svc.sign_in("a@b.co", "654321").err(),
            Some(AccountError::InvalidCredential)
        );
        assert_eq!(
            svc.sign_in("nobody@b.co", "123456").err(),
            Some(AccountError::InvalidCredential)
        );
    }

    #[test]
    fn test_form_validation() {
        let login = LoginForm {
            email: "  ".into(),
            password: "x".into(),
        };
        assert_eq!(login.validate(), Err(AccountError::MissingFields));

        let signup = SignupForm {
            full_name: "Alex".into(),
            email: "alex@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        assert_eq!(signup.validate(), Err(AccountError::PasswordMismatch));
        assert_eq!(AccountError::PasswordMismatch.title(), "Password Mismatch");

        let mut svc = InMemoryAccounts::new();
        assert_eq!(
            signup.submit(&mut svc).err(),
            Some(AccountError::PasswordMismatch)
        );
        assert!(svc.current_user().is_none());
    }

    #[test]
    fn test_profile_roundtrip_requires_owner() {
        let mut svc = InMemoryAccounts::new();
        let user = match svc.sign_up("Alex", "alex@example.com", "secret1") {
            Ok(u) => u,
            Err(e) => panic!("Expected sign up to succeed, got {}", e),
        };
        assert_eq!(svc.load_profile(&user.uid), Ok(None));

        let doc = match completed_form().finish(&user.uid) {
            Ok(d) => d,
            Err(e) => panic!("Expected a profile document, got {}", e),
        };
        assert!(svc.save_profile(&user.uid, doc.clone()).is_ok());
        assert_eq!(svc.load_profile(&user.uid), Ok(Some(doc.clone())));

        assert_eq!(
            svc.save_profile("someone-else", doc.clone()).err(),
            Some(AccountError::PermissionDenied("someone-else".into()))
        );

        assert!(svc.sign_out().is_ok());
        assert_eq!(
            svc.save_profile(&user.uid, doc).err(),
            Some(AccountError::NotSignedIn)
        );
    }
}
