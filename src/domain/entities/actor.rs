//! Actor entity: the user a request is executed for.

/// Login reserved for unauthenticated requests.
pub const ANONYMOUS_LOGIN: &str = "anonymous";

/// Language used when a user has not chosen one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The authenticated (or anonymous) user behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub login: String,
    pub is_superuser: bool,
    /// Preferred UI language tag, such as `en`, `pt-br` or `en_GB`.
    pub language: String,
}

impl Actor {
    /// Creates a new Actor instance.
    pub fn new(login: String, is_superuser: bool, language: String) -> Self {
        Self {
            login,
            is_superuser,
            language,
        }
    }

    /// The actor attached to requests without valid credentials.
    pub fn anonymous() -> Self {
        Self {
            login: ANONYMOUS_LOGIN.to_string(),
            is_superuser: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Returns true if no user is authenticated.
    pub fn is_anonymous(&self) -> bool {
        self.login == ANONYMOUS_LOGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_actor() {
        let actor = Actor::anonymous();
        assert!(actor.is_anonymous());
        assert!(!actor.is_superuser);
        assert_eq!(actor.language, "en");
    }

    #[test]
    fn test_named_actor_is_not_anonymous() {
        let actor = Actor::new("alice".to_string(), false, "fr".to_string());
        assert!(!actor.is_anonymous());
    }
}
