//! HTTP verbs used by the service.

use strum::{Display, EnumIter, EnumString};

/// The HTTP methods the service's operations use.
///
/// ## Examples
///
/// ```rust
/// use svix::RestMethod;
///
/// assert!(RestMethod::Post.accepts_idempotency_key());
/// assert!(!RestMethod::Put.accepts_idempotency_key());
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Retrieve a resource or a page of resources.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if the service honors an `idempotency-key` header for
    /// this method. Only `POST` requests are deduplicated.
    pub fn accepts_idempotency_key(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        match method {
            RestMethod::Get => reqwest::Method::GET,
            RestMethod::Post => reqwest::Method::POST,
            RestMethod::Put => reqwest::Method::PUT,
            RestMethod::Patch => reqwest::Method::PATCH,
            RestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("PUT".parse::<RestMethod>().unwrap(), RestMethod::Put);
        assert!("TRACE".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_only_post_accepts_idempotency_key() {
        let accepting: Vec<_> = RestMethod::iter()
            .filter(RestMethod::accepts_idempotency_key)
            .collect();
        assert_eq!(accepting, vec![RestMethod::Post]);
    }

    #[test]
    fn test_into_reqwest_method() {
        for method in RestMethod::iter() {
            assert_eq!(reqwest::Method::from(method).as_str(), method.to_string());
        }
    }
}
