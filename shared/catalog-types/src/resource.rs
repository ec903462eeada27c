//! Tri-state result container for asynchronous fetches

/// Outcome of an asynchronous fetch as observed by a consumer.
///
/// Exactly one variant is active per request: `Loading` while the request is
/// in flight, `Success` with the decoded value, or `Error` with a
/// human-readable message and optionally the last known value. Instances are
/// created fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Loading,
    Success(T),
    Error { message: String, data: Option<T> },
}

impl<T> Resource<T> {
    /// Error state without a carried value
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            data: None,
        }
    }

    /// The carried value, if any
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error { data, .. } => data.as_ref(),
            Self::Loading => None,
        }
    }

    /// The error message, if this is an error state
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_the_value() {
        let resource = Resource::Success(42);
        assert!(resource.is_success());
        assert_eq!(resource.data(), Some(&42));
        assert_eq!(resource.error_message(), None);
    }

    #[test]
    fn error_constructor_carries_no_value() {
        let resource: Resource<u32> = Resource::error("boom");
        assert!(resource.is_error());
        assert_eq!(resource.data(), None);
        assert_eq!(resource.error_message(), Some("boom"));
    }

    #[test]
    fn loading_carries_nothing() {
        let resource: Resource<u32> = Resource::Loading;
        assert!(resource.is_loading());
        assert_eq!(resource.data(), None);
        assert_eq!(resource.error_message(), None);
    }
}
