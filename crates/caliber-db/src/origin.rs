use caliber_core::error::CaliberError;
use url::Url;

/// A web origin (`scheme://host[:port]`) that scopes persisted items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Parse any URL and keep only its origin. Opaque origins such as `file:` are rejected.
    pub fn parse(input: &str) -> Result<Self, CaliberError> {
        let url = Url::parse(input).map_err(|_| CaliberError::InvalidOrigin {
            origin: input.to_string(),
        })?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(CaliberError::InvalidOrigin {
                origin: input.to_string(),
            });
        }
        Ok(Self(origin.ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Origin {
    type Err = CaliberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Origin::parse(s)
    }
}
