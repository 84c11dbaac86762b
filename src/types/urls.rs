//! NewTypes for values used by users when first configuring a client.

use crate::errors::InvalidApiUrl;
use aliri_braid::braid;

/// An [ApiUrl] is the base URL of a PeeringDB API, e.g.
/// `https://www.peeringdb.com/api/`
///
/// Collection names are appended to it as-is, so it must end with `/`.
#[braid(validator, serde)]
pub struct ApiUrl(String);

impl aliri_braid::Validator for ApiUrl {
    type Error = InvalidApiUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidApiUrl::Protocol(s.to_string()))
        } else if !s.ends_with('/') {
            Err(InvalidApiUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("https://www.peeringdb.com/api/")]
    #[case("http://localhost/api/")]
    #[case("http://127.0.0.1:8000/")]
    fn test_parse_url(#[case] url: &str) {
        assert!(ApiUrl::try_from(url).is_ok());
    }

    #[rstest]
    #[case("ftp://www.peeringdb.com/api/")]
    #[case("www.peeringdb.com/api/")]
    fn test_reject_bad_protocol(#[case] url: &str) {
        assert!(matches!(
            ApiUrl::try_from(url).unwrap_err(),
            InvalidApiUrl::Protocol { .. }
        ))
    }

    #[rstest]
    #[case("https://www.peeringdb.com/api")]
    #[case("http://localhost")]
    fn test_reject_missing_trailing_slash(#[case] url: &str) {
        assert!(matches!(
            ApiUrl::try_from(url).unwrap_err(),
            InvalidApiUrl::TrailingSlash { .. }
        ))
    }
}
