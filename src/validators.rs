use email_address::EmailAddress;
use url::Url;

/// Returns `true` if the provided string is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Returns `true` if the provided string parses as a URL with a scheme.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("demo@animemoments.com"));
        assert!(!is_valid_email("invalid"));
    }

    #[test]
    fn url_validation() {
        assert!(is_valid_url("https://images.unsplash.com/photo.jpg"));
        assert!(!is_valid_url("not-a-url"));
    }
}
