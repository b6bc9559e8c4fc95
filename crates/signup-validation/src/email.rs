//! Email validation functions

/// Characters allowed in a local-part atom besides ASCII letters and digits
#[cfg(not(feature = "rfc-email"))]
const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";

/// Validates email syntax
///
/// When the `rfc-email` feature is enabled, delegates to the `email_address`
/// crate. Otherwise checks for:
/// - exactly one '@' with content on both sides
/// - a dot-atom local part (no leading, trailing or doubled dots)
/// - a dot-separated domain whose labels are alphanumeric (inner hyphens allowed)
/// - a top-level label of at least 2 characters that starts and ends with a letter
///
/// No DNS or mailbox verification is attempted.
#[cfg(feature = "rfc-email")]
pub fn is_valid_email(email: &str) -> bool {
    email_address::EmailAddress::is_valid(email)
}

#[cfg(not(feature = "rfc-email"))]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

#[cfg(not(feature = "rfc-email"))]
fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > 64 {
        return false;
    }

    // Dot-atom: every segment between dots is non-empty
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    })
}

#[cfg(not(feature = "rfc-email"))]
fn is_valid_top_level(label: &str) -> bool {
    let starts = label.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let ends = label.chars().last().is_some_and(|c| c.is_ascii_alphabetic());

    label.len() >= 2 && starts && ends
}

#[cfg(not(feature = "rfc-email"))]
fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 255 {
        return false;
    }

    let mut labels = domain.split('.').peekable();
    let mut count = 0;

    while let Some(label) = labels.next() {
        count += 1;

        if label.is_empty() || label.len() > 63 {
            return false;
        }
        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return false;
        }

        // Top-level label
        if labels.peek().is_none() && !is_valid_top_level(label) {
            return false;
        }
    }

    count >= 2
}

#[cfg(all(test, not(feature = "rfc-email")))]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("first.middle.last@example.com"));
        assert!(is_valid_email("user@example.c0m"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_local_part_dot_placement() {
        assert!(!is_valid_email(".a@b.com"));
        assert!(!is_valid_email("a.@b.com"));
        assert!(!is_valid_email("a..b@c.com"));
        assert!(!is_valid_email(".@b.com"));
    }

    #[test]
    fn test_top_level_label_needs_letters() {
        assert!(!is_valid_email("a@b.12"));
        assert!(!is_valid_email("a@b.1com"));
        assert!(!is_valid_email("a@b.com1"));
        assert!(!is_valid_email("a@10.0.0.1"));
    }
}
