use std::time::{SystemTime, UNIX_EPOCH};

/// Generates a short identifier from the current unix time.
///
/// Placeholder scheme: two requests within the same second get the same
/// identifier, and nothing maps it back to a URL.
pub fn generate_short_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("abc{}", now % 10000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_shape() {
        let id = generate_short_id();
        let digits = id.strip_prefix("abc").expect("missing abc prefix");
        assert!(!digits.is_empty() && digits.len() <= 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}
