const INVALID_CHARS: &[char] = &[':', '#', '*', '?', '"', '<', '>', '|', '/', '\\', ','];
const MAX_NAME_LEN: usize = 255;

/// Returns the first rule a job name violates, or `None` when the name is
/// acceptable. Rule content lives here with the form; the bottom-bar
/// widgets only ever see the resulting error count.
pub fn job_name_error(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("Name is required.");
    }
    if name.len() > MAX_NAME_LEN {
        return Some("Name must be 255 characters or fewer.");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("Name must not contain spaces.");
    }
    if name.chars().any(char::is_uppercase) {
        return Some("Name must be lowercase.");
    }
    if name.starts_with('_') || name.starts_with('-') {
        return Some("Name must not start with '_' or '-'.");
    }
    if name.chars().any(|c| INVALID_CHARS.contains(&c)) {
        return Some("Name contains an invalid character.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(job_name_error("my-rollupjob1"), None);
        assert_eq!(job_name_error("rollup.daily"), None);
        assert_eq!(job_name_error("a"), None);
    }

    #[test]
    fn test_empty_name() {
        assert!(job_name_error("").is_some());
    }

    #[test]
    fn test_whitespace_and_case() {
        assert!(job_name_error("my job").is_some());
        assert!(job_name_error("MyJob").is_some());
        assert!(job_name_error("job\tname").is_some());
    }

    #[test]
    fn test_leading_characters() {
        assert!(job_name_error("_job").is_some());
        assert!(job_name_error("-job").is_some());
        assert_eq!(job_name_error("job_1"), None);
    }

    #[test]
    fn test_invalid_characters() {
        assert!(job_name_error("job/1").is_some());
        assert!(job_name_error("job*").is_some());
        assert!(job_name_error("job?").is_some());
    }

    #[test]
    fn test_name_length() {
        assert_eq!(job_name_error(&"a".repeat(255)), None);
        assert!(job_name_error(&"a".repeat(256)).is_some());
    }
}
