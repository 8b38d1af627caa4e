use crate::error::HfgrabError;

/// Validate a user-supplied dataset reference ('name' or 'author/name').
pub fn validate_dataset_ref(input: &str) -> Result<String, HfgrabError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(HfgrabError::InvalidDatasetRef {
            input: input.to_string(),
            message: "dataset reference is empty".to_string(),
        });
    }

    if trimmed.split('/').any(str::is_empty) {
        return Err(HfgrabError::InvalidDatasetRef {
            input: input.to_string(),
            message: "dataset reference has an empty path segment".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

/// Derive the artifact path prefix for one split.
///
/// 'author/name' references keep both segments; anything else keeps only
/// the leading segment.
pub fn artifact_prefix(dataset_id: &str, split: &str) -> String {
    let segments: Vec<&str> = dataset_id.split('/').collect();
    if segments.len() == 2 {
        format!("{}/{}/{}", segments[0], segments[1], split)
    } else {
        format!("{}/{}", segments[0], split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_reference_keeps_author_and_name() {
        assert_eq!(artifact_prefix("glue/sst2", "train"), "glue/sst2/train");
    }

    #[test]
    fn bare_reference_keeps_name_only() {
        assert_eq!(artifact_prefix("imdb", "test"), "imdb/test");
    }

    #[test]
    fn deep_reference_keeps_leading_segment() {
        assert_eq!(artifact_prefix("a/b/c", "train"), "a/train");
    }

    #[test]
    fn validate_trims_whitespace() {
        let validated = validate_dataset_ref("  org/data  ").expect("validate");
        assert_eq!(validated, "org/data");
    }

    #[test]
    fn validate_rejects_empty_reference() {
        let err = validate_dataset_ref("   ").expect_err("should fail");
        match err {
            HfgrabError::InvalidDatasetRef { message, .. } => {
                assert!(message.contains("empty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_empty_segment() {
        assert!(validate_dataset_ref("org//data").is_err());
        assert!(validate_dataset_ref("/data").is_err());
    }
}
