//! Generated variants and output normalization.

use serde::{Deserialize, Serialize};

/// Returned by the retry wrapper when every attempt came back empty or throttled.
pub const RETRY_EXHAUSTED_PLACEHOLDER: &str = "(No output — please try again shortly.)";

/// Substituted by the variant collector for an empty result.
pub const EMPTY_VARIANT_PLACEHOLDER: &str = "(No output)";

/// One independently generated output for a request.
///
/// # Examples
///
/// ```
/// use copydesk_core::{ContentType, Variant};
///
/// let variant = Variant::new(2, "Grow faster with AI.");
/// assert_eq!(variant.export_file_name(ContentType::AdCopy), "ad_copy_2.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// 1-based position within its request
    pub index: usize,
    /// Generated text
    pub text: String,
}

impl Variant {
    /// Create a variant at the given 1-based position.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Name of the plain-text file this variant is exported to.
    pub fn export_file_name(&self, content_type: crate::ContentType) -> String {
        format!("{}_{}.txt", content_type.slug(), self.index)
    }
}

/// Trim model output and normalize Windows line endings.
pub fn clean_output(text: &str) -> String {
    text.trim().replace("\r\n", "\n").trim().to_string()
}
