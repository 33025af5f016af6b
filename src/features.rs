//! Feature extraction for the category classifier.
//!
//! Turns raw message text into the fixed 10-dimension vector the
//! pre-trained artifact expects. Five surface features are computed; the
//! remaining slots are zero padding reserved by the original training run
//! and must stay zero for compatibility with any real trained artifact.

/// Dimension of the feature vector the classifier artifact was trained on.
pub const FEATURE_DIM: usize = 10;

/// Fixed-length feature vector derived from one input message.
pub type FeatureVector = [f32; FEATURE_DIM];

/// Extract the feature vector for a message.
///
/// Elements, in order:
/// 1. character length of the text
/// 2. count of `?` characters
/// 3. count of `!` characters
/// 4. count of whitespace-delimited tokens
/// 5. count of uppercase characters
/// 6-10. zero padding (reserved)
///
/// Deterministic and total: any input, including the empty string, produces
/// a valid vector of non-negative values. Should the feature list ever grow
/// past [`FEATURE_DIM`], only the first 10 are kept.
#[must_use]
pub fn extract(text: &str) -> FeatureVector {
    let features = [
        text.chars().count() as f32,
        text.matches('?').count() as f32,
        text.matches('!').count() as f32,
        text.split_whitespace().count() as f32,
        text.chars().filter(|c| c.is_uppercase()).count() as f32,
    ];

    let mut vector = [0.0; FEATURE_DIM];
    for (slot, value) in vector.iter_mut().zip(features.iter()) {
        *slot = *value;
    }
    vector
}
