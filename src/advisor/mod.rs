pub mod engine;
pub mod models;

pub use engine::recommend;
pub use models::{Confidence, Recommendation, Verdict};

/// Ratios of winning to losing counts that promote a recommendation's
/// confidence tier. Comparisons are strict.
pub mod confidence_threshold {
    pub const HIGH: f64 = 1.5;
    pub const MEDIUM: f64 = 1.2;
}
