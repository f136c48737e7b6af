pub mod classify;
pub mod detector;
pub mod text;

pub use classify::{classify, CardClassifier, SimpleCardClassifier};
pub use detector::{DetectorConfig, PatternDetector, RegexPatternDetector};
