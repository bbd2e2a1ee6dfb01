pub mod extractor;
pub mod locator;
pub mod summarizer;

pub use extractor::extract;
pub use locator::{locate, Location};
pub use summarizer::{mean_nyquist_velocity, summarize, VolumeSummary};
