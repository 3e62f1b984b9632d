//! Result presentation: backend metrics in, typed view model out.
//!
//! # Pipeline
//!
//! - **Classify**: each metric value falls into a [`ScoreBucket`] with a [`Tone`]
//! - **Synthesize**: threshold rules turn weak metrics into coaching tips, led by
//!   one overall-tier message picked from the similarity score
//! - **Present**: [`present`] assembles score, cards, tips and session metadata
//!   into a [`ResultView`] that any UI layer can render
//!
//! Nothing here touches the DOM, so the whole pipeline is testable on the host.
//!
//! # Example
//!
//! ```ignore
//! use swingpro::catalog::Catalog;
//! use swingpro::presenter::{present, AnalysisResult, ResultView};
//!
//! let catalog = Catalog::builtin();
//! let result: AnalysisResult = serde_json::from_str(body)?;
//!
//! match present(&result, &catalog) {
//!     ResultView::Report(report) => println!("{} overall", report.overall.display),
//!     ResultView::NoData(empty) => println!("{}", empty.reason),
//! }
//! ```

mod classify;
mod feedback;
mod types;
mod view;

pub use classify::{classify, classify_metric, similarity_tone, ScoreBucket, Tone};
pub use feedback::{synthesize_feedback, OverallTier};
pub use types::*;
pub use view::*;
