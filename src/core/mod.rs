pub mod calculator;
pub mod pipeline;
pub mod summarizer;
pub mod validator;

pub use calculator::pairing::{PairingRules, SessionState};
pub use pipeline::{PipelineReport, run_pipeline};
pub use summarizer::{summarize, summarize_table};
pub use validator::validate;
