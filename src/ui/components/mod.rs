//! Widgets composed by the renderer.

pub mod highlight;
mod logs;
pub mod prompt;
pub mod results;
pub mod trending;

pub use logs::LogPane;
pub use prompt::{PromptContext, StatusContext, render_prompt};
pub use results::{NO_RESULTS_MESSAGE, ResultsContext, render_results};
pub use trending::{render_trending, trending_line};
