mod app;
mod search_runtime;

pub use app::App;
pub(crate) use search_runtime::SearchRuntime;
