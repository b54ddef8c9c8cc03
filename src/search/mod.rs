mod commands;
mod worker;

pub(crate) use commands::{SearchCommand, SearchResult};
pub(crate) use worker::spawn;
