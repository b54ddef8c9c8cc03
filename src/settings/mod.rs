//! Configuration loading and resolution utilities.
//!
//! `load` layers default files, explicit `--config` files, `MARQUEE__*`
//! environment variables and CLI flags, then validates the result into a
//! [`ResolvedConfig`] carrying the library's `AppConfig`.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
