pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod logging;
pub mod prelude;
pub mod store;
pub mod web;
