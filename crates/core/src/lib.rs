#![deny(warnings)]

pub mod config;
pub mod host;
pub mod lang;
pub mod text;
pub mod translate;
pub mod transport;
