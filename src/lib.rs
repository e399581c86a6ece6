// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

pub mod canvas;
pub mod export;
pub mod schema;
pub mod session;
pub mod store;
pub mod validate;
