//! Plain query structs passed to the endpoint clients.

pub mod query;

pub use query::*;
