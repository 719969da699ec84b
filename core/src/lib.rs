//! Optional values with a small, null-safe combinator API.
//!
//! [`Option`](option::Option) is either present with one value or absent. Unlike a nullable reference, its value can
//! only be reached through combinators that never run on the absent path, or through the explicit
//! [`get`](option::Option::get) which fails loudly.

pub mod option;
pub mod fallback;
pub mod truthy;

pub mod app;
