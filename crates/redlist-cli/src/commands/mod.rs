//! The two steps the binary runs, in order.

pub mod latest_posts;
pub mod login;
