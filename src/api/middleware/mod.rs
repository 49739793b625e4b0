//! API middleware.

mod fail_fast;

pub use fail_fast::fail_fast_middleware;
