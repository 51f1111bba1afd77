//! Routes Module
//!
//! Router assembly: the public auth group and the protected resource group.

pub mod router;

pub use router::create_router;
