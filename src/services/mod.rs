//! Map and catalog services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Route handlers extract queries and bodies; everything that touches the
//! catalog or a live `Store` goes through here.

pub mod catalog;
pub mod maps;
