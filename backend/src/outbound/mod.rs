//! Outbound adapters implementing domain ports for external
//! infrastructure.
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations; they contain no business
//! logic. The demo ships an in-memory persistence adapter under
//! [`persistence`].

pub mod persistence;
