//! Books API backend.
//!
//! A small demonstration of turning unstructured external input into
//! domain-safe values: a two-variant [`domain::Outcome`] instead of
//! exceptions, a validation gate as the only constructor of
//! [`domain::ValidCreateBook`], and nominally typed identifiers via
//! [`domain::Id`]. The layout is hexagonal: pure domain core, inbound
//! HTTP adapter, outbound persistence adapter.

pub mod domain;
pub mod inbound;
pub mod outbound;
