#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # mapbounds-entities
//!
//! Reusable, agnostic geographic value types.
//!
//! The entities only contain generic functionality: range validation,
//! containment and structural equality. Serialization lives elsewhere.

pub mod geo;
