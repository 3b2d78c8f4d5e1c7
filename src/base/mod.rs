//! Basics.
//!
//! This module provides the types and traits for working with OPT records.
//!
//!
//! ## Parsing and Composing
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format data from other forms of representation conversion, we use
//! the term *parsing* for extracting data from a wire-format representation
//! and *composing* for producing such a representation.
//!
//! Parsing happens via the `Parser` type of the [octseq] crate which walks
//! over an octets sequence. Composing appends to any `OctetsBuilder`, most
//! commonly a `Vec<u8>`. The [wire] module contains the traits and error
//! types shared by everything.
//!
//!
//! # Types for DNS Data
//!
//! * [iana] for the protocol constants used by the OPT record,
//! * [opt] for the OPT record, its options, and the control field packing.
//!
//! [octseq]: https://docs.rs/octseq/

#[cfg(feature = "std")]
pub use self::opt::{OptHeader, OptRecord};
pub use self::wire::ParseError;

pub mod iana;
pub mod opt;
pub mod wire;
