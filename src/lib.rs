//! The DNS OPT pseudo-record.
//!
//! Since DNS message headers are relatively short, the amount of information
//! that can be conveyed through them is very limited. The extension
//! mechanisms for DNS, EDNS, defined in [RFC 6891] add a pseudo-record of
//! type OPT to the additional section of a message. It reuses the fixed
//! part of a resource record: the class field carries the UDP payload size
//! the sender can reassemble, the TTL field carries the upper bits of an
//! extended response code, the EDNS version, and a set of flags. The record
//! data is a sequence of options.
//!
//! This crate provides the types to create such a record, to compose it into
//! and parse it from wire format, and to access its values. All of it lives
//! in the [base] module:
//!
//! * [base::wire] contains the basic traits and error types for parsing
//!   and composing,
//! * [base::iana] contains the protocol constants, and
//! * [base::opt] contains the option types and the [`OptRecord`] itself.
//!
//! [`OptRecord`]: base::opt::OptRecord
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using the types `Bytes` and `BytesMut` from the
//!    [bytes](https://github.com/tokio-rs/bytes) crate as octet sequences.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//! * `tracing`: emits diagnostic events via the
//!   [tracing](https://github.com/tokio-rs/tracing) crate while parsing.
//!   This feature is enabled by default.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
extern crate core;

pub mod base;
