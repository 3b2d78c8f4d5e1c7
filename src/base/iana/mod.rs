//! IANA Definitions for DNS.
//!
//! This module contains the parameters defined in IANA registries that are
//! relevant for OPT records.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with all well-defined values available
//! as associated constants. There are two methods `from_int()` and
//! `to_int()` to convert from and to raw integer values as well as
//! implementations of the `From` trait for these.
//!
//! Types also implement `parse()` and `compose()` for reading them from and
//! writing them to wire format.

pub use self::opt::OptionCode;
pub use self::rcode::OptRcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod opt;
pub mod rcode;
pub mod rtype;
