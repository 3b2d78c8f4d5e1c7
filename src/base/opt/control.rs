//! Packing of the OPT record’s TTL field.
//!
//! The OPT record reuses the 32 bit TTL field of the record header for
//! three values: the upper eight bits of the extended response code, the
//! EDNS version, and sixteen bits of flags. They are laid out like this:
//!
//! ```text
//!             +0 (MSB)                            +1 (LSB)
//!      +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!   0: |         EXTENDED-RCODE        |            VERSION            |
//!      +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//!   2: | DO|                           Z                               |
//!      +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! ```
//!
//! The functions in this module convert between the three values and the
//! packed field. They never fail since the argument types already limit
//! the values to their bit widths.

/// The DNSSEC OK (DO) flag.
///
/// By setting this bit, a resolver indicates that it is interested in
/// also receiving the DNSSEC-related resource records necessary to
/// validate an answer. The bit is defined in [RFC 3225].
///
/// [RFC 3225]: https://tools.ietf.org/html/rfc3225
pub const DNSSEC_OK: u16 = 0x8000;

/// Packs extended rcode, version, and flags into a TTL value.
#[must_use]
pub const fn pack(ext_rcode: u8, version: u8, flags: u16) -> u32 {
    (ext_rcode as u32) << 24 | (version as u32) << 16 | flags as u32
}

/// Returns the upper bits of the extended rcode from a packed TTL.
#[must_use]
pub const fn unpack_ext_rcode(ttl: u32) -> u8 {
    (ttl >> 24) as u8
}

/// Returns the EDNS version from a packed TTL.
#[must_use]
pub const fn unpack_version(ttl: u32) -> u8 {
    (ttl >> 16) as u8
}

/// Returns the EDNS flags from a packed TTL.
#[must_use]
pub const fn unpack_flags(ttl: u32) -> u16 {
    ttl as u16
}

//============ Testing =======================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn pack_layout() {
        assert_eq!(pack(0x12, 0x34, 0x5678), 0x1234_5678);
        assert_eq!(pack(0, 0, DNSSEC_OK), 0x0000_8000);
        assert_eq!(pack(0xff, 0xff, 0xffff), u32::MAX);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, DNSSEC_OK)]
    #[case(0, 1, 0x7fff)]
    #[case(0xff, 0xff, 0xffff)]
    #[case(0x80, 0x01, 0x0001)]
    fn pack_unpack(#[case] ext_rcode: u8, #[case] version: u8, #[case] flags: u16) {
        let ttl = pack(ext_rcode, version, flags);
        assert_eq!(unpack_ext_rcode(ttl), ext_rcode);
        assert_eq!(unpack_version(ttl), version);
        assert_eq!(unpack_flags(ttl), flags);
    }

    #[test]
    fn pack_unpack_exhaustive_bytes() {
        for a in 0..=u8::MAX {
            for b in [0u8, 1, 0x7f, 0x80, 0xff] {
                for c in [0u16, 1, 0x00ff, 0x8000, 0xffff] {
                    let ttl = pack(a, b, c);
                    assert_eq!(
                        (unpack_ext_rcode(ttl), unpack_version(ttl)),
                        (a, b)
                    );
                    assert_eq!(unpack_flags(ttl), c);
                }
            }
        }
    }
}
