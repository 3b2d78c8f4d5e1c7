//! DNS response codes and extended response codes.

//------------ OptRcode -----------------------------------------------------

int_enum! {
    /// Extended DNS Response Codes for OPT records.
    ///
    /// Originally, the response code embedded in the header of each DNS
    /// message was four bits long. This code, defined in [RFC 1035], is
    /// represented by the lower four bits of this type. The extension
    /// mechanism for DNS added eight more bits which are carried in the
    /// TTL field of the OPT pseudo-record. Together they form a twelve bit
    /// value. Use [`from_parts`][OptRcode::from_parts] to combine the two
    /// halves and [`to_parts`][OptRcode::to_parts] to split them again.
    ///
    /// The values are defined in the [IANA DNS RCODEs] registry.
    ///
    /// [IANA DNS RCODEs]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    OptRcode, u16;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    (REFUSED => 5, "REFUSED")

    /// Bad OPT version.
    ///
    /// A name server does not implement the EDNS version requested in the
    /// OPT record. Defined in [RFC 6891].
    ///
    /// [RFC 6891]: https://tools.ietf.org/html/rfc6891
    (BADVERS => 16, "BADVERS")

    /// Bad or missing server cookie.
    ///
    /// Defined in [RFC 7873](https://tools.ietf.org/html/rfc7873).
    (BADCOOKIE => 23, "BADCOOKIE")
}

impl OptRcode {
    /// Creates an extended rcode from its two parts.
    ///
    /// The `rcode` is the value from the message header. Only its lower
    /// four bits are considered. The `ext` value is the extended rcode from
    /// the OPT record.
    #[must_use]
    pub fn from_parts(rcode: u8, ext: u8) -> OptRcode {
        OptRcode::from_int(u16::from(ext) << 4 | u16::from(rcode & 0x0F))
    }

    /// Returns the two parts of an extended rcode value.
    ///
    /// The first element is the four bit header rcode, the second the
    /// eight bits carried by the OPT record.
    #[must_use]
    pub fn to_parts(self) -> (u8, u8) {
        ((self.0 & 0x0F) as u8, self.ext())
    }

    /// Returns the part of the rcode carried in the message header.
    #[must_use]
    pub fn rcode(self) -> u8 {
        (self.0 & 0x0F) as u8
    }

    /// Returns the part of the rcode carried in the OPT record.
    #[must_use]
    pub fn ext(self) -> u8 {
        (self.0 >> 4) as u8
    }

    /// Returns whether the rcode needs an OPT record to be expressed.
    #[must_use]
    pub fn is_ext(self) -> bool {
        self.0 >> 4 != 0
    }
}

int_enum_display!(OptRcode, "");

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optrcode_parts() {
        assert_eq!(OptRcode::from_parts(0, 1), OptRcode::BADVERS);
        assert_eq!(OptRcode::BADVERS.to_parts(), (0, 1));
        assert_eq!(OptRcode::from_parts(7, 1), OptRcode::BADCOOKIE);
        assert_eq!(OptRcode::from_parts(0x13, 0), OptRcode::NXDOMAIN);
        assert_eq!(OptRcode::BADCOOKIE.rcode(), 7);
        assert_eq!(OptRcode::BADCOOKIE.ext(), 1);
        assert!(OptRcode::BADVERS.is_ext());
        assert!(!OptRcode::REFUSED.is_ext());
        assert_eq!(OptRcode::from_parts(0xF, 0xFF).to_int(), 0x0FFF);
    }
}
