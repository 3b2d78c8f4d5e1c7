//! DNS EDNS0 option codes.

//------------ OptionCode ----------------------------------------------------

int_enum! {
    /// DNS EDNS0 option codes.
    ///
    /// The record data of [OPT] records is a sequence of options. The type of
    /// each of these options is given through a 16 bit value called *option
    /// code.*
    ///
    /// The currently assigned option codes can be found in the
    /// [IANA registry].
    ///
    /// [OPT]: crate::base::opt
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-11
    =>
    OptionCode, u16;

    /// Long-Lived Queries (LLQ, 1).
    (LLQ => 1, "LLQ")

    /// Update lease (UL, 2).
    (UL => 2, "UL")

    /// Name server identifier (NSID, 3).
    ///
    /// The NSID option allows a name server to include an indentifier in an
    /// answer for diagnostic purposes. The options in defined in [RFC 5001].
    ///
    /// [RFC 5001]: https://tools.ietf.org/html/rfc5001
    (NSID => 3, "NSID")

    /// DNSSEC algorithm understood (DAU, 5).
    (DAU => 5, "DAU")

    /// DS hash understood (DHU, 6).
    (DHU => 6, "DHU")

    /// NSEC3 hash understood (N3U, 7).
    (N3U => 7, "N3U")

    /// EDNS client subnet (8).
    ///
    /// Defined in [RFC 7871](https://tools.ietf.org/html/rfc7871).
    (CLIENT_SUBNET => 8, "edns-client-subnet")

    /// EDNS expire (9).
    (EXPIRE => 9, "EDNS EXPIRE")

    /// DNS cookie (10).
    ///
    /// Defined in [RFC 7873](https://tools.ietf.org/html/rfc7873).
    (COOKIE => 10, "COOKIE")

    /// edns-tcp-keepalive (11).
    ///
    /// The keepalive option allows a server to signal how long a client
    /// should keep an idle TCP connection open. It is defined in
    /// [RFC 7828](https://tools.ietf.org/html/rfc7828).
    (TCP_KEEPALIVE => 11, "edns-tcp-keepalive")

    /// Padding (12).
    ///
    /// The padding option allows increasing the size of a message to a
    /// fixed value. It is defined in
    /// [RFC 7830](https://tools.ietf.org/html/rfc7830).
    (PADDING => 12, "Padding")

    /// CHAIN query requests (13).
    (CHAIN => 13, "CHAIN")

    /// EDNS key tag (14).
    (KEY_TAG => 14, "edns-key-tag")

    /// Extended DNS error (15).
    (EXTENDED_ERROR => 15, "Extended DNS Error")
}

int_enum_display!(OptionCode, "");
