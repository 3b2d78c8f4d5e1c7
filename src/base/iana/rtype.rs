//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. Only the handful of types
    /// that show up next to an OPT record in the additional section of a
    /// message are listed here. All other values can still be represented
    /// via [`Rtype::from_int`].
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An IPv6 host address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// OPT.
    ///
    /// See RFC 6891 and RFC 3225.
    (OPT => 41, "OPT")

    /// Transaction signature.
    ///
    /// See RFC 2845.
    (TSIG => 250, "TSIG")
}

int_enum_display!(Rtype, "TYPE");

//============ Testing =======================================================
