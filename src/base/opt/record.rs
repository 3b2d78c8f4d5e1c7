//! The OPT record.

use super::super::iana::{OptRcode, OptionCode, Rtype};
use super::super::wire::{Compose, FormError, Parse, ParseError};
use super::{compose_option, control, parse_option};
use super::{ComposeOptData, OptData, ParseOptData, OptionHeader};
use core::convert::Infallible;
use core::{fmt, hash, str};
use octseq::builder::{infallible, OctetsBuilder};
use octseq::parse::Parser;
use std::vec::Vec;


//------------ OptHeader -----------------------------------------------------

/// The header of an OPT record.
///
/// The OPT record reappropriates the record header for encoding some
/// basic information. This type keeps this information. It consists of the
/// record header except for its `rdlen` field.
///
/// Owner and type are fixed, so only the class and TTL fields are kept.
/// The class field carries the UDP payload size, the TTL field the packed
/// values described in the [control][super::control] module.
///
//    +------------+--------------+------------------------------+
//    | Field Name | Field Type   | Description                  |
//    +------------+--------------+------------------------------+
//    | NAME       | domain name  | MUST be 0 (root domain)      |
//    | TYPE       | u_int16_t    | OPT (41)                     |
//    | CLASS      | u_int16_t    | requestor's UDP payload size |
//    | TTL        | u_int32_t    | extended RCODE and flags     |
//    | RDLEN      | u_int16_t    | length of all RDATA          |
//    | RDATA      | octet stream | {attribute,value} pairs      |
//    +------------+--------------+------------------------------+
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OptHeader {
    /// The UDP payload size from the class field.
    udp_payload_size: u16,

    /// The packed TTL field.
    ttl: u32,
}

impl OptHeader {
    /// The length of the header in wire format.
    pub const COMPOSE_LEN: u16 =
        u8::COMPOSE_LEN + Rtype::COMPOSE_LEN
        + u16::COMPOSE_LEN + u32::COMPOSE_LEN;

    /// Creates a header from the raw class and TTL values.
    #[must_use]
    pub const fn new(udp_payload_size: u16, ttl: u32) -> Self {
        OptHeader { udp_payload_size, ttl }
    }

    /// Returns the UDP payload size.
    #[must_use]
    pub const fn udp_payload_size(self) -> u16 {
        self.udp_payload_size
    }

    /// Returns the packed TTL field.
    #[must_use]
    pub const fn ttl(self) -> u32 {
        self.ttl
    }

    /// Returns the upper bits of the extended rcode.
    #[must_use]
    pub const fn ext_rcode(self) -> u8 {
        control::unpack_ext_rcode(self.ttl)
    }

    /// Returns the EDNS version.
    #[must_use]
    pub const fn version(self) -> u8 {
        control::unpack_version(self.ttl)
    }

    /// Returns the EDNS flags.
    #[must_use]
    pub const fn flags(self) -> u16 {
        control::unpack_flags(self.ttl)
    }

    /// Parses the header from the beginning of a record.
    ///
    /// The owner must be the root name and the type must be OPT. Anything
    /// else is a form error.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>
    ) -> Result<Self, ParseError> {
        if u8::parse(parser)? != 0 {
            return Err(FormError::new("OPT owner not root").into())
        }
        if Rtype::parse(parser)? != Rtype::OPT {
            return Err(FormError::new("record type not OPT").into())
        }
        Ok(OptHeader::new(u16::parse(parser)?, u32::parse(parser)?))
    }

    /// Appends the header to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        0u8.compose(target)?;
        Rtype::OPT.compose(target)?;
        self.udp_payload_size.compose(target)?;
        self.ttl.compose(target)
    }
}


//------------ OptRecord -----------------------------------------------------

/// An entire OPT record.
///
/// Because the EDNS specificiation uses parts of the header of the OPT record
/// to convey some information, the record keeps an [`OptHeader`] next to
/// its options.
///
/// The options are generic over the type `Data`. Use [`AllOptData`] to get
/// the options known to this crate parsed into their own types and all
/// others in raw form, or [`UnknownOptData`] to keep all of them raw.
///
/// A record either has no option list at all or a list that may be empty.
/// Both have the same wire format and compare equal but are displayed
/// differently. Two records are equal if their headers and the wire format
/// of their options are equal, no matter which type was used for the
/// options.
///
/// The record data of a record never exceeds 65,535 octets. All
/// constructors that accept options check this.
///
/// [`AllOptData`]: super::AllOptData
/// [`UnknownOptData`]: super::UnknownOptData
#[derive(Clone, Debug)]
pub struct OptRecord<Data> {
    /// The record header.
    header: OptHeader,

    /// The options if there is a list.
    options: Option<Vec<Data>>,
}

/// # Creation
///
impl<Data> OptRecord<Data> {
    /// Creates a record without an option list.
    #[must_use]
    pub fn with_flags(
        udp_payload_size: u16, ext_rcode: u8, version: u8, flags: u16
    ) -> Self {
        OptRecord {
            header: OptHeader::new(
                udp_payload_size, control::pack(ext_rcode, version, flags)
            ),
            options: None,
        }
    }

    /// Creates a record with no flags set and without an option list.
    #[must_use]
    pub fn basic(udp_payload_size: u16, ext_rcode: u8, version: u8) -> Self {
        Self::with_flags(udp_payload_size, ext_rcode, version, 0)
    }
}

impl<Data: ComposeOptData> OptRecord<Data> {
    /// Creates a record from its values.
    ///
    /// The record takes ownership of the option list. A value of `None`
    /// means the record has no option list.
    ///
    /// Returns an error if the options together are longer than 65,535
    /// octets in wire format.
    pub fn new(
        udp_payload_size: u16, ext_rcode: u8, version: u8, flags: u16,
        options: Option<Vec<Data>>
    ) -> Result<Self, ValueOutOfRange> {
        Self::from_parts(
            udp_payload_size, control::pack(ext_rcode, version, flags),
            options
        )
    }

    /// Creates a record from values that may be out of range.
    ///
    /// The values are checked in order and the first one too large for
    /// its field is returned as an error. The length of the options is
    /// checked last.
    pub fn try_new(
        udp_payload_size: u32, ext_rcode: u32, version: u32, flags: u32,
        options: Option<Vec<Data>>
    ) -> Result<Self, ValueOutOfRange> {
        Self::new(
            ValueOutOfRange::check_u16("payload size", udp_payload_size)?,
            ValueOutOfRange::check_u8("extended rcode", ext_rcode)?,
            ValueOutOfRange::check_u8("version", version)?,
            ValueOutOfRange::check_u16("flags", flags)?,
            options,
        )
    }

    /// Creates a record from the raw class and TTL values.
    ///
    /// Returns an error if the options together are longer than 65,535
    /// octets in wire format.
    pub fn from_parts(
        udp_payload_size: u16, ttl: u32, options: Option<Vec<Data>>
    ) -> Result<Self, ValueOutOfRange> {
        if let Some(options) = options.as_ref() {
            ValueOutOfRange::check_rdlen(rdata_len(options))?;
        }
        Ok(OptRecord {
            header: OptHeader::new(udp_payload_size, ttl),
            options
        })
    }
}

impl<Data> OptRecord<Data> {
    /// Returns the record header.
    #[must_use]
    pub fn header(&self) -> OptHeader {
        self.header
    }

    /// Returns the record type which always is OPT.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        Rtype::OPT
    }

    /// Returns the UDP payload size.
    ///
    /// Through this field a sender of a message can signal the maximum size
    /// of UDP payload the sender is able to handle when receiving messages.
    /// This value refers to the abilities of the sender’s DNS implementation,
    /// not such things as network MTUs. Which means that the largest UDP
    /// payload that can actually be sent back to the sender may be smaller.
    #[must_use]
    pub fn udp_payload_size(&self) -> u16 {
        self.header.udp_payload_size()
    }

    /// Returns the upper eight bits of the extended rcode.
    ///
    /// Use [`rcode`][Self::rcode] to get the complete rcode.
    #[must_use]
    pub fn ext_rcode(&self) -> u8 {
        self.header.ext_rcode()
    }

    /// Returns the extended rcode.
    ///
    /// Some of the bits of the rcode are stored in the regular message
    /// header. The rcode from such a header needs to be passed to the
    /// method.
    #[must_use]
    pub fn rcode(&self, header_rcode: u8) -> OptRcode {
        OptRcode::from_parts(header_rcode, self.ext_rcode())
    }

    /// Returns the EDNS version of the OPT header.
    ///
    /// Only EDNS version 0 is currently defined.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.header.version()
    }

    /// Returns the EDNS flags.
    #[must_use]
    pub fn flags(&self) -> u16 {
        self.header.flags()
    }

    /// Returns the packed TTL field.
    #[must_use]
    pub fn ttl(&self) -> u32 {
        self.header.ttl()
    }

    /// Returns the value of the DNSSEC OK (DO) bit.
    ///
    /// By setting this bit, a resolver indicates that it is interested in
    /// also receiving the DNSSEC-related resource records necessary to
    /// validate an answer. The bit and the related procedures are defined in
    /// [RFC 3225].
    ///
    /// [RFC 3225]: https://tools.ietf.org/html/rfc3225
    #[must_use]
    pub fn dnssec_ok(&self) -> bool {
        self.flags() & control::DNSSEC_OK != 0
    }

    /// Returns the options.
    ///
    /// If the record has no option list, the slice is empty.
    #[must_use]
    pub fn options(&self) -> &[Data] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Returns whether the record has an option list.
    ///
    /// The list itself may still be empty.
    #[must_use]
    pub fn has_options(&self) -> bool {
        self.options.is_some()
    }

    /// Returns an iterator over all options with the given code.
    pub fn options_by_code(
        &self, code: OptionCode
    ) -> impl Iterator<Item = &Data> + '_
    where Data: OptData {
        self.options().iter().filter(move |opt| opt.code() == code)
    }

    /// Converts the record into its option list.
    pub fn into_options(self) -> Option<Vec<Data>> {
        self.options
    }
}

/// # Parsing
///
impl<Data> OptRecord<Data> {
    /// Parses a complete OPT record.
    ///
    /// The parser needs to be positioned at the start of the record’s
    /// owner name. The record data is limited to the length given in the
    /// record header.
    pub fn parse<'a, Octs>(
        parser: &mut Parser<'a, Octs>
    ) -> Result<Self, ParseError>
    where
        Octs: AsRef<[u8]> + ?Sized,
        Data: ParseOptData<'a, Octs>,
    {
        let header = OptHeader::parse(parser)?;
        let rdlen = u16::parse(parser)?;
        let mut rdata = parser.parse_parser(usize::from(rdlen))?;
        Self::parse_rdata(header.udp_payload_size(), header.ttl(), &mut rdata)
    }

    /// Parses the record data of an OPT record.
    ///
    /// The values of the class and TTL fields have to be given. The
    /// `parser` must be limited to the record data and all of it is
    /// consumed. Record data longer than 65,535 octets is rejected.
    pub fn parse_rdata<'a, Octs>(
        udp_payload_size: u16, ttl: u32, parser: &mut Parser<'a, Octs>
    ) -> Result<Self, ParseError>
    where
        Octs: AsRef<[u8]> + ?Sized,
        Data: ParseOptData<'a, Octs>,
    {
        if parser.remaining() > usize::from(u16::MAX) {
            return Err(FormError::new("long record data").into())
        }
        let res = OptRecord {
            header: OptHeader::new(udp_payload_size, ttl),
            options: Self::parse_options(parser)?,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            udp_payload_size,
            version = res.version(),
            options = res.options().len(),
            "parsed OPT record"
        );
        Ok(res)
    }

    /// Parses a sequence of options.
    ///
    /// Returns `None` if there is no data left in the parser. Otherwise
    /// parses options until the parser is exhausted. If any of the options
    /// fails to parse, the whole list is dropped and the error returned.
    pub fn parse_options<'a, Octs>(
        parser: &mut Parser<'a, Octs>
    ) -> Result<Option<Vec<Data>>, ParseError>
    where
        Octs: AsRef<[u8]> + ?Sized,
        Data: ParseOptData<'a, Octs>,
    {
        if parser.remaining() == 0 {
            return Ok(None)
        }
        let mut options = Vec::new();
        while parser.remaining() > 0 {
            options.push(parse_option(parser)?);
        }
        Ok(Some(options))
    }
}

/// # Composing
///
impl<Data: ComposeOptData> OptRecord<Data> {
    /// Returns the length of the record data.
    #[must_use]
    pub fn rdlen(&self) -> u16 {
        // Checked when the record was created.
        u16::try_from(rdata_len(self.options())).expect("long record data")
    }

    /// Appends the record data to `target`.
    ///
    /// Each option is written with its option header. Nothing is written
    /// if there are no options.
    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        for opt in self.options() {
            compose_option(opt, target)?;
        }
        Ok(())
    }

    /// Appends the complete record to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        self.header.compose(target)?;
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }

    /// Appends the canonical form of the complete record to `target`.
    ///
    /// The OPT record contains no domain names other than its root owner,
    /// so this is the same as [`compose`][Self::compose].
    pub fn compose_canonical<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        self.compose(target)
    }

    /// Returns a hash value over the canonical wire format.
    ///
    /// Every octet of the record as produced by
    /// [`compose_canonical`][Self::compose_canonical] is folded into the
    /// value via `hash * 9 + octet` with wrapping arithmetic.
    #[must_use]
    pub fn canonical_hash(&self) -> u32 {
        let mut hasher = CanonicalHasher::default();
        infallible(self.compose_canonical(&mut hasher));
        hasher.0
    }
}


//--- FromStr

impl<Data> str::FromStr for OptRecord<Data> {
    type Err = NoTextFormat;

    fn from_str(_: &str) -> Result<Self, Self::Err> {
        Err(NoTextFormat(()))
    }
}


//--- PartialEq and Eq

impl<Data, Other> PartialEq<OptRecord<Other>> for OptRecord<Data>
where
    Data: ComposeOptData,
    Other: ComposeOptData,
{
    fn eq(&self, other: &OptRecord<Other>) -> bool {
        if self.header != other.header || self.rdlen() != other.rdlen() {
            return false
        }
        let mut rdata = Vec::with_capacity(usize::from(self.rdlen()));
        infallible(self.compose_rdata(&mut rdata));
        let mut matcher = OctetsMatcher::new(&rdata);
        infallible(other.compose_rdata(&mut matcher));
        matcher.is_match()
    }
}

impl<Data: ComposeOptData> Eq for OptRecord<Data> { }


//--- Hash

impl<Data: ComposeOptData> hash::Hash for OptRecord<Data> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u32(self.canonical_hash())
    }
}


//--- Display

impl<Data: fmt::Display> fmt::Display for OptRecord<Data> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(options) = self.options.as_ref() {
            f.write_str("[")?;
            for (i, opt) in options.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(opt, f)?;
            }
            f.write_str("] ")?;
        }
        write!(
            f, "; payload {}, xrcode {}, version {}, flags {}",
            self.udp_payload_size(), self.ext_rcode(), self.version(),
            self.flags()
        )
    }
}


//------------ Helpers -------------------------------------------------------

/// Returns the length of the wire format of a sequence of options.
fn rdata_len<Data: ComposeOptData>(options: &[Data]) -> usize {
    options.iter().map(|opt| {
        usize::from(OptionHeader::COMPOSE_LEN) + usize::from(opt.compose_len())
    }).sum()
}


//------------ CanonicalHasher -----------------------------------------------

/// An octets builder that only folds the octets into a hash value.
#[derive(Default)]
struct CanonicalHasher(u32);

impl OctetsBuilder for CanonicalHasher {
    type AppendError = Infallible;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Infallible> {
        for &octet in slice {
            self.0 = self.0.wrapping_mul(9).wrapping_add(u32::from(octet));
        }
        Ok(())
    }
}


//------------ OctetsMatcher -------------------------------------------------

/// An octets builder that compares everything appended to a slice.
struct OctetsMatcher<'a> {
    /// The octets not yet matched.
    expected: &'a [u8],

    /// Whether everything appended so far matched.
    matched: bool,
}

impl<'a> OctetsMatcher<'a> {
    fn new(expected: &'a [u8]) -> Self {
        OctetsMatcher { expected, matched: true }
    }

    /// Returns whether the appended octets were exactly the expected ones.
    fn is_match(&self) -> bool {
        self.matched && self.expected.is_empty()
    }
}

impl<'a> OctetsBuilder for OctetsMatcher<'a> {
    type AppendError = Infallible;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Infallible> {
        if self.matched && self.expected.starts_with(slice) {
            self.expected = &self.expected[slice.len()..];
        }
        else {
            self.matched = false;
        }
        Ok(())
    }
}


//============ Error Types ===================================================

//------------ ValueOutOfRange -----------------------------------------------

/// A value was too large for the record field it was meant for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueOutOfRange {
    /// The name of the field.
    field: &'static str,

    /// The largest value the field can hold.
    max: u32,

    /// The value that was given.
    value: u32,
}

impl ValueOutOfRange {
    fn check_u8(field: &'static str, value: u32) -> Result<u8, Self> {
        u8::try_from(value).map_err(|_| ValueOutOfRange {
            field, max: u8::MAX.into(), value
        })
    }

    fn check_u16(field: &'static str, value: u32) -> Result<u16, Self> {
        u16::try_from(value).map_err(|_| ValueOutOfRange {
            field, max: u16::MAX.into(), value
        })
    }

    fn check_rdlen(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(ValueOutOfRange {
                field: "record data length",
                max: u16::MAX.into(),
                value: u32::try_from(len).unwrap_or(u32::MAX),
            })
        }
        else {
            Ok(())
        }
    }

    /// Returns the name of the field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the largest value the field can hold.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the value that was rejected.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for ValueOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "{} {} out of range (maximum {})",
            self.field, self.value, self.max
        )
    }
}

impl std::error::Error for ValueOutOfRange {}


//------------ NoTextFormat --------------------------------------------------

/// OPT records cannot be created from their text representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoTextFormat(());

impl fmt::Display for NoTextFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("no text format defined for OPT")
    }
}

impl std::error::Error for NoTextFormat {}


//============ Testing =======================================================
