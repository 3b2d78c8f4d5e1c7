//! Record data for OPT records.
//!
//! Since DNS message headers are relatively short, the amount of information
//! that can be conveyed through them is very limited. In order to provide an
//! extensible means to transmit additional information, [RFC 6891] introduces
//! a resource record called OPT that can be added to the additional section
//! of a message. The record data in turn consists of a sequence of options.
//!
//! This module contains the types for working with both the OPT record and
//! its record data. The record itself is [`OptRecord`]. It is generic over
//! the type used for its options. Any type implementing [`OptData`],
//! [`ComposeOptData`], and [`ParseOptData`] can be used. The module defines
//! types for a few options in sub-modules which are re-exported here, as
//! well as [`UnknownOptData`] for options in their raw form and
//! [`AllOptData`] which picks the right one based on the option code.
//!
//! The values the OPT record keeps in its record header are packed and
//! unpacked by the functions in the [control] module.
//!
//! [RFC 6891]: https://tools.ietf.org/html/rfc6891

//============ Sub-modules and Re-exports ====================================
//
// All of these are in a macro. The macro also defines `AllOptData`.

#[macro_use]
mod macros;
opt_types! {
    keepalive::{TcpKeepalive => TCP_KEEPALIVE};
    nsid::{Nsid<Octs> => NSID};
    padding::{Padding<Octs> => PADDING};
}

pub mod control;
#[cfg(feature = "std")]
mod record;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use self::record::{NoTextFormat, OptHeader, OptRecord, ValueOutOfRange};

//============ Module Content ================================================

use super::iana::OptionCode;
use super::wire::{Compose, FormError, Parse, ParseError};
use core::cmp::Ordering;
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::octets::Octets;
use octseq::parse::Parser;

//------------ OptionHeader --------------------------------------------------

/// The header of an OPT option.
///
/// This header contains a 16 bit option code identifying the kind of option
/// we are dealing with and a 16 bit length describing the lenngth in octets
/// of the option data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptionHeader {
    /// The option code.
    code: u16,

    /// The length of the option’s data in octets.
    len: u16,
}

#[allow(clippy::len_without_is_empty)]
impl OptionHeader {
    /// The length of the header in octets.
    pub const COMPOSE_LEN: u16 = 4;

    /// Creates a new option header from code and length.
    #[must_use]
    pub fn new(code: u16, len: u16) -> Self {
        OptionHeader { code, len }
    }

    /// Returns the option code.
    #[must_use]
    pub fn code(self) -> u16 {
        self.code
    }

    /// Returns the length of the option data.
    #[must_use]
    pub fn len(self) -> u16 {
        self.len
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>
    ) -> Result<Self, ParseError> {
        Ok(OptionHeader::new(
            u16::parse(parser)?,
            u16::parse(parser)?,
        ))
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        self.code.compose(target)?;
        self.len.compose(target)
    }
}

//------------ OptData -------------------------------------------------------

/// A type representing an OPT option.
///
/// The type needs to be able to report the option code to use for the
/// encoding via the [`code`][Self::code] method.
pub trait OptData {
    /// Returns the option code associated with this option.
    fn code(&self) -> OptionCode;
}

impl<'a, T: OptData + ?Sized> OptData for &'a T {
    fn code(&self) -> OptionCode {
        (*self).code()
    }
}

//------------ ParseOptData --------------------------------------------------

/// An OPT option that can be parsed from the record data.
pub trait ParseOptData<'a, Octs: ?Sized>: OptData + Sized {
    /// Parses the option code data.
    ///
    /// The data is for an option of `code`. The function may decide whether
    /// it wants to parse data for that type. It should return `Ok(None)` if
    /// it doesn’t.
    ///
    /// The `parser` is positioned at the beginning of the option data and is
    /// is limited to the length of the data. The method should parse all
    /// of the data. Data left in the parser is treated as an error by
    /// [`parse_option`].
    ///
    /// If the function doesn’t want to process the data, it must not touch
    /// the parser. In particual, it must not advance it.
    fn parse_option(
        code: OptionCode, parser: &mut Parser<'a, Octs>
    ) -> Result<Option<Self>, ParseError>;
}

//------------ ComposeOptData ------------------------------------------------

/// An OPT option that can be written to wire format.
pub trait ComposeOptData: OptData {
    /// Returns the length of the option data in octets.
    fn compose_len(&self) -> u16;

    /// Appends the option data, without the option header, to `target`.
    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: ComposeOptData + ?Sized> ComposeOptData for &'a T {
    fn compose_len(&self) -> u16 {
        (*self).compose_len()
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        (*self).compose_option(target)
    }
}

//------------ Option framing ------------------------------------------------

/// Appends a complete option, header and data, to `target`.
pub fn compose_option<Data, Target>(
    data: &Data, target: &mut Target
) -> Result<(), Target::AppendError>
where
    Data: ComposeOptData + ?Sized,
    Target: OctetsBuilder + ?Sized,
{
    OptionHeader::new(data.code().to_int(), data.compose_len())
        .compose(target)?;
    data.compose_option(target)
}

/// Parses a complete option, header and data, from `parser`.
///
/// The option data is handed to `Data` in a parser limited to the length
/// given in the option header. If the header announces more data than is
/// left, [`ParseError::ShortInput`] is returned. If `Data` declines the
/// option code or leaves some of the option data unparsed, the option is
/// rejected with a form error.
pub fn parse_option<'a, Octs, Data>(
    parser: &mut Parser<'a, Octs>
) -> Result<Data, ParseError>
where
    Octs: AsRef<[u8]> + ?Sized,
    Data: ParseOptData<'a, Octs>,
{
    let header = OptionHeader::parse(parser)?;
    let mut data_parser = parser.parse_parser(usize::from(header.len()))?;
    let code = OptionCode::from_int(header.code());
    let data = match Data::parse_option(code, &mut data_parser)? {
        Some(data) => data,
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!("option type declined option code {}", code);
            return Err(FormError::new("unsupported option code").into())
        }
    };
    if data_parser.remaining() > 0 {
        return Err(FormError::new("trailing data in option").into())
    }
    Ok(data)
}

//------------ UnknownOptData ------------------------------------------------

/// An OPT option in its raw form.
///
/// This type accepts any option type via its option code and raw data.
#[derive(Clone)]
pub struct UnknownOptData<Octs> {
    /// The option code for the option.
    code: OptionCode,

    /// The raw option data.
    data: Octs,
}

impl<Octs> UnknownOptData<Octs> {
    /// Creates a new option from the code and data.
    ///
    /// The function returns an error if `data` is longer than 65,535
    /// octets.
    pub fn new(code: OptionCode, data: Octs) -> Result<Self, LongOptData>
    where Octs: AsRef<[u8]> {
        LongOptData::check_len(data.as_ref().len())?;
        Ok(UnknownOptData { code, data })
    }

    /// Parses the option data for an option with the given code.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        code: OptionCode, parser: &mut Parser<'a, Src>
    ) -> Result<Self, ParseError> {
        let len = parser.remaining();
        LongOptData::check_len(len)?;
        Ok(UnknownOptData { code, data: parser.parse_octets(len)? })
    }

    /// Returns the option code of the option.
    pub fn code(&self) -> OptionCode {
        self.code
    }

    /// Returns a reference for to the option data.
    pub fn data(&self) -> &Octs {
        &self.data
    }

    /// Returns a slice of the option data.
    pub fn as_slice(&self) -> &[u8]
    where Octs: AsRef<[u8]> {
        self.data.as_ref()
    }
}

//--- AsRef

impl<Octs: AsRef<[u8]>> AsRef<[u8]> for UnknownOptData<Octs> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- OptData, ParseOptData, ComposeOptData

impl<Octs> OptData for UnknownOptData<Octs> {
    fn code(&self) -> OptionCode {
        self.code
    }
}

impl<'a, Octs> ParseOptData<'a, Octs> for UnknownOptData<Octs::Range<'a>>
where Octs: Octets + ?Sized {
    fn parse_option(
        code: OptionCode, parser: &mut Parser<'a, Octs>
    ) -> Result<Option<Self>, ParseError> {
        Self::parse(code, parser).map(Some)
    }
}

impl<Octs: AsRef<[u8]>> ComposeOptData for UnknownOptData<Octs> {
    fn compose_len(&self) -> u16 {
        self.data.as_ref().len().try_into().expect("long option data")
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.data.as_ref())
    }
}

//--- PartialEq and Eq

impl<Octs, Other> PartialEq<UnknownOptData<Other>> for UnknownOptData<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn eq(&self, other: &UnknownOptData<Other>) -> bool {
        self.code == other.code && self.as_slice() == other.as_slice()
    }
}

impl<Octs: AsRef<[u8]>> Eq for UnknownOptData<Octs> {}

//--- PartialOrd and Ord

impl<Octs, Other> PartialOrd<UnknownOptData<Other>> for UnknownOptData<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn partial_cmp(&self, other: &UnknownOptData<Other>) -> Option<Ordering> {
        match self.code.partial_cmp(&other.code) {
            Some(Ordering::Equal) => {}
            res => return res,
        }
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<Octs: AsRef<[u8]>> Ord for UnknownOptData<Octs> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.code.cmp(&other.code) {
            Ordering::Equal => {}
            res => return res,
        }
        self.as_slice().cmp(other.as_slice())
    }
}

//--- Hash

impl<Octs: AsRef<[u8]>> hash::Hash for UnknownOptData<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.as_slice().hash(state)
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]>> fmt::Display for UnknownOptData<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("<")?;
        for ch in self.as_slice() {
            write!(f, "{:02x}", *ch)?;
        }
        f.write_str(">")
    }
}

impl<Octs: AsRef<[u8]>> fmt::Debug for UnknownOptData<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnknownOptData")
            .field("code", &self.code)
            .field("data", &format_args!("{}", self))
            .finish()
    }
}

//============ Error Types ===================================================

//------------ LongOptData ---------------------------------------------------

/// The octets sequence to be used for option data was too long.
#[derive(Clone, Copy, Debug)]
pub struct LongOptData(());

impl LongOptData {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        "option data too long"
    }

    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(Self(()))
        }
        else {
            Ok(())
        }
    }
}

impl From<LongOptData> for ParseError {
    fn from(src: LongOptData) -> Self {
        ParseError::form_error(src.as_str())
    }
}

impl fmt::Display for LongOptData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LongOptData {}

//============ Testing =======================================================
