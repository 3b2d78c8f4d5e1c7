//! The edns-tcp-keepalive option.
//!
//! A client sends [`TcpKeepalive`] without a value to say it understands
//! the option. A server answers with the time it wants the client to keep
//! an idle TCP connection open. This is unrelated to TCP’s own keepalive.
//!
//! The option is defined in [RFC 7828](https://tools.ietf.org/html/rfc7828).

use super::super::iana::OptionCode;
use super::super::wire::{Compose, Parse, ParseError};
use super::{ComposeOptData, OptData, ParseOptData};
use core::fmt;
use core::time::Duration;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;


//------------ TcpKeepalive --------------------------------------------------

/// Option data for the edns-tcp-keepalive option.
///
/// The option data is either empty, as sent by clients, or a single
/// [`IdleTimeout`], as sent by servers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TcpKeepalive(Option<IdleTimeout>);

impl TcpKeepalive {
    /// Creates a value from an optional idle timeout.
    #[must_use]
    pub fn new(timeout: Option<IdleTimeout>) -> Self {
        TcpKeepalive(timeout)
    }

    /// Creates the empty value a client includes in its query.
    #[must_use]
    pub fn query() -> Self {
        TcpKeepalive(None)
    }

    /// Creates the value a server includes in its response.
    #[must_use]
    pub fn response(timeout: IdleTimeout) -> Self {
        TcpKeepalive(Some(timeout))
    }

    /// Returns the idle timeout if there is one.
    #[must_use]
    pub fn timeout(self) -> Option<IdleTimeout> {
        self.0
    }

    /// Returns the idle timeout as a duration if there is one.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        self.0.map(Duration::from)
    }

    /// Parses the option data.
    ///
    /// Empty data means there is no timeout. Otherwise a timeout is
    /// taken from the next two octets.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<Octs>
    ) -> Result<Self, ParseError> {
        if parser.remaining() == 0 {
            return Ok(TcpKeepalive(None))
        }
        u16::parse(parser).map(|units| TcpKeepalive(Some(IdleTimeout(units))))
    }
}

//--- OptData, ParseOptData, and ComposeOptData

impl OptData for TcpKeepalive {
    fn code(&self) -> OptionCode {
        OptionCode::TCP_KEEPALIVE
    }
}

impl<'a, Octs> ParseOptData<'a, Octs> for TcpKeepalive
where Octs: AsRef<[u8]> + ?Sized {
    fn parse_option(
        code: OptionCode, parser: &mut Parser<'a, Octs>
    ) -> Result<Option<Self>, ParseError> {
        if code != OptionCode::TCP_KEEPALIVE {
            return Ok(None)
        }
        Self::parse(parser).map(Some)
    }
}

impl ComposeOptData for TcpKeepalive {
    fn compose_len(&self) -> u16 {
        if self.0.is_some() { u16::COMPOSE_LEN } else { 0 }
    }

    fn compose_option<Target: OctetsBuilder + ?Sized>(
        &self, target: &mut Target
    ) -> Result<(), Target::AppendError> {
        if let Some(timeout) = self.0 {
            timeout.0.compose(target)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for TcpKeepalive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(timeout) => fmt::Display::fmt(&timeout, f),
            None => Ok(())
        }
    }
}


//------------ IdleTimeout ---------------------------------------------------

/// The idle timeout of an edns-tcp-keepalive option.
///
/// The timeout is kept in units of 100 milliseconds, so the longest
/// timeout is a little under two hours.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IdleTimeout(u16);

impl IdleTimeout {
    /// The length of one unit.
    pub const UNIT: Duration = Duration::from_millis(100);

    /// Returns the number of units.
    #[must_use]
    pub fn units(self) -> u16 {
        self.0
    }
}

impl From<u16> for IdleTimeout {
    fn from(units: u16) -> Self {
        IdleTimeout(units)
    }
}

impl From<IdleTimeout> for u16 {
    fn from(timeout: IdleTimeout) -> u16 {
        timeout.0
    }
}

/// Converts a duration, rounding down to whole units.
impl TryFrom<Duration> for IdleTimeout {
    type Error = FromDurationError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let units = duration.as_millis() / Self::UNIT.as_millis();
        u16::try_from(units).map(IdleTimeout).map_err(|_| {
            FromDurationError(())
        })
    }
}

impl From<IdleTimeout> for Duration {
    fn from(timeout: IdleTimeout) -> Duration {
        IdleTimeout::UNIT * u32::from(timeout.0)
    }
}

impl fmt::Display for IdleTimeout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//------------ Extended OptRecord --------------------------------------------

#[cfg(feature = "std")]
impl<Octs> super::OptRecord<super::AllOptData<Octs>> {
    /// Returns the first edns-tcp-keepalive option of the record.
    ///
    /// Returns `None` if the record has no such option.
    #[must_use]
    pub fn tcp_keepalive(&self) -> Option<TcpKeepalive> {
        self.options().iter().find_map(|opt| match opt {
            super::AllOptData::TcpKeepalive(keepalive) => Some(*keepalive),
            _ => None,
        })
    }
}


//------------ FromDurationError ---------------------------------------------

/// A duration was too long for an idle timeout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromDurationError(());

impl fmt::Display for FromDurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("duration too long for idle timeout")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromDurationError {}


//============ Testing =======================================================
