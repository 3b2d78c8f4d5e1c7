//! Macros for option types.
//!
//! These macros are only used to generate enums in the parent module.
//! They are here in a separate module to keep the parent tidy.

macro_rules! opt_types {
    ( $(
        $module:ident::{
            $( $opt:ident $( < $octets:ident > )? => $code:ident ),*
        };
    )* ) => {

        $( $( pub use self::$module::$opt; )* )*

        $( pub mod $module; )*

        //------------ AllOptData --------------------------------------------

        /// Option data for any option.
        ///
        /// Options with a code known to this crate are parsed into their
        /// dedicated type. All other options end up as
        /// [`Other`][Self::Other] with their raw data.
        #[derive(Clone)]
        #[non_exhaustive]
        pub enum AllOptData<Octs> {
            $( $(
                $opt($module::$opt $( < $octets > )? ),
            )* )*
            Other(UnknownOptData<Octs>),
        }

        //--- From

        $( $(
            impl<Octs> From<$opt $( < $octets > )?> for AllOptData<Octs> {
                fn from(value: $module::$opt $( < $octets > )?) -> Self {
                    AllOptData::$opt(value)
                }
            }
        )* )*

        impl<Octs> From<UnknownOptData<Octs>> for AllOptData<Octs> {
            fn from(value: UnknownOptData<Octs>) -> Self {
                AllOptData::Other(value)
            }
        }

        //--- OptData

        impl<Octs> OptData for AllOptData<Octs> {
            fn code(&self) -> OptionCode {
                match *self {
                    $( $(
                        AllOptData::$opt(_) => OptionCode::$code,
                    )* )*
                    AllOptData::Other(ref inner) => inner.code(),
                }
            }
        }

        impl<'a, Octs: Octets + ?Sized> ParseOptData<'a, Octs>
        for AllOptData<Octs::Range<'a>> {
            fn parse_option(
                code: OptionCode, parser: &mut Parser<'a, Octs>
            ) -> Result<Option<Self>, ParseError> {
                match code {
                    $( $(
                        OptionCode::$code => {
                            Ok(Some(AllOptData::$opt(
                                $opt::parse(parser)?
                            )))
                        }
                    )* )*
                    _ => {
                        Ok(UnknownOptData::parse_option(
                            code, parser
                        )?.map(AllOptData::Other))
                    }
                }
            }
        }

        impl<Octs: AsRef<[u8]>> ComposeOptData for AllOptData<Octs> {
            fn compose_len(&self) -> u16 {
                match *self {
                    $( $(
                        AllOptData::$opt(ref inner) => inner.compose_len(),
                    )* )*
                    AllOptData::Other(ref inner) => inner.compose_len(),
                }
            }

            fn compose_option<Target: OctetsBuilder + ?Sized>(
                &self, target: &mut Target
            ) -> Result<(), Target::AppendError> {
                match *self {
                    $( $(
                        AllOptData::$opt(ref inner) => {
                            inner.compose_option(target)
                        }
                    )* )*
                    AllOptData::Other(ref inner) => {
                        inner.compose_option(target)
                    }
                }
            }
        }

        //--- PartialEq and Eq

        impl<Octs, Other> PartialEq<AllOptData<Other>> for AllOptData<Octs>
        where Octs: AsRef<[u8]>, Other: AsRef<[u8]> {
            fn eq(&self, other: &AllOptData<Other>) -> bool {
                match (self, other) {
                    $( $(
                        (AllOptData::$opt(left), AllOptData::$opt(right)) => {
                            left == right
                        }
                    )* )*
                    (AllOptData::Other(left), AllOptData::Other(right)) => {
                        left == right
                    }
                    _ => false,
                }
            }
        }

        impl<Octs: AsRef<[u8]>> Eq for AllOptData<Octs> { }

        //--- Display and Debug

        impl<Octs: AsRef<[u8]>> fmt::Display for AllOptData<Octs> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $( $(
                        AllOptData::$opt(ref inner) => {
                            write!(f, "{{{}: {}}}", self.code(), inner)
                        }
                    )* )*
                    AllOptData::Other(ref inner) => {
                        write!(f, "{{{}: {}}}", self.code(), inner)
                    }
                }
            }
        }

        impl<Octs: AsRef<[u8]>> fmt::Debug for AllOptData<Octs> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    $( $(
                        AllOptData::$opt(ref inner) => {
                            f.debug_tuple(stringify!($opt))
                                .field(inner)
                                .finish()
                        }
                    )* )*
                    AllOptData::Other(ref inner) => {
                        f.debug_tuple("Other").field(inner).finish()
                    }
                }
            }
        }
    }
}
