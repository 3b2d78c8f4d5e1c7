#![cfg(feature = "std")]

use opt_record::base::iana::OptionCode;
use opt_record::base::opt::control::{
    pack, unpack_ext_rcode, unpack_flags, unpack_version
};
use opt_record::base::opt::{
    AllOptData, Nsid, OptRecord, Padding, TcpKeepalive, UnknownOptData
};
use opt_record::base::ParseError;
use octseq::builder::infallible;
use octseq::parse::Parser;
use rstest::rstest;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

type Record = OptRecord<AllOptData<Vec<u8>>>;

fn options() -> Vec<AllOptData<Vec<u8>>> {
    vec![
        Nsid::from_octets(b"ns1.example".to_vec()).unwrap().into(),
        TcpKeepalive::response(300.into()).into(),
        Padding::from_octets(vec![0; 5]).unwrap().into(),
        UnknownOptData::new(
            OptionCode::from_int(65001), b"\x01\x02".to_vec()
        ).unwrap().into(),
    ]
}

fn rdata(record: &Record) -> Vec<u8> {
    let mut buf = Vec::new();
    infallible(record.compose_rdata(&mut buf));
    assert_eq!(buf.len(), usize::from(record.rdlen()));
    buf
}

fn decode(
    payload: u16, ttl: u32, rdata: &[u8]
) -> Result<Record, ParseError> {
    let mut parser = Parser::from_ref(rdata);
    let record = OptRecord::<AllOptData<&[u8]>>::parse_rdata(
        payload, ttl, &mut parser
    )?;
    assert_eq!(parser.remaining(), 0);
    Ok(OptRecord::from_parts(
        record.udp_payload_size(), record.ttl(),
        record.into_options().map(|options| {
            options.into_iter().map(into_owned).collect()
        })
    ).unwrap())
}

fn into_owned(option: AllOptData<&[u8]>) -> AllOptData<Vec<u8>> {
    match option {
        AllOptData::Nsid(nsid) => {
            Nsid::from_octets(nsid.as_slice().to_vec()).unwrap().into()
        }
        AllOptData::Padding(padding) => {
            Padding::from_octets(padding.as_slice().to_vec()).unwrap().into()
        }
        AllOptData::TcpKeepalive(keepalive) => keepalive.into(),
        AllOptData::Other(other) => {
            UnknownOptData::new(
                other.code(), other.as_slice().to_vec()
            ).unwrap().into()
        }
        _ => unreachable!(),
    }
}

fn std_hash(record: &Record) -> u64 {
    let mut hasher = DefaultHasher::new();
    record.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
#[case(0, 0, 0, 0)]
#[case(512, 0, 0, 0x8000)]
#[case(4096, 1, 0, 0)]
#[case(65535, 255, 255, 65535)]
fn round_trip(
    #[case] payload: u16,
    #[case] ext_rcode: u8,
    #[case] version: u8,
    #[case] flags: u16,
) {
    for opts in [None, Some(Vec::new()), Some(options())] {
        let record =
            Record::new(payload, ext_rcode, version, flags, opts).unwrap();
        let decoded = decode(
            record.udp_payload_size(), record.ttl(), &rdata(&record)
        ).unwrap();
        assert_eq!(decoded.udp_payload_size(), payload);
        assert_eq!(decoded.ext_rcode(), ext_rcode);
        assert_eq!(decoded.version(), version);
        assert_eq!(decoded.flags(), flags);
        assert_eq!(decoded.options(), record.options());
        assert_eq!(decoded.has_options(), !record.options().is_empty());
        assert_eq!(decoded, record);
    }
}

#[test]
fn raw_known_option_round_trip() {
    // An NSID option kept as raw data decodes into the typed option.
    let record = Record::new(
        1232, 0, 0, 0,
        Some(vec![
            UnknownOptData::new(OptionCode::NSID, b"ns".to_vec())
                .unwrap().into(),
            UnknownOptData::new(OptionCode::TCP_KEEPALIVE, b"\x00\x64".to_vec())
                .unwrap().into(),
        ])
    ).unwrap();
    let decoded =
        decode(record.udp_payload_size(), record.ttl(), &rdata(&record))
        .unwrap();
    assert!(matches!(decoded.options()[0], AllOptData::Nsid(_)));
    assert_eq!(
        decoded.tcp_keepalive(), Some(TcpKeepalive::response(100.into()))
    );
    assert_eq!(decoded, record);
    assert_eq!(std_hash(&decoded), std_hash(&record));

    let typed = Record::new(
        1232, 0, 0, 0,
        Some(vec![
            Nsid::from_octets(b"ns".to_vec()).unwrap().into(),
            TcpKeepalive::response(100.into()).into(),
        ])
    ).unwrap();
    assert_eq!(typed, record);
    assert_eq!(typed.canonical_hash(), record.canonical_hash());
}

#[test]
fn full_record_round_trip() {
    let record = Record::new(1232, 0, 0, 0x8000, Some(options())).unwrap();
    let mut wire = Vec::new();
    infallible(record.compose(&mut wire));
    let mut canonical = Vec::new();
    infallible(record.compose_canonical(&mut canonical));
    assert_eq!(wire, canonical);

    let mut parser = Parser::from_ref(&wire);
    let parsed = OptRecord::<AllOptData<&[u8]>>::parse(&mut parser).unwrap();
    assert_eq!(parser.remaining(), 0);
    assert_eq!(parsed, record);
    assert_eq!(parsed.canonical_hash(), record.canonical_hash());
}

#[rstest]
#[case(65535, 255, 255, 65535, true)]
#[case(65536, 0, 0, 0, false)]
#[case(0, 256, 0, 0, false)]
#[case(0, 0, 256, 0, false)]
#[case(0, 0, 0, 65536, false)]
fn construction_bounds(
    #[case] payload: u32,
    #[case] ext_rcode: u32,
    #[case] version: u32,
    #[case] flags: u32,
    #[case] ok: bool,
) {
    assert_eq!(
        Record::try_new(payload, ext_rcode, version, flags, None).is_ok(),
        ok
    );
}

#[rstest]
#[case(65535, true)]
#[case(65536, false)]
fn record_data_bounds(#[case] rdlen: usize, #[case] ok: bool) {
    let padding = Padding::from_octets(vec![0; rdlen - 4]).unwrap();
    let res = Record::new(4096, 0, 0, 0, Some(vec![padding.into()]));
    assert_eq!(res.is_ok(), ok);
    if let Ok(record) = res {
        assert_eq!(rdata(&record).len(), rdlen);
        let mut wire = Vec::new();
        infallible(record.compose(&mut wire));
        let mut parser = Parser::from_ref(&wire);
        let parsed =
            OptRecord::<AllOptData<&[u8]>>::parse(&mut parser).unwrap();
        assert_eq!(parsed, record);
    }
}

#[test]
fn zero_length_rdata_is_absent() {
    let decoded = decode(4096, 0, b"").unwrap();
    assert!(decoded.options().is_empty());
    assert!(!decoded.has_options());

    let empty = Record::new(4096, 0, 0, 0, Some(Vec::new())).unwrap();
    assert_eq!(decoded, empty);
    assert_eq!(
        decoded.to_string(),
        "; payload 4096, xrcode 0, version 0, flags 0"
    );
    assert_eq!(
        empty.to_string(),
        "[] ; payload 4096, xrcode 0, version 0, flags 0"
    );
}

#[test]
fn truncated_option_fails() {
    let record = Record::new(1232, 0, 0, 0, Some(options())).unwrap();
    let rdata = rdata(&record);
    for len in [1, 3, 4, 10, rdata.len() - 1] {
        assert_eq!(
            decode(1232, 0, &rdata[..len]).unwrap_err(),
            ParseError::ShortInput
        );
    }
}

#[test]
fn pack_unpack_round_trip() {
    for a in [0u8, 1, 0x7f, 0x80, 0xff] {
        for b in [0u8, 1, 0x7f, 0x80, 0xff] {
            for c in [0u16, 1, 0x7fff, 0x8000, 0xffff] {
                let ttl = pack(a, b, c);
                assert_eq!(unpack_ext_rcode(ttl), a);
                assert_eq!(unpack_version(ttl), b);
                assert_eq!(unpack_flags(ttl), c);
            }
        }
    }
}

#[test]
fn equal_inputs_equal_hashes() {
    let one = Record::new(1232, 0, 0, 0, Some(options())).unwrap();
    let two = Record::new(1232, 0, 0, 0, Some(options())).unwrap();
    assert_eq!(one, two);
    assert_eq!(one.canonical_hash(), two.canonical_hash());
    assert_eq!(std_hash(&one), std_hash(&two));

    let flagged = Record::new(1232, 0, 0, 0x8000, Some(options())).unwrap();
    assert_ne!(one, flagged);
}

#[test]
fn text_parse_always_fails() {
    let record = Record::new(1232, 0, 0, 0, Some(options())).unwrap();
    for text in [String::new(), record.to_string(), "OPT 4096".into()] {
        let err = text.parse::<Record>().unwrap_err();
        assert_eq!(err.to_string(), "no text format defined for OPT");
    }
}

#[test]
fn minimal_end_to_end() {
    let record = Record::basic(4096, 0, 0);
    let rdata = rdata(&record);
    assert!(rdata.is_empty());
    assert_eq!(record.rdlen(), 0);

    let decoded =
        decode(record.udp_payload_size(), record.ttl(), &rdata).unwrap();
    assert!(decoded.options().is_empty());
    assert_eq!(decoded.udp_payload_size(), 4096);
    assert_eq!(decoded.ext_rcode(), 0);
}
