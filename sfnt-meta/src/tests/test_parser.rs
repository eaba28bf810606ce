use pretty_assertions::assert_eq;
use sfnt_test_data::{
    be_buffer, lcid::EN_US, os2::os2, source_han, FontBuilder, FvarBuilder, NameTableBuilder,
};
use sfnt_types::{Fixed, Tag, CFF_SFNT_VERSION, TT_SFNT_VERSION};

use super::*;
use crate::{source::StreamSource, SFNT_VERSIONS};

fn parse(font: &[u8]) -> Result<FontProperties, Error> {
    FontParser::new(ByteCursor::from_slice(font)).parse()
}

fn names() -> Vec<u8> {
    NameTableBuilder::new()
        .add_ms(EN_US, 1, "Test")
        .add_ms(EN_US, 2, "Regular")
        .build()
}

#[test]
fn steps_through_every_state() {
    let font = source_han::source_han_sans_sc_vf();
    let mut parser = FontParser::new(ByteCursor::from_slice(&font));
    assert_eq!(parser.state(), ParseState::Unopened);
    let mut states = Vec::new();
    while parser.state() != ParseState::Done {
        states.push(parser.step().unwrap());
    }
    assert_eq!(
        states,
        [
            ParseState::SignatureChecked,
            ParseState::DirectoryRead,
            ParseState::TablesDecoded,
            ParseState::Done,
        ]
    );
    assert_eq!(parser.step().unwrap(), ParseState::Done);
    let props = parser.into_properties().unwrap();
    assert_eq!(props.weight_class(), 250);
}

#[test]
fn properties_only_when_done() {
    let font = source_han::source_han_sans_j_medium();
    let mut parser = FontParser::new(ByteCursor::from_slice(&font));
    parser.step().unwrap();
    parser.step().unwrap();
    assert!(parser.into_properties().is_none());
}

#[test]
fn failed_step_keeps_state() {
    let font = be_buffer!(0x74746366u32, 0u16).into_vec();
    let mut parser = FontParser::new(ByteCursor::from_slice(&font));
    assert!(matches!(parser.step(), Err(Error::InvalidFormat(0x74746366))));
    assert_eq!(parser.state(), ParseState::Unopened);
}

#[test]
fn every_signature_is_accepted() {
    for version in SFNT_VERSIONS {
        let font = FontBuilder::new(version).build();
        let props = parse(&font).unwrap();
        assert_eq!(props.sfnt_version(), version);
        assert!(props.table_directory().is_empty());
    }
}

#[test]
fn unknown_signatures_are_rejected() {
    for version in [0u32, 0x00020000, 0x74746366, 0x774F4646, 0xFFFFFFFF] {
        let font = FontBuilder::new(version).build();
        assert!(
            matches!(parse(&font), Err(Error::InvalidFormat(v)) if v == version),
            "{version:08X}"
        );
    }
}

#[test]
fn empty_input() {
    assert!(matches!(parse(&[]), Err(Error::EndOfData { .. })));
}

#[test]
fn truncated_directory() {
    let mut font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"name"), names())
        .build();
    font.truncate(20);
    assert!(matches!(parse(&font), Err(Error::EndOfData { .. })));
}

#[test]
fn no_os2_means_zero_weight() {
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"name"), names())
        .build();
    let props = parse(&font).unwrap();
    assert_eq!(props.weight_class(), 0);
    assert_eq!(props.width_class(), 0);
    assert_eq!(props.family_for("en-US"), "Test");
    assert!(!props.is_variable());
}

#[test]
fn only_os2() {
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"OS/2"), os2(700, 5))
        .build();
    let props = parse(&font).unwrap();
    assert_eq!(props.weight_class(), 700);
    assert!(props.family().is_empty());
    assert_eq!(props.family_for("en-US"), "");
}

#[test]
fn fvar_without_axes_is_not_variable() {
    let fvar = be_buffer!(1u16, 0u16, 16u16, 2u16, 0u16, 20u16, 0u16, 4u16);
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"name"), names())
        .add_table(Tag::new(b"fvar"), fvar)
        .build();
    let props = parse(&font).unwrap();
    assert!(!props.is_variable());
    assert!(props.axes().is_empty());
    assert!(props.instances().is_empty());
    assert!(props.table_directory().contains(Tag::new(b"fvar")));
}

#[test]
fn malformed_fvar_is_isolated() {
    let fvar = FvarBuilder::new()
        .axes_array_offset(8)
        .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
        .add_instance(257, &[400.0], None)
        .build();
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"fvar"), fvar)
        .add_table(Tag::new(b"name"), names())
        .add_table(Tag::new(b"OS/2"), os2(400, 5))
        .build();
    let props = parse(&font).unwrap();
    assert!(!props.is_variable());
    assert!(props.axes().is_empty());
    assert_eq!(props.family_for("en-US"), "Test");
    assert_eq!(props.weight_class(), 400);
}

#[test]
fn truncated_fvar_is_isolated() {
    let mut fvar = FvarBuilder::new()
        .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
        .add_instance(257, &[400.0], None)
        .build();
    fvar.truncate(30);
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"name"), names())
        .add_table(Tag::new(b"fvar"), fvar)
        .build();
    let props = parse(&font).unwrap();
    assert!(!props.is_variable());
    assert_eq!(props.subfamily_for("en-US"), "Regular");
}

#[test]
fn name_errors_are_not_isolated() {
    let mut names = names();
    // string storage offset now points past the end of the table
    names[4..6].copy_from_slice(&0x7FFFu16.to_be_bytes());
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"name"), names)
        .build();
    assert!(matches!(parse(&font), Err(Error::EndOfData { .. })));
}

#[test]
fn names_link_after_fvar_read_first() {
    // fvar precedes name in the file, so the names are only available once
    // every table has been read
    let fvar = FvarBuilder::new()
        .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
        .add_instance(257, &[900.0], Some(258))
        .build();
    let names = NameTableBuilder::new()
        .add_ms(EN_US, 256, "Weight")
        .add_ms(EN_US, 257, "Black")
        .add_ms(EN_US, 258, "Test-Black")
        .build();
    let font = FontBuilder::new(CFF_SFNT_VERSION)
        .add_table(Tag::new(b"fvar"), fvar)
        .add_table(Tag::new(b"name"), names)
        .build();
    let props = parse(&font).unwrap();
    assert!(props.is_variable());
    assert_eq!(props.axes()[0].name_for("en-US"), "Weight");
    let instance = &props.instances()[0];
    assert_eq!(instance.name_for("en-US"), "Black");
    assert_eq!(instance.postscript_name_for("en-US"), "Test-Black");
    assert_eq!(instance.coordinate(Tag::new(b"wght")), Some(900.0));
}

#[test]
fn unresolved_name_ids_are_empty() {
    let fvar = FvarBuilder::new()
        .add_axis(b"wght", 100.0, 400.0, 900.0, 300)
        .add_instance(301, &[900.0], None)
        .build();
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"fvar"), fvar)
        .build();
    let props = parse(&font).unwrap();
    assert!(props.is_variable());
    assert!(props.axes()[0].name().is_empty());
    assert_eq!(props.instances()[0].name_for("en-US"), "");
    assert!(props.instances()[0].postscript_name().is_empty());
}

#[test]
fn stream_reads_in_file_order() {
    // directory order is OS/2, fvar, head, name; file order is name, fvar, OS/2
    let font = source_han::source_han_sans_sc_vf();
    let source = StreamSource::new(font.as_slice());
    let props = FontParser::new(ByteCursor::new(source, font.len() as u64))
        .parse()
        .unwrap();
    assert_eq!(props, parse(&font).unwrap());
}

#[test]
fn stream_cannot_go_back() {
    // an OS/2 record pointing at the start of the file
    let font = be_buffer! {
        TT_SFNT_VERSION, 1u16, 0u16, 0u16, 0u16,
        (Tag::new(b"OS/2")), 0u32, 0u32, 16u32
    }
    .into_vec();
    let props = parse(&font).unwrap();
    // usWeightClass overlaps numTables
    assert_eq!(props.weight_class(), 1);

    let source = StreamSource::new(font.as_slice());
    let result = FontParser::new(ByteCursor::new(source, font.len() as u64)).parse();
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn overlong_fvar_arrays_are_isolated() {
    // two instances of 8 bytes are declared but none are stored; the name
    // table that follows must not be read as instance records
    let fvar = be_buffer! {
        1u16, 0u16, 16u16, 2u16, 1u16, 20u16, 2u16, 8u16,
        (Tag::new(b"wght")), (Fixed::from_integer(100)), (Fixed::from_integer(400)),
        (Fixed::from_integer(900)), 0u16, 256u16
    };
    let font = FontBuilder::new(TT_SFNT_VERSION)
        .add_table(Tag::new(b"fvar"), fvar)
        .add_table(Tag::new(b"name"), names())
        .build();

    let props = parse(&font).unwrap();
    assert!(!props.is_variable());
    assert!(props.instances().is_empty());
    assert_eq!(props.family_for("en-US"), "Test");

    let source = StreamSource::new(font.as_slice());
    let streamed = FontParser::new(ByteCursor::new(source, font.len() as u64))
        .parse()
        .unwrap();
    assert_eq!(streamed, props);
}
