mod support;

use mo_dump::mo::display::{self, render_listing, usage, write_entries, write_summary};
use mo_dump::{parse, quote_escape, ListingMode};
use support::MoBuilder;

#[test]
fn quote_escape_handles_special_bytes() {
    assert_eq!(quote_escape(b"plain"), b"\"plain\"".to_vec());
    assert_eq!(quote_escape(b""), b"\"\"".to_vec());
    assert_eq!(quote_escape(b"a\nb"), b"\"a\\nb\"".to_vec());
    assert_eq!(quote_escape(b"a\tb"), b"\"a\\tb\"".to_vec());
    assert_eq!(quote_escape(b"a\0b"), b"\"a\\0b\"".to_vec());
    assert_eq!(quote_escape(b"say \"hi\""), b"\"say \\\"hi\\\"\"".to_vec());
    assert_eq!(quote_escape(b"C:\\dir"), b"\"C:\\\\dir\"".to_vec());
}

#[test]
fn quote_escape_passes_other_bytes_through() {
    assert_eq!(quote_escape(b"\r\x01\xff\xfe"), b"\"\r\x01\xff\xfe\"".to_vec());
    assert_eq!(quote_escape("café".as_bytes()), "\"café\"".as_bytes().to_vec());
}

#[test]
fn quote_escape_is_not_idempotent() {
    let once = quote_escape(b"\\");
    let twice = quote_escape(&once);
    assert_eq!(once, b"\"\\\\\"".to_vec());
    assert_eq!(twice, b"\"\\\"\\\\\\\\\\\"\"".to_vec());
}

#[test]
fn pairs_listing_for_single_entry() {
    let catalog = parse(&MoBuilder::new().entry("hello", "bonjour").build()).expect("valid");

    let mut out = Vec::new();
    write_summary(&mut out, &catalog).expect("write summary");
    write_entries(&mut out, &catalog, ListingMode::Pairs).expect("write entries");

    assert_eq!(out, b"Read 1 entries:\n  \"hello\" -> \"bonjour\"\n".to_vec());
}

#[test]
fn keys_listing_escapes_each_key() {
    let catalog = parse(
        &MoBuilder::new()
            .entry("line\nbreak", "x")
            .entry("plain", "y")
            .build(),
    )
    .expect("valid");

    let mut out = Vec::new();
    write_entries(&mut out, &catalog, ListingMode::Keys).expect("write entries");

    assert_eq!(out, b"  \"line\\nbreak\"\n  \"plain\"\n".to_vec());
}

#[test]
fn listing_mode_parses_known_actions_only() {
    assert_eq!("keys".parse::<ListingMode>(), Ok(ListingMode::Keys));
    assert_eq!("pairs".parse::<ListingMode>(), Ok(ListingMode::Pairs));
    assert!("Keys".parse::<ListingMode>().is_err());
    assert!("values".parse::<ListingMode>().is_err());
}

#[test]
fn usage_names_the_program() {
    assert_eq!(
        usage(Some("/usr/bin/mo-dump")),
        "Usage:\n  /usr/bin/mo-dump mo-filename keys\n  /usr/bin/mo-dump mo-filename pairs\n\n"
    );
    assert!(usage(None).contains(display::DEFAULT_PROGRAM_NAME));
}

#[test]
fn usage_falls_back_to_mo_dump_name() {
    assert_eq!(
        usage(None),
        "Usage:\n  mo_dump mo-filename keys\n  mo_dump mo-filename pairs\n\n"
    );
}

#[test]
fn full_listing_ends_with_empty_line() {
    let catalog = parse(
        &MoBuilder::new()
            .entry("hello", "bonjour")
            .entry("say \"hi\"", "dis \"salut\"")
            .build(),
    )
    .expect("valid");

    let mut out = Vec::new();
    render_listing(&mut out, &catalog, ListingMode::Pairs).expect("render pairs");
    assert_eq!(
        out,
        b"Read 2 entries:\n  \"hello\" -> \"bonjour\"\n  \"say \\\"hi\\\"\" -> \"dis \\\"salut\\\"\"\n\n".to_vec()
    );

    let mut out = Vec::new();
    render_listing(&mut out, &catalog, ListingMode::Keys).expect("render keys");
    assert_eq!(out, b"Read 2 entries:\n  \"hello\"\n  \"say \\\"hi\\\"\"\n\n".to_vec());
}

#[test]
fn empty_catalog_listing_is_count_and_empty_line() {
    let catalog = parse(&MoBuilder::new().build()).expect("valid");

    let mut out = Vec::new();
    render_listing(&mut out, &catalog, ListingMode::Keys).expect("render");
    assert_eq!(out, b"Read 0 entries:\n\n".to_vec());
}
