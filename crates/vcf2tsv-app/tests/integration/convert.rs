//! Full conversion runs.

use vcf2tsv_app::convert::ConversionSummary;
use vcf2tsv_app::error::AppError;
use vcf2tsv_rfc::rfc::vcard::ParseErrorKind;

use super::helpers::*;

#[test_log::test]
fn two_cards_in_one_file_become_two_rows_in_order() {
    let ws = Workspace::new();
    ws.add(
        "both.vcf",
        &format!(
            "{}{}",
            card_30("Doe", "Jane", "111"),
            card_30("Roe", "Richard", "222")
        ),
    );

    let (result, _) = ws.run();

    assert_eq!(result.unwrap(), ConversionSummary { files: 1, rows: 2 });
    let rows = ws.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "Jane Doe");
    assert_eq!(rows[0][2], "111");
    assert_eq!(rows[1][0], "Richard Roe");
    assert_eq!(rows[1][2], "222");
}

#[test]
fn files_are_processed_in_path_order() {
    let ws = Workspace::new();
    ws.add("b.vcf", &card_30("Bravo", "B", "2"))
        .add("a.vcf", &card_30("Alpha", "A", "1"))
        .add("c.vcf", &card_30("Charlie", "C", "3"))
        .add("ignored.txt", &card_30("Ignored", "I", "0"));

    let (result, _) = ws.run();

    assert_eq!(result.unwrap().files, 3);
    let names: Vec<String> = ws.rows().into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(names, vec!["A Alpha", "B Bravo", "C Charlie"]);
}

#[test]
fn header_row_is_byte_exact() {
    let ws = Workspace::new();
    ws.add("one.vcf", &card_30("Doe", "Jane", "1"));

    ws.run().0.unwrap();

    assert!(ws.output_text().starts_with(HEADER));
}

#[test]
fn mixed_versions_map_every_column() {
    let ws = Workspace::new();
    ws.add(
        "android.vcf",
        "BEGIN:VCARD\r\n\
         VERSION:2.1\r\n\
         N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:M=C3=BCller;J=C3=BCrgen;;;\r\n\
         FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:J=C3=BCrgen M=C3=BCller\r\n\
         TEL;CELL;PREF:+49 151 0000000\r\n\
         TEL;WORK;VOICE:+49 30 0000000\r\n\
         TEL;HOME:+49 30 1111111\r\n\
         EMAIL;HOME:juergen@example.com\r\n\
         NOTE;ENCODING=QUOTED-PRINTABLE:first=0D=0Asecond\r\n\
         END:VCARD\r\n",
    );

    let (result, sink) = ws.run();

    result.unwrap();
    assert!(sink.diagnostics.is_empty());
    let text = ws.output_text();
    assert_eq!(
        text.strip_prefix(HEADER).unwrap(),
        "Jürgen Müller\tJürgen Müller\t+49 151 0000000\t+49 30 0000000\t+49 30 1111111\t\
         juergen@example.com\t\"first\r\nsecond\"\r\n"
    );
}

#[test]
fn files_without_cards_give_header_only() {
    let ws = Workspace::new();
    ws.add("empty.vcf", "").add("blank.vcf", "\r\n\r\n");

    let (result, _) = ws.run();

    assert_eq!(result.unwrap(), ConversionSummary { files: 2, rows: 0 });
    assert_eq!(ws.output_text(), HEADER);
}

#[test]
fn empty_directory_is_no_input() {
    let ws = Workspace::new();

    let (result, _) = ws.run();

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NoInput { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(!ws.output.exists());
}

#[test_log::test]
fn format_error_keeps_rows_of_earlier_files() {
    let ws = Workspace::new();
    ws.add("a.vcf", &card_30("Doe", "Jane", "1"))
        .add(
            "b.vcf",
            &format!(
                "{}BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Modern\r\nEND:VCARD\r\n",
                card_30("Roe", "Richard", "2")
            ),
        )
        .add("c.vcf", &card_30("Never", "Reached", "3"));

    let (result, _) = ws.run();

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    let AppError::Format { path, source } = &err else {
        panic!("expected a format error, got {err:?}");
    };
    assert!(path.ends_with("b.vcf"));
    assert_eq!(
        source.parse_error().kind,
        ParseErrorKind::UnsupportedVersion
    );

    let names: Vec<String> = ws.rows().into_iter().map(|r| r[0].clone()).collect();
    assert_eq!(names, vec!["Jane Doe"]);
}

#[test]
fn unterminated_card_is_a_format_error() {
    let ws = Workspace::new();
    ws.add("open.vcf", "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Open\r\n");

    let (result, _) = ws.run();

    let err = result.unwrap_err();
    assert!(matches!(&err, AppError::Format { source, .. }
        if source.parse_error().kind == ParseErrorKind::UnexpectedEof));
    assert_eq!(ws.output_text(), HEADER);
}

#[test]
fn unrecognized_phone_category_warns_once_and_is_skipped() {
    let ws = Workspace::new();
    ws.add(
        "custom.vcf",
        "BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         N:Doe;Jane;;;\r\n\
         TEL;TYPE=X-SATELLITE:+881 0000\r\n\
         TEL;TYPE=HOME:+1 555 0102\r\n\
         END:VCARD\r\n",
    );

    let (result, sink) = ws.run();

    result.unwrap();
    assert_eq!(sink.warnings().count(), 1);
    let rows = ws.rows();
    assert_eq!(rows[0][2..5], ["", "", "+1 555 0102"]);
}

#[test]
fn existing_output_is_replaced() {
    let ws = Workspace::new();
    std::fs::write(&ws.output, "stale content from an earlier run\r\n").unwrap();
    ws.add("one.vcf", &card_30("Doe", "Jane", "1"));

    ws.run().0.unwrap();

    let text = ws.output_text();
    assert!(text.starts_with(HEADER));
    assert!(!text.contains("stale"));
}
