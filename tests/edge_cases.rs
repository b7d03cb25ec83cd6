//! Edge case tests for chatstats
//!
//! Malformed lines, odd characters and boundary conditions. None of these
//! may abort ingestion.

use chatstats::config::ParserConfig;
use chatstats::core::filter::FilterConfig;
use chatstats::{LineParser, Message, MessageKind, MessageStore};
use chrono::NaiveDate;

fn parser() -> LineParser {
    LineParser::with_config(ParserConfig::new().with_skip_header(false))
}

fn store(export: &str) -> MessageStore {
    parser().parse_str(export).into_iter().collect()
}

// =========================================================================
// Empty and degenerate input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parser().parse_str("").is_empty());
    assert!(LineParser::new().parse_str("").is_empty());
}

#[test]
fn test_header_only() {
    let export = "[7/2/24, 9:00:00 AM] Grupo: Los mensajes están cifrados";
    assert!(LineParser::new().parse_str(export).is_empty());
}

#[test]
fn test_orphan_lines_before_first_message() {
    let export = "stray text\nmore stray\n[7/2/24, 9:15:03 AM] Alice: Hola";
    let (messages, summary) = parser().parse_lines_with_summary(export.lines());
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body(), "Hola");
    assert_eq!(summary.orphan_lines, 2);
    assert_eq!(summary.continuation_lines, 0);
}

#[test]
fn test_short_lines_are_continuations() {
    let export = "[7/2/24, 9:15:03 AM] Alice: uno\n[\n\ndos";
    let messages = parser().parse_str(export);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body(), "uno\n[\n\ndos");
}

#[test]
fn test_windows_line_endings() {
    let export = "[7/2/24, 9:15:03 AM] Alice: uno\r\ndos\r\n[7/2/24, 9:16:00 AM] Bob: tres\r\n";
    let messages = parser().parse_str(export);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "uno\ndos");
    assert_eq!(messages[1].body(), "tres");
}

#[test]
fn test_byte_order_mark_before_first_line() {
    let messages = parser().parse_str("\u{FEFF}[7/2/24, 9:15:03 AM] Alice: Hola");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "Alice");
    assert!(messages[0].timestamp().is_some());
}

// =========================================================================
// Malformed timestamps and senders
// =========================================================================

#[test]
fn test_unparseable_timestamp_keeps_message() {
    let s = store(
        "[not a date] Alice: sin fecha\n\
         [7/2/24, 9:15:03 AM] Alice: con fecha",
    );
    assert_eq!(s.len(), 2);
    assert_eq!(s.messages()[0].timestamp(), None);
    assert_eq!(s.messages()[0].sender(), "Alice");
    assert_eq!(s.messages()[0].body(), "sin fecha");

    // Counted for senders and lengths
    assert_eq!(s.count_by_sender(), vec![("Alice".to_string(), 2)]);
    assert!(s.average_length().is_ok());

    // Left out of everything temporal
    let day = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
    assert_eq!(s.on_date(day).len(), 1);
    assert_eq!(s.messages_per_day(), vec![(day, 1)]);
    assert_eq!(s.messages_per_month().iter().map(|(_, c)| c).sum::<usize>(), 1);
}

#[test]
fn test_missing_timestamps_counted() {
    let (_, summary) = parser().parse_lines_with_summary(
        ["[13/45/24, 9:00:00 AM] A: x", "[7/2/24, 9:00:00 AM] B: y"].into_iter(),
    );
    assert_eq!(summary.missing_timestamps, 1);
}

#[test]
fn test_missing_closing_bracket() {
    let messages = parser().parse_str("[7/2/24, 9:15:03 AM Alice: Hola");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].timestamp(), None);
    assert_eq!(messages[0].sender(), "7/2/24, 9");
    assert_eq!(messages[0].body(), "15:03 AM Alice: Hola");
}

#[test]
fn test_line_without_colon() {
    let messages = parser().parse_str("[7/2/24, 9:15:03 AM] Alice cambió el asunto");
    assert_eq!(messages[0].sender(), "Alice cambió el asunto");
    assert_eq!(messages[0].body(), "");
    assert_eq!(messages[0].kind(), MessageKind::Text);
}

#[test]
fn test_timestamp_without_seconds() {
    let messages = parser().parse_str("[7/2/24, 9:15 PM] Alice: Hola");
    let expected = NaiveDate::from_ymd_opt(2024, 7, 2)
        .and_then(|d| d.and_hms_opt(21, 15, 0));
    assert_eq!(messages[0].timestamp(), expected);
}

#[test]
fn test_meridiem_without_space() {
    let messages = parser().parse_str("[7/2/24, 9:15:03p.m.] Alice: Hola");
    let expected = NaiveDate::from_ymd_opt(2024, 7, 2)
        .and_then(|d| d.and_hms_opt(21, 15, 3));
    assert_eq!(messages[0].timestamp(), expected);
    assert_eq!(messages[0].sender(), "Alice");
}

// =========================================================================
// Kinds and durations
// =========================================================================

#[test]
fn test_malformed_duration_is_skipped_in_totals() {
    let s = store(
        "[7/2/24, 9:00:00 AM] A: Llamada de voz · cinco min\n\
         [7/2/24, 9:10:00 AM] A: Llamada de voz · 3 min",
    );
    assert_eq!(s.count_kind(MessageKind::Call), 2);
    assert_eq!(s.messages()[0].duration_minutes(), None);
    assert_eq!(s.total_call_minutes(), 3);
}

#[test]
fn test_signed_duration_is_skipped_in_totals() {
    let s = store(
        "[7/2/24, 9:00:00 AM] A: Llamada de voz · +5 min\n\
         [7/2/24, 9:10:00 AM] A: Llamada de voz · 3 min",
    );
    assert_eq!(s.count_kind(MessageKind::Call), 2);
    assert_eq!(s.messages()[0].duration_minutes(), None);
    assert_eq!(s.total_call_minutes(), 3);
}

#[test]
fn test_hour_overflow_is_absent() {
    let msg = Message::new("A", "Videollamada · 100000000 h");
    assert_eq!(msg.kind(), MessageKind::VideoCall);
    assert_eq!(msg.duration_minutes(), None);
}

#[test]
fn test_classification_is_case_sensitive() {
    assert_eq!(Message::new("A", "videollamada · 1 h").kind(), MessageKind::Text);
    assert_eq!(Message::new("A", "IMAGEN OMITIDA").kind(), MessageKind::Text);
}

#[test]
fn test_call_keyword_needs_unit() {
    assert_eq!(
        Message::new("A", "Llamada de voz perdida").kind(),
        MessageKind::Text
    );
}

#[test]
fn test_classification_sees_merged_body() {
    let messages = parser().parse_str("[7/2/24, 9:00:00 AM] A: Te mando\nimagen omitida");
    assert_eq!(messages[0].kind(), MessageKind::Image);
}

#[test]
fn test_text_never_has_duration() {
    let msg = Message::new("A", "nos vemos en 5 min");
    assert_eq!(msg.kind(), MessageKind::Text);
    assert_eq!(msg.duration_minutes(), None);
}

// =========================================================================
// Lengths and ties
// =========================================================================

#[test]
fn test_length_counts_characters() {
    let msg = Message::new("A", "ñ🎉");
    assert_eq!(msg.body_len(), 2);
}

#[test]
fn test_length_ties_go_to_first() {
    let s: MessageStore = vec![
        Message::new("A", "abc"),
        Message::new("B", "xyz"),
        Message::new("C", "a"),
        Message::new("D", "b"),
    ]
    .into_iter()
    .collect();
    assert_eq!(s.longest().unwrap().sender(), "A");
    assert_eq!(s.shortest().unwrap().sender(), "C");
    assert!((s.average_length().unwrap() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_group_ties_keep_first_seen_order() {
    let s = store(
        "[7/3/24, 9:00:00 AM] A: x\n\
         [7/1/24, 9:00:00 AM] A: y\n\
         [7/3/24, 9:00:00 AM] A: z\n\
         [7/1/24, 9:00:00 AM] A: w",
    );
    let days: Vec<u32> = s
        .messages_per_day()
        .into_iter()
        .map(|(d, _)| chrono::Datelike::day(&d))
        .collect();
    assert_eq!(days, vec![3, 1]);
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn test_date_filter_drops_undated_messages() {
    let s = store("[bad] A: x\n[7/2/24, 9:00:00 AM] A: y");
    let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
    assert_eq!(s.filtered(&config).len(), 1);

    let sender_only = FilterConfig::new().with_sender("A");
    assert_eq!(s.filtered(&sender_only).len(), 2);
}

#[test]
fn test_between_with_inverted_range_is_empty() {
    let s = store("[7/2/24, 9:00:00 AM] A: y");
    let day = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
    let late = day.and_hms_opt(23, 0, 0).unwrap();
    let early = day.and_hms_opt(1, 0, 0).unwrap();
    assert!(s.between(late, early).is_empty());
    assert_eq!(s.between(early, late).len(), 1);
}
