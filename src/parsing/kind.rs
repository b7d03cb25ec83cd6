//! Message kind classification and call duration extraction.
//!
//! Kinds are inferred from placeholder text the export writes in place of
//! media and call records. The categories overlap (a call record could in
//! principle mention `imagen omitida`), so the rules are an ordered table and
//! the first match wins.

use tracing::debug;

use crate::message::MessageKind;

/// One classification rule: `needle` must appear, and if `qualifiers` is
/// non-empty at least one of them must appear too.
struct KindRule {
    kind: MessageKind,
    needle: &'static str,
    qualifiers: &'static [&'static str],
}

impl KindRule {
    fn matches(&self, body: &str) -> bool {
        body.contains(self.needle)
            && (self.qualifiers.is_empty() || self.qualifiers.iter().any(|q| body.contains(q)))
    }
}

const DURATION_UNITS: &[&str] = &["min", "h"];

/// Evaluated top to bottom.
const RULES: &[KindRule] = &[
    KindRule {
        kind: MessageKind::Call,
        needle: "Llamada",
        qualifiers: DURATION_UNITS,
    },
    KindRule {
        kind: MessageKind::VideoCall,
        needle: "Videollamada",
        qualifiers: DURATION_UNITS,
    },
    KindRule {
        kind: MessageKind::Sticker,
        needle: "sticker omitido",
        qualifiers: &[],
    },
    KindRule {
        kind: MessageKind::Image,
        needle: "imagen omitida",
        qualifiers: &[],
    },
    KindRule {
        kind: MessageKind::Video,
        needle: "Video omitido",
        qualifiers: &[],
    },
];

/// Classifies a message body. Anything no rule claims is [`MessageKind::Text`].
///
/// ```
/// use chatstats::MessageKind;
/// use chatstats::parsing::kind::classify;
///
/// assert_eq!(classify("Llamada perdida 5 min"), MessageKind::Call);
/// assert_eq!(classify("Videollamada · 1 h"), MessageKind::VideoCall);
/// assert_eq!(classify(" imagen omitida"), MessageKind::Image);
/// assert_eq!(classify("hola"), MessageKind::Text);
/// ```
pub fn classify(body: &str) -> MessageKind {
    RULES
        .iter()
        .find(|rule| rule.matches(body))
        .map_or(MessageKind::Text, |rule| rule.kind)
}

/// Reads the trailing `<number> <unit>` pair of a call body as minutes.
///
/// `min` is taken as-is and `h` is multiplied by 60. Any other unit, a
/// non-numeric value or a body with fewer than two tokens gives `None`, and
/// such calls are left out of duration totals.
///
/// ```
/// use chatstats::parsing::kind::parse_duration;
///
/// assert_eq!(parse_duration("Llamada de voz · 12 min"), Some(12));
/// assert_eq!(parse_duration("Videollamada · 2 h"), Some(120));
/// assert_eq!(parse_duration("Llamada perdida · min"), None);
/// ```
pub fn parse_duration(body: &str) -> Option<u32> {
    let mut tokens = body.split_whitespace().rev();
    let unit = tokens.next()?;
    let number = tokens.next()?;

    // Plain digits only; `u32::from_str` would also take a leading `+`.
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        debug!(body = %body, "call duration is not a number");
        return None;
    }
    let Ok(value) = number.parse::<u32>() else {
        debug!(body = %body, "call duration is out of range");
        return None;
    };

    match unit {
        "min" => Some(value),
        "h" => value.checked_mul(60),
        other => {
            debug!(unit = %other, "unknown call duration unit");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_media() {
        assert_eq!(classify("sticker omitido"), MessageKind::Sticker);
        assert_eq!(classify("imagen omitida"), MessageKind::Image);
        assert_eq!(classify("Video omitido"), MessageKind::Video);
    }

    #[test]
    fn test_classify_calls_need_unit() {
        assert_eq!(classify("Llamada de voz · 3 min"), MessageKind::Call);
        assert_eq!(classify("Llamada perdida"), MessageKind::Text);
        assert_eq!(classify("Videollamada perdida"), MessageKind::Text);
    }

    #[test]
    fn test_videollamada_is_not_llamada() {
        // "Videollamada" only contains a lowercase "llamada"
        assert_eq!(classify("Videollamada · 4 min"), MessageKind::VideoCall);
    }

    #[test]
    fn test_precedence_call_over_media() {
        assert_eq!(
            classify("Llamada · imagen omitida 2 min"),
            MessageKind::Call
        );
        assert_eq!(
            classify("sticker omitido imagen omitida"),
            MessageKind::Sticker
        );
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(classify("video omitido"), MessageKind::Text);
        assert_eq!(classify("IMAGEN OMITIDA"), MessageKind::Text);
    }

    #[test]
    fn test_parse_duration_minutes_and_hours() {
        assert_eq!(parse_duration("Llamada perdida 5 min"), Some(5));
        assert_eq!(parse_duration("Videollamada · 1 h"), Some(60));
        assert_eq!(parse_duration("Llamada 0 min"), Some(0));
    }

    #[test]
    fn test_parse_duration_malformed() {
        assert_eq!(parse_duration("Llamada · cinco min"), None);
        assert_eq!(parse_duration("Llamada · 5 seg"), None);
        assert_eq!(parse_duration("Llamada · -5 min"), None);
        assert_eq!(parse_duration("Llamada de voz · +5 min"), None);
        assert_eq!(parse_duration("Llamada de voz · 99999999999 min"), None);
        assert_eq!(parse_duration("min"), None);
        assert_eq!(parse_duration(""), None);
    }
}
