use crate::messages::{DslMessage, Severity};
use crate::parser::parse;

#[test]
fn codes_are_stable() {
    let expected: &[(DslMessage, u16)] = &[
        (DslMessage::UnexpectedDataAfterModule, 100),
        (DslMessage::NoWhitespaceBeforeArgName, 101),
        (DslMessage::NoWhitespaceBeforeArgEquals, 102),
        (DslMessage::NoWhitespaceBeforeArgValue, 103),
        (DslMessage::MoreInput, 104),
        (DslMessage::ExpectedArgumentValue, 105),
        (DslMessage::NonTerminatingDoubleQuotedString, 106),
        (DslMessage::NonTerminatingQuotedString, 107),
        (DslMessage::NotAnInteger, 1035),
        (DslMessage::NotALong, 1036),
        (DslMessage::NotExpectedToken, 1043),
        (DslMessage::OutOfData, 1044),
        (DslMessage::RealCannotBeLong, 1048),
        (DslMessage::UnexpectedEscapeChar, 1065),
        (DslMessage::UnsupportedCharacter, 1066),
        (DslMessage::MissingCharacter, 1069),
    ];
    for (message, code) in expected {
        assert_eq!(message.code(), *code, "{message:?}");
        assert_eq!(message.severity(), Severity::Error);
    }
}

#[test]
fn format_with_position() {
    let formatted = DslMessage::UnexpectedDataAfterModule
        .format(Some(13.into()), &["equals(=)".to_string()]);
    assert_eq!(
        formatted,
        "DW100E:(pos 13): Unexpected data after module definition: 'equals(=)'"
    );
}

#[test]
fn format_without_position_omits_the_segment() {
    let formatted = DslMessage::OutOfData.format(None, &[]);
    assert_eq!(formatted, "DW1044E:Unexpectedly ran out of input");
}

#[test]
fn expand_substitutes_positionally() {
    let text = DslMessage::NotExpectedToken
        .expand(&["identifier".to_string(), "pipe(|)".to_string()]);
    assert_eq!(text, "Unexpected token. Expected 'identifier' but was 'pipe(|)'");
}

#[test]
fn severity_letters() {
    assert_eq!(Severity::Error.letter(), 'E');
    assert_eq!(Severity::Warning.letter(), 'W');
    assert_eq!(Severity::Info.letter(), 'I');
    assert_eq!(Severity::Error.to_string(), "error");
}

#[test]
fn render_underlines_the_offending_position() {
    let err = parse("foo -- name=value").unwrap_err();
    let rendered = err.render();
    assert!(rendered.contains("No whitespace allowed between '--' and option name"));
    assert!(rendered.contains("foo -- name=value"));
    assert!(rendered.contains('^'));
}

#[test]
fn render_at_end_of_input() {
    let err = parse("foo |").unwrap_err();
    let rendered = err.render();
    assert!(rendered.contains("Unexpectedly ran out of input"));
}
