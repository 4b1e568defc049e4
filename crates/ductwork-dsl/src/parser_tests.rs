use text_size::TextRange;

use crate::messages::DslMessage;
use crate::parser::parse;

fn check_parse_error(stream: &str, message: DslMessage, position: u32) {
    let err = parse(stream).unwrap_err();
    assert_eq!(
        err.message_code(),
        message,
        "wrong message for {stream:?}: {err}"
    );
    assert_eq!(
        err.position(),
        Some(position.into()),
        "wrong position for {stream:?}: {err}"
    );
}

#[test]
fn one_module() {
    let ast = parse("foo").unwrap();
    assert_eq!(ast.modules().len(), 1);
    assert!(ast.modules()[0].arguments().is_empty());
    assert_eq!(ast.span(), TextRange::new(0.into(), 3.into()));
    insta::assert_snapshot!(ast.stringify(), @"Stream[foo](ModuleNode:foo:0>3)");
}

#[test]
fn two_modules() {
    let ast = parse("foo | bar").unwrap();
    let names: Vec<_> = ast.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["foo", "bar"]);
    assert_eq!(ast.module("foo").unwrap().name(), "foo");
    assert_eq!(ast.module("bar").unwrap().name(), "bar");
    assert!(ast.module("baz").is_none());
    insta::assert_snapshot!(ast.stringify(), @"Stream[foo | bar](ModuleNode:foo:0>3)(ModuleNode:bar:6>9)");
}

#[test]
fn one_module_with_param() {
    let ast = parse("foo --name=value").unwrap();
    insta::assert_snapshot!(ast.stringify(), @"Stream[foo --name=value](ModuleNode:foo --name=value:0>16)");
}

#[test]
fn one_module_with_two_params() {
    let ast = parse("foo --name=value --x=y").unwrap();
    assert_eq!(ast.modules().len(), 1);

    let module = &ast.modules()[0];
    assert_eq!(module.name(), "foo");
    let args = module.arguments();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].name(), "name");
    assert_eq!(args[0].value(), "value");
    assert_eq!(args[1].name(), "x");
    assert_eq!(args[1].value(), "y");

    insta::assert_snapshot!(ast.stringify(), @"Stream[foo --name=value --x=y](ModuleNode:foo --name=value --x=y:0>22)");
}

#[test]
fn need_adjacent_tokens() {
    check_parse_error(
        "foo -- name=value",
        DslMessage::NoWhitespaceBeforeArgName,
        7,
    );
    check_parse_error(
        "foo --name =value",
        DslMessage::NoWhitespaceBeforeArgEquals,
        11,
    );
    check_parse_error(
        "foo --name= value",
        DslMessage::NoWhitespaceBeforeArgValue,
        12,
    );
}

#[test]
fn quoted_value_unescaping() {
    let stream =
        "gemfire-cq --query='Select * from /Stocks where symbol=''VMW''' --regionName=foo --foo=bar";
    let ast = parse(stream).unwrap();
    let module = ast.module("gemfire-cq").unwrap();
    let parameters = module.argument_map();
    assert_eq!(parameters.len(), 3);
    assert_eq!(
        parameters["query"],
        "Select * from /Stocks where symbol='VMW'"
    );
    assert_eq!(parameters["regionName"], "foo");
    assert_eq!(parameters["foo"], "bar");
}

#[test]
fn double_quoted_value_unescaping() {
    let ast = parse(r#"foo --x="say ""hi""""#).unwrap();
    assert_eq!(ast.modules()[0].arguments()[0].value(), r#"say "hi""#);
}

#[test]
fn only_own_quote_type_collapses() {
    let ast = parse(r#"foo --x='a""b'"#).unwrap();
    assert_eq!(ast.modules()[0].arguments()[0].value(), r#"a""b"#);
}

#[test]
fn absent_and_empty_argument_lists_are_identical() {
    let ast = parse("test").unwrap();
    let module = ast.module("test").unwrap();
    assert!(module.arguments().is_empty());
    assert!(module.argument_map().is_empty());
}

#[test]
fn duplicate_argument_names_first_wins() {
    // Duplicates are not diagnosed; the grammar records both and the map
    // keeps the first
    let ast = parse("foo --x=one --x=two").unwrap();
    let module = &ast.modules()[0];
    assert_eq!(module.arguments().len(), 2);
    let map = module.argument_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map["x"], "one");
}

#[test]
fn argument_names_are_case_preserving() {
    let ast = parse("foo --Name=a --name=b").unwrap();
    let map = ast.modules()[0].argument_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map["Name"], "a");
    assert_eq!(map["name"], "b");
}

#[test]
fn run_together_pipe_argument_fails() {
    // 'foo--x' lexes as one hyphenated identifier, so the '=' is trailing data
    check_parse_error("test | foo--x=13", DslMessage::UnexpectedDataAfterModule, 13);
}

#[test]
fn arguments_without_module_fail() {
    check_parse_error("--foo = bar", DslMessage::NotExpectedToken, 0);
}

#[test]
fn leading_pipe_fails() {
    check_parse_error("| foo", DslMessage::NotExpectedToken, 0);
}

#[test]
fn trailing_pipe_runs_out_of_input() {
    check_parse_error("foo |", DslMessage::OutOfData, 5);
}

#[test]
fn dangling_double_minus_runs_out_of_input() {
    check_parse_error("foo --", DslMessage::OutOfData, 6);
}

#[test]
fn missing_value_runs_out_of_input() {
    check_parse_error("foo --name=", DslMessage::OutOfData, 11);
}

#[test]
fn empty_input_runs_out_of_input() {
    check_parse_error("", DslMessage::OutOfData, 0);
}

#[test]
fn double_pipe_is_not_a_separator() {
    check_parse_error("foo || bar", DslMessage::UnexpectedDataAfterModule, 4);
}

#[test]
fn numeric_argument_value_is_rejected() {
    check_parse_error("foo --x=13", DslMessage::ExpectedArgumentValue, 8);
    let err = parse("foo --x=13").unwrap_err();
    assert_eq!(err.inserts(), ["13"]);
    assert_eq!(
        err.to_string(),
        "DW105E:(pos 8): Expected an argument value but was '13'"
    );
}

#[test]
fn fixed_token_value_reports_raw_text() {
    let err = parse("foo --x=|").unwrap_err();
    assert_eq!(err.message_code(), DslMessage::ExpectedArgumentValue);
    assert_eq!(err.inserts(), ["|"]);
}

#[test]
fn operator_spellings_are_valid_names() {
    // The tokenizer reserves these spellings, but the stream grammar has no
    // keywords of its own
    let ast = parse("ne | div --gt=le").unwrap();
    let names: Vec<_> = ast.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["ne", "div"]);
    let args = ast.module("div").unwrap().arguments();
    assert_eq!(args[0].name(), "gt");
    assert_eq!(args[0].value(), "le");
}

#[test]
fn symbolic_operator_is_not_a_name() {
    let err = parse("!= | foo").unwrap_err();
    assert_eq!(
        err.to_string(),
        "DW1043E:(pos 0): Unexpected token. Expected 'identifier' but was 'ne(!=)'"
    );
}

#[test]
fn reserved_word_is_not_a_name() {
    let err = parse("matches").unwrap_err();
    assert_eq!(
        err.to_string(),
        "DW1043E:(pos 0): Unexpected token. Expected 'identifier' but was 'matches(matches)'"
    );
}

#[test]
fn unexpected_token_rendering() {
    let err = parse("--foo = bar").unwrap_err();
    assert_eq!(
        err.to_string(),
        "DW1043E:(pos 0): Unexpected token. Expected 'identifier' but was 'double_minus(--)'"
    );
}

#[test]
fn unexpected_data_rendering() {
    let err = parse("test | foo--x=13").unwrap_err();
    assert_eq!(
        err.to_string(),
        "DW100E:(pos 13): Unexpected data after module definition: 'equals(=)'"
    );
}

#[test]
fn adjacency_violation_rendering() {
    let err = parse("foo -- name=value").unwrap_err();
    assert_eq!(
        err.to_string(),
        "DW101E:(pos 7): No whitespace allowed between '--' and option name"
    );
}

#[test]
fn pipes_do_not_require_surrounding_whitespace() {
    let ast = parse("foo|bar").unwrap();
    let names: Vec<_> = ast.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["foo", "bar"]);
}

#[test]
fn lexer_failures_surface_through_parse() {
    check_parse_error("foo --q='oops", DslMessage::NonTerminatingQuotedString, 8);
}

#[test]
fn argument_span_covers_the_marker() {
    let ast = parse("foo --name=value").unwrap();
    let argument = &ast.modules()[0].arguments()[0];
    assert_eq!(argument.span(), TextRange::new(4.into(), 16.into()));
}

#[test]
fn reparsing_stream_text_is_identical() {
    let ast = parse("foo --name=value --x=y | bar").unwrap();
    assert_eq!(parse(ast.stream_text()).unwrap(), ast);
}

#[test]
fn reparsing_module_slices_is_structurally_identical() {
    let ast = parse("foo --name=value --x=y | bar").unwrap();
    for module in ast.modules() {
        let slice = &ast.stream_text()[std::ops::Range::<usize>::from(module.span())];
        let reparsed = parse(slice).unwrap();
        assert_eq!(reparsed.modules().len(), 1);
        let twin = &reparsed.modules()[0];
        assert_eq!(twin.name(), module.name());
        assert_eq!(twin.argument_map(), module.argument_map());
    }
}
