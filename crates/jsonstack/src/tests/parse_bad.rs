use alloc::string::{String, ToString};
use core::fmt::Write;

use rstest::rstest;

use crate::{ParseState, SyntaxError, parse};

fn unexpected(token: &str, state: ParseState) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        token: token.to_string(),
        state,
    }
}

#[rstest]
#[case("", SyntaxError::UnexpectedEndOfInput { state: ParseState::Go })]
#[case("   \n\t", SyntaxError::UnexpectedEndOfInput { state: ParseState::Go })]
#[case("tru", SyntaxError::InvalidToken { state: ParseState::Go })]
#[case("-", SyntaxError::InvalidToken { state: ParseState::Go })]
#[case("+1", SyntaxError::InvalidToken { state: ParseState::Go })]
#[case("'a'", SyntaxError::InvalidToken { state: ParseState::Go })]
#[case("123abc", SyntaxError::TrailingCharacters)]
#[case("truex", SyntaxError::TrailingCharacters)]
#[case("{} x", SyntaxError::TrailingCharacters)]
#[case("1 2", unexpected("number `2`", ParseState::Ok))]
#[case("[] []", unexpected("`[`", ParseState::Ok))]
#[case("]", unexpected("`]`", ParseState::Go))]
#[case(":", unexpected("`:`", ParseState::Go))]
#[case(",", unexpected("`,`", ParseState::Go))]
#[case("[1 2]", unexpected("number `2`", ParseState::AComma))]
#[case("[1,]", unexpected("`]`", ParseState::AValue))]
#[case("[,1]", unexpected("`,`", ParseState::FirstAValue))]
#[case("[1}", unexpected("`}`", ParseState::AComma))]
#[case("{\"a\" 1}", unexpected("number `1`", ParseState::Colon))]
#[case("{\"a\":}", unexpected("`}`", ParseState::OValue))]
#[case("{\"a\":1,}", unexpected("`}`", ParseState::OKey))]
#[case("{\"a\":1]", unexpected("`]`", ParseState::OComma))]
#[case("{\"a\":1 \"b\":2}", unexpected("string \"b\"", ParseState::OComma))]
#[case("{1:2}", unexpected("number `1`", ParseState::FirstOKey))]
#[case("{null:2}", unexpected("`null`", ParseState::FirstOKey))]
#[case("{[]:2}", unexpected("`[`", ParseState::FirstOKey))]
#[case("{\"a\"::1}", unexpected("`:`", ParseState::OValue))]
#[case("[", SyntaxError::UnexpectedEndOfInput { state: ParseState::FirstAValue })]
#[case("{", SyntaxError::UnexpectedEndOfInput { state: ParseState::FirstOKey })]
#[case("{\"a\"", SyntaxError::UnexpectedEndOfInput { state: ParseState::Colon })]
#[case("{\"a\":", SyntaxError::UnexpectedEndOfInput { state: ParseState::OValue })]
#[case("{\"a\":1", SyntaxError::UnexpectedEndOfInput { state: ParseState::OComma })]
#[case("{\"a\":1,", SyntaxError::UnexpectedEndOfInput { state: ParseState::OKey })]
#[case("[1,", SyntaxError::UnexpectedEndOfInput { state: ParseState::AValue })]
#[case("[[]", SyntaxError::UnexpectedEndOfInput { state: ParseState::AComma })]
#[case("[\"open", SyntaxError::InvalidToken { state: ParseState::FirstAValue })]
#[case("[\"a\tb\"]", SyntaxError::InvalidToken { state: ParseState::FirstAValue })]
#[case("[\"\\x\"]", SyntaxError::InvalidToken { state: ParseState::FirstAValue })]
#[case("{\"a\":1,\"a\":2}", SyntaxError::DuplicateKey("a".into()))]
#[case("[{\"k\":[],\"k\":[]}]", SyntaxError::DuplicateKey("k".into()))]
fn rejected(#[case] input: &str, #[case] expected: SyntaxError) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind(), &expected, "input: {input:?}");
}

#[test]
fn error_messages() {
    let inputs = [
        "123abc",
        "tru",
        "",
        "[1 2]",
        r#"{"a":1,"a":2}"#,
        r#"{"a" 1}"#,
        "[1,]",
        r#"{"a":1}}"#,
        "[1, 2",
        r#"{"a":"unterminated}"#,
        "[}",
        "{1:2}",
        r#"{"a":1,}"#,
        r#""a" "b""#,
        r#"{"a"}"#,
    ];

    let mut rendered = String::new();
    for input in inputs {
        let err = parse(input).unwrap_err();
        writeln!(rendered, "[{input}] {err}").unwrap();
    }

    insta::assert_snapshot!(rendered, @r#"
    [123abc] trailing characters after value near "abc" at 1:4
    [tru] no valid token in state go near "tru" at 1:1
    [] unexpected end of input in state go near "" at 1:1
    [[1 2]] unexpected number `2` in state acomma near "2]" at 1:4
    [{"a":1,"a":2}] duplicate key "a" near ":2}" at 1:11
    [{"a" 1}] unexpected number `1` in state colon near "1}" at 1:6
    [[1,]] unexpected `]` in state avalue near "]" at 1:4
    [{"a":1}}] unexpected `}` in state ok near "}" at 1:8
    [[1, 2] unexpected end of input in state acomma near "" at 1:6
    [{"a":"unterminated}] no valid token in state ovalue near "\"unterminat" at 1:6
    [[}] unexpected `}` in state firstavalue near "}" at 1:2
    [{1:2}] unexpected number `1` in state firstokey near "1:2}" at 1:2
    [{"a":1,}] unexpected `}` in state okey near "}" at 1:8
    ["a" "b"] unexpected string "b" in state ok near "\"b\"" at 1:5
    [{"a"}] unexpected `}` in state colon near "}" at 1:5
    "#);
}
