use pretty_assertions::assert_eq;

use super::*;

/// Where the first error points.
#[derive(Debug, PartialEq, Eq)]
enum At<'a> {
    /// Zero-width at end of input.
    End,
    /// Covering this text.
    Text(&'a str),
}

#[track_caller]
fn assert_first_error(code: &str, at: At<'_>, message: &str) {
    let out = parse_kind(code, NodeKind::Chunk(Chunk::default()));
    let Some(first) = out.errors.first() else {
        panic!("no error for {code:?}");
    };
    assert_eq!(first.message, message, "{code:?}");
    let span = first.context.span;
    let got = if span.start == span.end && span.start as usize == code.len() {
        At::End
    } else {
        At::Text(&code[span.to_range()])
    };
    assert_eq!(got, at, "{code:?}");
}

#[test]
fn structural_errors() {
    assert_first_error("a|", At::End, "should be form");
    assert_first_error("a & &", At::Text("&"), "unexpected rune '&'");
    assert_first_error(
        "a >",
        At::End,
        "should be a composite term representing filename",
    );
    assert_first_error(
        "a >&",
        At::End,
        "should be a composite term representing fd",
    );
    assert_first_error(
        "a >& 2",
        At::Text(" "),
        "should be a composite term representing fd",
    );
    assert_first_error("a (", At::End, "should be ')'");
    assert_first_error("a [", At::End, "should be ']'");
    assert_first_error("a {", At::End, "should be ',' or '}'");
    assert_first_error("a { ", At::End, "should be '}'");
    assert_first_error("a $a[0}", At::Text("}"), "should be ']'");
    assert_first_error("a {|x echo}", At::Text("}"), "should be '|'");
    assert_first_error("a ^", At::End, "should be newline");
}

#[test]
fn unassigned_code_point_ends_a_bareword() {
    assert_first_error(
        "echo a\u{378}b",
        At::Text("\u{378}"),
        "unexpected rune '\\u{378}'",
    );
}

#[test]
fn bad_redir_sign() {
    assert_first_error(
        "a >>>b",
        At::Text(">>>"),
        "bad redir sign, should be '<', '>', '>>' or '<>'",
    );
    let out = parse_kind("a >>>b", NodeKind::Chunk(Chunk::default()));
    let (_, redir) = out
        .tree
        .arena
        .iter()
        .find(|(_, n)| n.kind.as_redir().is_some())
        .expect("redir node");
    assert_eq!(redir.kind.as_redir().and_then(|r| r.mode), None);
}

#[test]
fn string_errors() {
    assert_first_error("'a", At::End, "string not terminated");
    assert_first_error("\"a", At::End, "string not terminated");
    assert_first_error(
        "a \"\\^\t\"",
        At::Text("\t"),
        "invalid control sequence, should be a codepoint between 0x3F and 0x5F",
    );
    assert_first_error(
        "a \"\\xQQ\"",
        At::Text("Q"),
        "invalid escape sequence, should be hex digit",
    );
    assert_first_error(
        "a \"\\1ab\"",
        At::Text("a"),
        "invalid escape sequence, should be octal digit",
    );
    assert_first_error(
        "a \"\\400\"",
        At::Text("\\400"),
        "invalid octal escape sequence, should be below 256",
    );
    assert_first_error("a \"\\i\"", At::Text("i"), "invalid escape sequence");
}

#[test]
fn variable_name_errors() {
    assert_first_error("$", At::End, "should be variable name");
    assert_first_error("a $,", At::Text(","), "should be variable name");
}

#[test]
fn list_map_mixing() {
    assert_first_error(
        "a [a &k=v]",
        At::End,
        "cannot contain both list elements and map pairs",
    );
}

#[test]
fn assignment_errors() {
    assert_first_error("a=b=c", At::Text("b=c"), "chained assignment is not allowed");
    assert_first_error("{a,$b}=x", At::Text("{a,$b}"), "should be variable name");
}

#[test]
fn stray_closers() {
    for code in [")", "]", "}"] {
        let out = parse_kind(code, NodeKind::Chunk(Chunk::default()));
        assert_eq!(out.errors.len(), 1, "{code:?}");
        let message = format!("unexpected rune '{code}'");
        assert_eq!(out.errors[0].message, message);
        assert!(!out.is_partial(), "{code:?}");
    }
}

#[test]
fn partial_inputs() {
    for code in ["\"a", "a |", "a (", "a [", "a {", "$", "a ^", "echo [1 2"] {
        let out = parse_kind(code, NodeKind::Chunk(Chunk::default()));
        assert!(out.has_errors(), "{code:?}");
        assert!(out.is_partial(), "{code:?} should be partial");
        assert!(out.error().expect("errors").all_partial());
    }
    for code in [")", "a \"\\i\"", "a [a &k=v] b"] {
        let out = parse_kind(code, NodeKind::Chunk(Chunk::default()));
        assert!(out.has_errors(), "{code:?}");
        assert!(!out.is_partial(), "{code:?} should not be partial");
    }
}

#[test]
fn errors_accumulate() {
    let out = parse_kind("a \"\\i\" \"\\xZ\" )", NodeKind::Chunk(Chunk::default()));
    let messages: Vec<_> = out.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "invalid escape sequence",
            "invalid escape sequence, should be hex digit",
            "unexpected rune ')'",
        ]
    );
}

#[test]
fn error_display() {
    let out = parse_kind("echo [1 2", NodeKind::Chunk(Chunk::default()));
    let errors = out.error().expect("errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.to_string(),
        "parse error: 9-9 in [test]: should be ']'"
    );

    let out = parse_kind("a \"\\i\" )", NodeKind::Chunk(Chunk::default()));
    assert_eq!(
        out.error().expect("errors").to_string(),
        "multiple parse errors in [test]: 4-5: invalid escape sequence; 7-8: unexpected rune ')'"
    );
}

#[test]
fn values_survive_errors() {
    let out = parse_kind("echo \"a\\ib\"", NodeKind::Chunk(Chunk::default()));
    assert_eq!(out.errors.len(), 1);
    let tree = &out.tree;
    let f = only_form(tree);
    assert_eq!(head_primary(tree, f.args[0]).value, b"ab");
}
