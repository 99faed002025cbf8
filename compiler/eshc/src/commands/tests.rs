use esh_diagnostic::emitter::{ColorMode, TerminalEmitter};
use pretty_assertions::assert_eq;

use super::*;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn input_from_args() {
    assert_eq!(
        Input::from_args(&args(&["-c", "echo hi"])),
        Some(Input::Inline("echo hi".to_string()))
    );
    assert_eq!(
        Input::from_args(&args(&["a.esh"])),
        Some(Input::File("a.esh".to_string()))
    );
    assert_eq!(Input::from_args(&args(&["-c"])), None);
    assert_eq!(Input::from_args(&args(&[])), None);
}

#[test]
fn color_mode_option_is_removed() {
    let mut list = args(&["esh", "--color=never", "check", "a.esh"]);
    assert_eq!(take_color_mode(&mut list).ok(), Some(ColorMode::Never));
    assert_eq!(list, args(&["esh", "check", "a.esh"]));

    let mut list = args(&["esh", "--color=sometimes"]);
    assert!(matches!(
        take_color_mode(&mut list),
        Err(CliError::BadColorMode(mode)) if mode == "sometimes"
    ));
}

#[test]
fn missing_file() {
    let err = read_source("/nonexistent/dir/x.esh").err();
    assert!(matches!(err, Some(CliError::NotFound(_))));
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("cannot find file '/nonexistent/dir/x.esh'".to_string())
    );
}

#[test]
fn dump_ast_of_inline_code() {
    let src = Input::Inline("echo hi".to_string()).load().ok();
    let Some(src) = src else {
        panic!("inline input always loads");
    };
    assert_eq!(src.name, "[-c]");
    let (text, errors) = dump(src, DumpKind::Ast);
    assert!(errors.is_none());
    assert!(text.starts_with("Chunk/Pipeline/Form\n"));
    assert!(text.contains("value=\"hi\""));
}

#[test]
fn dump_keeps_tree_on_error() {
    let (text, errors) = dump(esh_ir::Source::new("[-c]", "a )"), DumpKind::ParseTree);
    assert_eq!(errors.map(|e| e.len()), Some(1));
    assert!(text.starts_with("Chunk/Pipeline/Form \"a \" 0-2\n"));
}

#[test]
fn quote_words() {
    assert_eq!(
        quote_args(&args(&["echo", "a b", "it's", "x\ny"])),
        "echo 'a b' 'it''s' \"x\\ny\""
    );
}

#[test]
fn check_reports_unreadable_files() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let failed = check_files(&args(&["/nonexistent/x.esh"]), &mut emitter);
    assert_eq!(failed, 1);
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert_eq!(out, "error: cannot find file '/nonexistent/x.esh'\n");
}
