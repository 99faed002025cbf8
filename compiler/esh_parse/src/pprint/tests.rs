use esh_ir::Source;
use pretty_assertions::assert_eq;

use super::*;
use crate::{parse, Config};

fn ast(code: &str) -> String {
    let tree = parse(Source::new("[test]", code), Config::default()).tree;
    let mut out = String::new();
    let _ = pprint_ast(&tree, tree.root, &mut out);
    out
}

fn parse_tree(code: &str) -> String {
    let tree = parse(Source::new("[test]", code), Config::default()).tree;
    let mut out = String::new();
    let _ = pprint_parse_tree(&tree, tree.root, &mut out);
    out
}

#[test]
fn ast_of_simple_command() {
    assert_eq!(
        ast("ls x"),
        "Chunk/Pipeline/Form
  head: Compound ctx=Cmd
    indexings: Indexing ctx=Cmd
      head: Primary ctx=Cmd ty=Bareword value=\"ls\"
  args: Compound/Indexing/Primary ty=Bareword value=\"x\"
"
    );
}

#[test]
fn ast_shows_redir_and_background() {
    assert_eq!(
        ast("a 2>&1 &"),
        "Chunk/Pipeline background=true
  forms: Form
    head: Compound ctx=Cmd
      indexings: Indexing ctx=Cmd
        head: Primary ctx=Cmd ty=Bareword value=\"a\"
    redirs: Redir mode=Write right_is_fd=true
      left: Compound/Indexing/Primary ty=Bareword value=\"2\"
      right: Compound/Indexing/Primary ty=Bareword value=\"1\"
"
    );
}

#[test]
fn ast_of_empty_chunk() {
    assert_eq!(ast(""), "Chunk\n");
}

#[test]
fn parse_tree_of_simple_command() {
    assert_eq!(
        parse_tree("ls x"),
        "Chunk/Pipeline/Form \"ls x\" 0-4
  Compound/Indexing/Primary \"ls\" 0-2
  Sep \" \" 2-3
  Compound/Indexing/Primary \"x\" 3-4
"
    );
}

#[test]
fn parse_tree_truncates_long_text() {
    assert_eq!(
        parse_tree("abcdefghijkl"),
        "Chunk/Pipeline/Form/Compound/Indexing/Primary \"abcdefg...\" 0-12\n"
    );
}
