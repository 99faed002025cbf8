//! The `parse` and `tree` commands: print a tree for one input.

use esh_diagnostic::Errors;
use esh_ir::Source;
use esh_parse::{parse, pprint_ast, pprint_parse_tree, Config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpKind {
    /// Payload fields, via `pprint_ast`.
    Ast,
    /// Every node with its text, via `pprint_parse_tree`.
    ParseTree,
}

/// Parse `src` and render its tree. The tree is printed even when there
/// are errors; they come back separately.
pub fn dump(src: Source, kind: DumpKind) -> (String, Option<Errors>) {
    let output = parse(src, Config::default());
    let errors = output.error();
    let tree = &output.tree;
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = match kind {
        DumpKind::Ast => pprint_ast(tree, tree.root, &mut text),
        DumpKind::ParseTree => pprint_parse_tree(tree, tree.root, &mut text),
    };
    (text, errors)
}
