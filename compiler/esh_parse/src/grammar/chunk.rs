//! Chunks and pipelines.

use esh_ir::{Chunk, Form, NodeId, NodeKind, Pipeline};

use crate::chars::{is_inline_whitespace, is_pipeline_sep, starts_form, starts_pipeline};
use crate::error::ParseErrorKind;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn chunk(&mut self, id: NodeId) -> Chunk {
        let mut chunk = Chunk::default();
        self.chunk_seps(id);
        while self.peek().is_some_and(starts_pipeline) {
            let pipeline = self.parse_node(NodeKind::Pipeline(Pipeline::default()), id);
            chunk.pipelines.push(pipeline);
            if self.chunk_seps(id) == 0 {
                break;
            }
        }
        chunk
    }

    /// Pipeline separators, whitespace and comments between pipelines.
    ///
    /// Returns how many separators (`;`, `\r`, `\n`) were consumed.
    fn chunk_seps(&mut self, id: NodeId) -> usize {
        let mut seps = 0;
        loop {
            match self.peek() {
                Some(c) if is_pipeline_sep(c) => {
                    self.parse_sep(id, c);
                    seps += 1;
                }
                Some(c) if is_inline_whitespace(c) || c == '#' => self.spaces(id),
                _ => return seps,
            }
        }
    }

    pub(crate) fn pipeline(&mut self, id: NodeId) -> Pipeline {
        let mut pipeline = Pipeline::default();
        pipeline
            .forms
            .push(self.parse_node(NodeKind::Form(Form::default()), id));
        while self.parse_sep(id, '|') {
            self.spaces_and_newlines(id);
            if !self.peek().is_some_and(starts_form) {
                self.error(ParseErrorKind::ShouldBeForm);
                return pipeline;
            }
            pipeline
                .forms
                .push(self.parse_node(NodeKind::Form(Form::default()), id));
        }
        self.spaces(id);
        if self.peek_is('&') {
            self.scanner.next();
            self.add_sep(id);
            pipeline.background = true;
            self.spaces(id);
        }
        pipeline
    }
}
