//! Parse driver: input stream to tree, then handoff to a consumer.
//!
//! The driver builds the stream, lexer output, token buffer and parser for one call,
//! runs the entry production and inspects the error tally. A clean parse is optionally
//! dumped to an output sink and handed to the consumer; a failed parse is returned as
//! [`Error::SyntaxError`] and the consumer is never invoked.

use std::io;

use crate::input::InputStream;
use crate::parser::{self, DEFAULT_RECURSION_FUEL, Parser, TokenBuffer};
use crate::tree::{SyntaxTree, TreeConsumer};
use crate::{Error, Result};

/// Output format of the tree dump written before the consumer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeFormat {
    /// `tree: \n<rendered tree>\n\n`
    #[default]
    Text,
    /// Pretty-printed JSON of the tree, followed by a newline.
    Json,
}

/// Configured front end. Holds no state between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    recursion_fuel: Option<u32>,
    dump: Option<TreeFormat>,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    pub fn new() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            dump: None,
        }
    }

    /// Maximum nesting depth. `None` disables the guard.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Tree dump written to the output sink on success. `None` writes nothing.
    pub fn with_tree_dump(mut self, format: Option<TreeFormat>) -> Self {
        self.dump = format;
        self
    }

    /// Parses text without dumping or consuming.
    pub fn parse_str(&self, source: &str) -> Result<SyntaxTree> {
        self.parse_stream(&InputStream::from_text(source)?)
    }

    /// Parses a prepared stream. A nonzero error tally becomes [`Error::SyntaxError`].
    pub fn parse_stream(&self, input: &InputStream<'_>) -> Result<SyntaxTree> {
        let source = input.as_str();
        let tokens = TokenBuffer::lex(source);
        let parser = Parser::new(source, tokens).with_recursion_fuel(self.recursion_fuel);
        let parse = parser::parse_with_parser(parser)?;

        let tally = parse.error_count();
        if tally > 0 {
            tracing::debug!(tally, "parse failed");
            let (_, diagnostics) = parse.into_parts();
            return Err(Error::SyntaxError(diagnostics));
        }

        let (root, _) = parse.into_parts();
        Ok(SyntaxTree::new(root))
    }

    /// Parses `source`; on success writes the dump to `out`, then invokes `consumer`
    /// with the root.
    pub fn run<C>(
        &self,
        source: &str,
        out: &mut impl io::Write,
        consumer: &mut C,
    ) -> Result<SyntaxTree>
    where
        C: TreeConsumer + ?Sized,
    {
        self.run_stream(&InputStream::from_text(source)?, out, consumer)
    }

    /// Byte-level entry point. The buffer is read as Latin-1; an absent buffer is
    /// [`Error::InvalidInput`].
    pub fn run_bytes<C>(
        &self,
        bytes: Option<&[u8]>,
        out: &mut impl io::Write,
        consumer: &mut C,
    ) -> Result<SyntaxTree>
    where
        C: TreeConsumer + ?Sized,
    {
        self.run_stream(&InputStream::from_raw(bytes)?, out, consumer)
    }

    pub fn run_stream<C>(
        &self,
        input: &InputStream<'_>,
        out: &mut impl io::Write,
        consumer: &mut C,
    ) -> Result<SyntaxTree>
    where
        C: TreeConsumer + ?Sized,
    {
        let tree = self.parse_stream(input)?;
        self.write_dump(&tree, out)?;
        tracing::debug!("handing tree to consumer");
        consumer.consume(tree.root());
        Ok(tree)
    }

    fn write_dump(&self, tree: &SyntaxTree, out: &mut impl io::Write) -> Result<()> {
        match self.dump {
            None => {}
            Some(TreeFormat::Text) => write!(out, "tree: \n{}\n\n", tree.render())?,
            Some(TreeFormat::Json) => {
                let json = tree.to_json().map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
