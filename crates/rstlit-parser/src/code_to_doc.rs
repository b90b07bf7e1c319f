//! Code → text conversion.
//!
//! Comment blocks are uncommented into documentation paragraphs; code
//! blocks are indented into literal blocks, introduced by a `::` marker
//! when the preceding text does not already end with one.

use log::{debug, trace, warn};
use regex::Regex;
use rstlit_config::ResolvedOptions;
use rstlit_core::text::{indent_line, is_blank, is_literal_marker_line};
use rstlit_core::{Block, CodeState, Result, RstlitError, Warning, WarningKind};

use crate::blocks::BlockCollector;
use crate::marker::{strip_literal_marker, CODE_MARKER_PARAGRAPH};

/// Is the block documentation?
///
/// True when every non-blank line starts with the comment string or is a
/// bare stripped comment such as `#`. A block of blank lines counts as
/// text.
pub fn block_is_text(block: &Block, options: &ResolvedOptions) -> bool {
    block.lines.iter().all(|line| {
        is_blank(line)
            || line.starts_with(options.comment_string.as_str())
            || line.trim_end() == options.stripped_comment
    })
}

/// Converts commented source into reStructuredText with literal blocks.
///
/// Code → text never fails once constructed; every input produces output.
///
/// # Example
///
/// ```
/// use rstlit_config::ResolvedOptions;
/// use rstlit_parser::{split_lines, CodeToDoc};
///
/// let options = ResolvedOptions::default();
/// let text: String = CodeToDoc::new(split_lines("# Set x\n\nx = 1\n"), &options)
///     .unwrap()
///     .map(|block| block.text())
///     .collect();
/// assert_eq!(text, "Set x\n\n::\n\n  x = 1\n");
/// ```
#[derive(Debug)]
pub struct CodeToDoc<I> {
    blocks: BlockCollector<I>,
    options: ResolvedOptions,
    state: CodeState,
    /// Matches a bare comment line (`#`, `#  `) with its line ending
    bare_comment: Regex,
    /// The next code block needs a `::` paragraph in front of it
    pending_marker: bool,
    /// Line of a `::` that is still waiting for its code block
    dangling_marker: Option<usize>,
    warnings: Vec<Warning>,
}

impl<I> CodeToDoc<I>
where
    I: Iterator<Item = String>,
{
    pub fn new<T>(lines: T, options: &ResolvedOptions) -> Result<Self>
    where
        T: IntoIterator<IntoIter = I>,
    {
        let pattern = format!(r"^{}[ \t]*(\r?\n)?$", regex::escape(&options.stripped_comment));
        let bare_comment = Regex::new(&pattern)
            .map_err(|e| RstlitError::Config(format!("Invalid comment string: {}", e)))?;

        Ok(Self {
            blocks: BlockCollector::new(lines),
            options: options.clone(),
            state: CodeState::Header,
            bare_comment,
            pending_marker: true,
            dangling_marker: None,
            warnings: Vec::new(),
        })
    }

    pub fn state(&self) -> CodeState {
        self.state
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Run the conversion to the end, returning the text and the
    /// warnings.
    pub fn convert(mut self) -> (String, Vec<Warning>) {
        let mut output = String::new();
        for block in self.by_ref() {
            output.push_str(&block.text());
        }
        (output, self.warnings)
    }

    fn handle(&mut self, block: Block) -> Block {
        trace!("code block at line {} in state {}", block.start_line, self.state);

        if block.is_blank() {
            if self.state == CodeState::CodeBlock && self.options.strip {
                return Block::empty(block.start_line);
            }
            return block;
        }

        if block_is_text(&block, &self.options) {
            self.state = CodeState::Documentation;
            return self.documentation(block);
        }

        match self.state {
            CodeState::Header => self.header(block),
            CodeState::Documentation | CodeState::CodeBlock => {
                self.state = CodeState::CodeBlock;
                self.code_block(block)
            }
        }
    }

    /// Leading code (shebang, encoding line) goes into a comment block
    /// marked with the header string, so it does not start the documentation
    /// with a literal block.
    fn header(&mut self, block: Block) -> Block {
        debug!("leading code at line {} becomes a header block", block.start_line);
        self.state = CodeState::CodeBlock;
        self.pending_marker = false;

        if self.options.strip {
            return Block::empty(block.start_line);
        }

        let mut out = self.indent(&block);
        if let Some(first) = out.first_content() {
            out.lines[first] = format!("{}{}", self.options.header_string, out.lines[first]);
        }
        out
    }

    fn documentation(&mut self, block: Block) -> Block {
        if let Some(line) = self.dangling_marker.take() {
            self.warn(line, WarningKind::DanglingLiteralMarker);
        }

        let mut lines: Vec<String> = block.lines.iter().map(|line| self.uncomment(line)).collect();
        let header = self.options.header_string.as_str();

        if self.options.strip {
            strip_literal_marker(&mut lines, header);
            self.pending_marker = false;
        } else if let Some(last) = lines.iter().rposition(|line| !is_blank(line)) {
            let marked = is_literal_marker_line(&lines[last], header);
            self.pending_marker = !marked;
            self.dangling_marker = marked.then(|| block.line_number(last));
        }

        Block::new(block.start_line, lines)
    }

    fn code_block(&mut self, block: Block) -> Block {
        self.dangling_marker = None;
        if self.options.strip {
            return Block::empty(block.start_line);
        }

        let mut out = Block::empty(block.start_line);
        if self.pending_marker {
            debug!("inserting literal block marker before line {}", block.start_line);
            out.lines.extend(CODE_MARKER_PARAGRAPH.iter().map(|s| s.to_string()));
            self.pending_marker = false;
        }
        out.lines.extend(self.indent(&block).lines);
        out
    }

    fn indent(&self, block: &Block) -> Block {
        let lines = block
            .lines
            .iter()
            .map(|line| indent_line(line, self.options.codeindent))
            .collect();
        Block::new(block.start_line, lines)
    }

    fn uncomment(&self, line: &str) -> String {
        if let Some(caps) = self.bare_comment.captures(line) {
            return caps.get(1).map_or("", |m| m.as_str()).to_string();
        }
        match line.strip_prefix(self.options.comment_string.as_str()) {
            Some(rest) => rest.to_string(),
            None => line.to_string(),
        }
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        let warning = Warning::new(line, kind);
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

impl<I> Iterator for CodeToDoc<I>
where
    I: Iterator<Item = String>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let block = self.blocks.next()?;
        Some(self.handle(block))
    }
}
