//! Text → code conversion.
//!
//! Indented literal blocks become source code (unindented), everything
//! else becomes comments. Quoted literal blocks and doctest blocks are
//! not indented relative to their paragraph, so they stay text.

use log::{debug, trace, warn};
use rstlit_config::ResolvedOptions;
use rstlit_core::text::{indent_of, is_blank, is_literal_marker_line, line_ending, unindent_line};
use rstlit_core::{Block, Result, RstlitError, TextState, Warning, WarningKind};

use crate::blocks::BlockCollector;

/// Where a text block hands over to a literal block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeStart {
    /// No literal block follows
    None,
    /// The last non-blank line at this index ends with `::`
    AfterBlock(usize),
    /// Line `index` ends with `::` and indented code follows without a
    /// blank line
    InsideBlock(usize),
}

/// Converts reStructuredText with literal blocks into commented source.
///
/// Iterating yields one output block per consumed input block. The first
/// indentation error ends the iteration.
///
/// # Example
///
/// ```
/// use rstlit_config::ResolvedOptions;
/// use rstlit_parser::{split_lines, DocToCode};
///
/// let text = "Set x::\n\n  x = 1\n";
/// let options = ResolvedOptions::default();
/// let code: String = DocToCode::new(split_lines(text), &options)
///     .map(|block| block.unwrap().text())
///     .collect();
/// assert_eq!(code, "# Set x::\n\nx = 1\n");
/// ```
#[derive(Debug)]
pub struct DocToCode<I> {
    blocks: BlockCollector<I>,
    options: ResolvedOptions,
    state: TextState,
    /// Indentation of the paragraph that introduced the literal block
    text_indent: usize,
    /// Indentation of the first code line of the current literal block
    code_indent: Option<usize>,
    warnings: Vec<Warning>,
    failed: bool,
}

impl<I> DocToCode<I>
where
    I: Iterator<Item = String>,
{
    pub fn new<T>(lines: T, options: &ResolvedOptions) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            blocks: BlockCollector::new(lines),
            options: options.clone(),
            state: TextState::Header,
            text_indent: 0,
            code_indent: None,
            warnings: Vec::new(),
            failed: false,
        }
    }

    pub fn state(&self) -> TextState {
        self.state
    }

    /// Repairs made so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Run the conversion to the end, returning the code and the repairs.
    pub fn convert(mut self) -> Result<(String, Vec<Warning>)> {
        let mut output = String::new();
        for block in self.by_ref() {
            output.push_str(&block?.text());
        }
        Ok((output, self.warnings))
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        let warning = Warning::new(line, kind);
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn handle(&mut self, block: Block) -> Result<Option<Block>> {
        trace!("text block at line {} in state {}", block.start_line, self.state);
        match self.state {
            TextState::Header => self.header(block),
            TextState::Documentation => Ok(Some(self.documentation(block))),
            TextState::Code => self.code(block),
        }
    }

    /// A first block starting with the header string is code that was
    /// kept out of the documentation body (shebang, encoding line).
    fn header(&mut self, mut block: Block) -> Result<Option<Block>> {
        let Some(first) = block.first_content() else {
            return Ok(Some(block));
        };

        let header = self.options.header_string.clone();
        if !block.lines[first].starts_with(header.as_str()) {
            self.state = TextState::Documentation;
            return Ok(Some(self.documentation(block)));
        }

        debug!("header code block at line {}", block.start_line);
        for line in block.lines.iter_mut() {
            if let Some(rest) = line.strip_prefix(header.as_str()) {
                *line = rest.to_string();
            }
        }
        self.state = TextState::Code;
        self.unindent_code(block).map(Some)
    }

    fn documentation(&mut self, mut block: Block) -> Block {
        let start = self.find_code_start(&block);
        let mut out = Block::empty(block.start_line);

        match start {
            CodeStart::None => {
                out.lines = block.lines.iter().map(|line| self.comment(line)).collect();
            }
            CodeStart::AfterBlock(index) => {
                self.enter_code(indent_of(&block.lines[index]), block.line_number(index));
                for (i, line) in block.lines.iter().enumerate() {
                    // the blank line after the marker separates, it is not text
                    if i > index {
                        out.lines.push(line.clone());
                    } else {
                        out.lines.push(self.comment(line));
                    }
                }
            }
            CodeStart::InsideBlock(index) => {
                let code = block.split_off(index + 1);
                self.enter_code(indent_of(&block.lines[index]), block.line_number(index));
                out.lines = block.lines.iter().map(|line| self.comment(line)).collect();
                out.lines.push("\n".to_string());
                if !self.options.strip {
                    self.warn(code.start_line, WarningKind::MissingBlankLine);
                }
                self.blocks.push_back(code);
            }
        }

        if self.options.strip {
            out.lines.clear();
        }
        out
    }

    fn code(&mut self, mut block: Block) -> Result<Option<Block>> {
        let Some(first) = block.first_content() else {
            return self.unindent_code(block).map(Some);
        };

        if indent_of(&block.lines[first]) <= self.text_indent {
            debug!("literal block ends before line {}", block.line_number(first));
            self.leave_code();
            self.blocks.push_back(block);
            return Ok(None);
        }

        let dedent = (first + 1..block.len()).find(|&i| {
            let line = &block.lines[i];
            !is_blank(line) && indent_of(line) <= self.text_indent
        });

        let Some(at) = dedent else {
            return self.unindent_code(block).map(Some);
        };

        let text = block.split_off(at);
        let mut out = self.unindent_code(block)?;
        out.lines.push("\n".to_string());
        self.warn(text.start_line, WarningKind::MissingBlankLine);
        self.leave_code();
        self.blocks.push_back(text);
        Ok(Some(out))
    }

    /// Remove the code indentation from every line of a literal block.
    /// The indentation is fixed by the first non-blank line of the
    /// literal block; a non-blank line indented less is fatal.
    fn unindent_code(&mut self, block: Block) -> Result<Block> {
        if self.code_indent.is_none() {
            self.code_indent = block
                .first_content()
                .map(|i| indent_of(&block.lines[i]));
        }
        let code_indent = self.code_indent.unwrap_or(0);

        let mut out = Block::empty(block.start_line);
        for (i, line) in block.lines.iter().enumerate() {
            if !is_blank(line) {
                let found = indent_of(line);
                if found < code_indent {
                    return Err(RstlitError::Indentation {
                        line: block.line_number(i),
                        expected: code_indent,
                        found,
                        block: block.text(),
                    });
                }
            }
            out.lines.push(unindent_line(line, code_indent));
        }
        Ok(out)
    }

    fn find_code_start(&self, block: &Block) -> CodeStart {
        let Some(last) = block.last_content() else {
            return CodeStart::None;
        };
        let header = self.options.header_string.as_str();

        // only the last line of a block can be blank
        for i in 0..last {
            let line = &block.lines[i];
            if is_literal_marker_line(line, header)
                && indent_of(&block.lines[i + 1]) > indent_of(line)
            {
                return CodeStart::InsideBlock(i);
            }
        }

        if is_literal_marker_line(&block.lines[last], header) {
            CodeStart::AfterBlock(last)
        } else {
            CodeStart::None
        }
    }

    fn comment(&self, line: &str) -> String {
        if is_blank(line) {
            format!("{}{}", self.options.stripped_comment, line_ending(line))
        } else {
            format!("{}{}", self.options.comment_string, line)
        }
    }

    fn enter_code(&mut self, text_indent: usize, line: usize) {
        debug!("literal block marker at line {}", line);
        self.state = TextState::Code;
        self.text_indent = text_indent;
        self.code_indent = None;
    }

    fn leave_code(&mut self) {
        self.state = TextState::Documentation;
        self.code_indent = None;
    }
}

impl<I> Iterator for DocToCode<I>
where
    I: Iterator<Item = String>,
{
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let block = self.blocks.next()?;
            match self.handle(block) {
                Ok(Some(out)) => return Some(Ok(out)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
