//! Block collection.
//!
//! Groups a line source into blank-line separated paragraphs. Tabs are
//! expanded as lines come in, so every later indentation measurement
//! sees spaces only.

use rstlit_core::text::{expand_tabs, is_blank};
use rstlit_core::Block;

/// Split text into lines, keeping line terminators.
///
/// # Example
///
/// ```
/// use rstlit_parser::split_lines;
/// let lines: Vec<String> = split_lines("a\n\nb").collect();
/// assert_eq!(lines, vec!["a\n", "\n", "b"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_inclusive('\n').map(str::to_string)
}

/// Lazily groups lines into [`Block`]s.
///
/// A block holds every line up to and including the first blank line.
/// The trailing lines of the input form a final block when there are
/// any. One block can be pushed back and is returned by the next call to
/// `next`.
#[derive(Debug)]
pub struct BlockCollector<I> {
    lines: I,
    pushed_back: Option<Block>,
    line_number: usize,
}

impl<I> BlockCollector<I>
where
    I: Iterator<Item = String>,
{
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
            pushed_back: None,
            line_number: 1,
        }
    }

    /// Return a block to the front of the stream.
    ///
    /// Only one block can be pending; converters push back at most the
    /// block they are currently holding.
    pub fn push_back(&mut self, block: Block) {
        debug_assert!(self.pushed_back.is_none(), "push-back slot already taken");
        self.pushed_back = Some(block);
    }

    fn collect_block(&mut self) -> Option<Block> {
        let mut block = Block::empty(self.line_number);

        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = expand_tabs(&line).into_owned();
            let blank = is_blank(&line);
            block.lines.push(line);
            if blank {
                return Some(block);
            }
        }

        if block.is_empty() {
            None
        } else {
            Some(block)
        }
    }
}

impl<I> Iterator for BlockCollector<I>
where
    I: Iterator<Item = String>,
{
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        match self.pushed_back.take() {
            Some(block) => Some(block),
            None => self.collect_block(),
        }
    }
}
