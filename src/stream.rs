//! The buffered character stream the declaration scanner reads from.

use crate::source::SourceCursor;

/// A character cursor layered over a [`SourceCursor`], with in-place
/// splicing for entity expansion.
///
/// Every character consumed from the wrapped source is absorbed into a
/// growable buffer before the head moves past it, so the stream can step
/// backwards and can replace a just-read reference with its replacement
/// text while the original source span stays recoverable. Splices rewrite
/// the buffer only; the span reported by [`content`](IntermediateStream::content)
/// is always the unexpanded source text.
pub struct IntermediateStream<'a> {
    source: &'a mut dyn SourceCursor,
    buffer: Vec<char>,
    /// Read position in `buffer`. Always `head <= buffer.len()`; characters
    /// below `head` have been read.
    head: usize,
    /// Insertion point of the wrapped source when this stream was created.
    start: usize,
    /// Insertion point just past the furthest source character absorbed
    /// into `buffer`.
    end: usize,
    line: usize,
    column: usize,
}

impl<'a> IntermediateStream<'a> {
    pub fn new(source: &'a mut dyn SourceCursor) -> Self {
        let start = source.insertion_point();
        Self {
            source,
            buffer: vec![],
            head: 0,
            start,
            end: start,
            line: 1,
            column: 1,
        }
    }

    /// The character at the head, or `None` at end of input.
    ///
    /// When the head sits at the buffer boundary this peeks the wrapped
    /// source without absorbing the character.
    pub fn current(&self) -> Option<char> {
        if self.head < self.buffer.len() {
            Some(self.buffer[self.head])
        } else {
            self.source.current()
        }
    }

    /// Advance one character and return the new current character.
    ///
    /// At the buffer boundary the source character is first absorbed into
    /// the buffer and the wrapped source advances, so the full sequence of
    /// source characters read so far is retained for back-steps and
    /// splices.
    pub fn next(&mut self) -> Option<char> {
        if self.head == self.buffer.len() {
            let c = self.source.current()?;
            self.buffer.push(c);
            self.source.advance();
            self.end = self.source.insertion_point();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.head += 1;
        self.current()
    }

    /// Step one character back and return the new current character.
    ///
    /// Only legal while at least one character has been read.
    pub fn previous(&mut self) -> Option<char> {
        debug_assert!(self.head > 0);
        self.head -= 1;
        self.current()
    }

    /// Advance `n` characters.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.next();
        }
    }

    /// Replace the last `remove` characters before the head with `text` and
    /// move the head to the start of the insertion.
    ///
    /// This is how a just-consumed entity reference is rerouted through its
    /// replacement text: the reference characters are still the tail of the
    /// read buffer, so removing them and resuming at the splice point makes
    /// the expansion transparent to the scanner.
    pub fn push(&mut self, remove: usize, text: &str) {
        debug_assert!(remove <= self.head);
        let splice_start = self.head - remove;
        self.buffer.splice(splice_start..self.head, text.chars());
        self.head = splice_start;
    }

    /// Check whether the stream continues with `word` without moving the
    /// head.
    ///
    /// At the buffer boundary this delegates to the wrapped source's peek,
    /// which does not consume; mid-buffer it walks forward comparing
    /// characters and restores the head afterwards.
    pub fn continues_with(&mut self, word: &str) -> bool {
        if self.head == self.buffer.len() {
            return self.source.continues_with(word, false);
        }
        let saved = self.head;
        let mut matched = true;
        for c in word.chars() {
            if self.current() != Some(c) {
                matched = false;
                break;
            }
            self.next();
        }
        self.head = saved;
        matched
    }

    /// The unexpanded source text consumed through this stream so far.
    pub fn content(&self) -> String {
        self.source.copy(self.start, self.end)
    }

    /// Line of the furthest source character absorbed so far. 1-origin.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the furthest source character absorbed so far. 1-origin.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Insertion point just past the furthest source character absorbed so
    /// far.
    pub fn source_offset(&self) -> usize {
        self.end
    }
}
