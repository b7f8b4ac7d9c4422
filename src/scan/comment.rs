use crate::{
    error::DTDError,
    scan::{
        DTDTokenizer,
        error::{error, fatal_error},
    },
    token::DTDToken,
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [15] Comment ::= '<!--' ((Char - '-') | ('-' (Char - '-')))* '-->'
    /// ```
    ///
    /// Called with the `<!--` already consumed.
    pub(crate) fn parse_comment(&mut self) -> Result<DTDToken, DTDError> {
        let mut data = String::new();
        loop {
            if self.stream.continues_with("--") {
                // skip '--'
                self.stream.advance(2);
                if self.stream.current() == Some('>') {
                    self.stream.next();
                    break;
                }
                fatal_error!(
                    self,
                    CommentEndedUnexpected,
                    "Comment must not contain '--' except for the closing '-->'."
                );
                return Err(DTDError::CommentEndedUnexpected);
            }
            match self.stream.current() {
                Some('\r') => {
                    // If the next character is not a line feed, normalize it
                    // to a line feed. If so, treat the pair as the single
                    // line feed that follows.
                    self.stream.next();
                    if self.stream.current() != Some('\n') {
                        data.push('\n');
                    }
                }
                Some(c) => {
                    if !self.version.is_char(c) {
                        error!(
                            self,
                            InvalidCharacter,
                            "A character '0x{:X}' is not allowed in XML documents.",
                            c as u32
                        );
                    }
                    data.push(c);
                    self.stream.next();
                }
                None => {
                    fatal_error!(self, UnexpectedEOF, "Unexpected EOF in a comment.");
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }
        Ok(DTDToken::Comment {
            data: data.into_boxed_str(),
        })
    }
}
