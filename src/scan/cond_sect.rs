use crate::{
    error::DTDError,
    scan::{DTDTokenizer, error::fatal_error},
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [61] conditionalSect    ::= includeSect | ignoreSect
    /// [62] includeSect        ::= '<![' S? 'INCLUDE' S? '[' extSubsetDecl ']]>'
    /// [63] ignoreSect         ::= '<![' S? 'IGNORE' S? '[' ignoreSectContents* ']]>'
    /// [64] ignoreSectContents ::= Ignore ('<![' ignoreSectContents ']]>' Ignore)*
    /// [65] Ignore             ::= Char* - (Char* ('<![' | ']]>') Char*)
    /// ```
    ///
    /// Called with the `<![` already consumed. Only legal in an external
    /// subset. An INCLUDE section raises the nesting depth and hands
    /// control back to the dispatcher; the matching `]]>` lowers it there.
    /// An IGNORE section is skipped here in full, tracking nested section
    /// openings so an inner `]]>` does not end it early.
    pub(crate) fn parse_conditional_sect(&mut self) -> Result<(), DTDError> {
        if !self.is_external() {
            fatal_error!(
                self,
                DtdInvalid,
                "Conditional sections are not allowed in an internal subset."
            );
            return Err(DTDError::DtdInvalid);
        }

        self.skip_blanks()?;

        if self.stream.continues_with("INCLUDE") {
            // skip 'INCLUDE'
            self.stream.advance(7);
            self.skip_blanks()?;
            if self.stream.current() != Some('[') {
                fatal_error!(
                    self,
                    DtdInvalid,
                    "'[' is not found after 'INCLUDE' in a conditional section."
                );
                return Err(DTDError::DtdInvalid);
            }
            // skip '['
            self.stream.next();
            self.includes += 1;
        } else if self.stream.continues_with("IGNORE") {
            // skip 'IGNORE'
            self.stream.advance(6);
            self.skip_blanks()?;
            if self.stream.current() != Some('[') {
                fatal_error!(
                    self,
                    DtdInvalid,
                    "'[' is not found after 'IGNORE' in a conditional section."
                );
                return Err(DTDError::DtdInvalid);
            }
            // skip '['
            self.stream.next();

            let mut depth = 1usize;
            while depth > 0 {
                if self.stream.continues_with("<![") {
                    self.stream.advance(3);
                    depth += 1;
                } else if self.stream.continues_with("]]>") {
                    self.stream.advance(3);
                    depth -= 1;
                } else if self.stream.current().is_none() {
                    fatal_error!(
                        self,
                        DtdInvalid, "Unexpected EOF in an 'IGNORE' conditional section."
                    );
                    return Err(DTDError::DtdInvalid);
                } else {
                    self.stream.next();
                }
            }
        } else {
            fatal_error!(
                self,
                DtdInvalid,
                "A conditional section has neither 'INCLUDE' nor 'IGNORE' parameter."
            );
            return Err(DTDError::DtdInvalid);
        }
        Ok(())
    }
}
