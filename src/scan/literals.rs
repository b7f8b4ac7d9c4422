use crate::{
    error::DTDError,
    scan::{
        DTDTokenizer,
        error::{error, fatal_error},
    },
};

impl DTDTokenizer<'_> {
    pub(crate) fn check_literal_start(&mut self) -> Result<char, DTDError> {
        match self.stream.current() {
            Some(c @ ('"' | '\'')) => {
                self.stream.next();
                Ok(c)
            }
            Some(c) => {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "A character '0x{:X}' is not a correct quotation mark for a literal.",
                    c as u32
                );
                Err(DTDError::DtdDeclInvalid)
            }
            None => {
                fatal_error!(self, UnexpectedEOF, "Unexpected EOF.");
                Err(DTDError::UnexpectedEOF)
            }
        }
    }

    pub(crate) fn check_literal_end(&mut self, quote: char) -> Result<(), DTDError> {
        match self.stream.current() {
            Some(c) if c == quote => {
                self.stream.next();
                Ok(())
            }
            Some(_) => {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "The literal does not close with the correct quotation mark."
                );
                Err(DTDError::DtdDeclInvalid)
            }
            None => {
                fatal_error!(self, UnexpectedEOF, "Unexpected EOF.");
                Err(DTDError::UnexpectedEOF)
            }
        }
    }

    /// ```text
    /// [9] EntityValue ::= '"' ([^%&"] | PEReference | Reference)* '"'
    ///                   | "'" ([^%&'] | PEReference | Reference)* "'"
    /// ```
    ///
    /// Parameter entity references are substituted only when the subset is
    /// external; in an internal subset the reference text becomes part of
    /// the literal. Character references are always substituted, and
    /// general entity references are kept as text.
    pub(crate) fn parse_entity_value(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        let quote = self.check_literal_start()?;
        loop {
            match self.stream.current() {
                Some(c) if c == quote => break,
                Some('%') => {
                    self.stream.next();
                    match self.stream.current() {
                        Some(c) if self.version.is_name_start_char(c) => {
                            let substitute = self.is_external();
                            self.parameter_reference(substitute, Some(&mut *buffer))?;
                        }
                        _ => buffer.push('%'),
                    }
                }
                Some('&') => {
                    self.stream.next();
                    if self.stream.current() == Some('#') {
                        self.char_reference()?;
                        // the substituted character is data, not markup
                        if let Some(c) = self.stream.current() {
                            buffer.push(c);
                            self.stream.next();
                        }
                    } else {
                        buffer.push('&');
                    }
                }
                Some('\0') => {
                    error!(
                        self,
                        NullCharacter, "A NUL character is not allowed in a literal."
                    );
                    buffer.push('\u{FFFD}');
                    self.stream.next();
                }
                Some('\r') => {
                    // If the next character is not a line feed, normalize it
                    // to a line feed. If so, treat the pair as the single
                    // line feed that follows.
                    self.stream.next();
                    if self.stream.current() != Some('\n') {
                        buffer.push('\n');
                    }
                }
                Some(c) => {
                    buffer.push(c);
                    self.stream.next();
                }
                None => {
                    fatal_error!(
                        self,
                        UnexpectedEOF, "Unexpected EOF in an entity value literal."
                    );
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }
        self.check_literal_end(quote)
    }

    /// Default attribute values follow the entity value rules, except that
    /// a literal '<' is not allowed.
    ///
    /// ```text
    /// [10] AttValue ::= '"' ([^<&"] | Reference)* '"' | "'" ([^<&'] | Reference)* "'"
    /// ```
    pub(crate) fn parse_default_value(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        let quote = self.check_literal_start()?;
        loop {
            match self.stream.current() {
                Some(c) if c == quote => break,
                Some('<') => {
                    fatal_error!(
                        self,
                        LtInAttributeValue, "'<' is not allowed in an attribute value."
                    );
                    return Err(DTDError::LtInAttributeValue);
                }
                Some('%') => {
                    self.stream.next();
                    match self.stream.current() {
                        Some(c) if self.version.is_name_start_char(c) => {
                            let substitute = self.is_external();
                            self.parameter_reference(substitute, Some(&mut *buffer))?;
                        }
                        _ => buffer.push('%'),
                    }
                }
                Some('&') => {
                    self.stream.next();
                    if self.stream.current() == Some('#') {
                        self.char_reference()?;
                        if let Some(c) = self.stream.current() {
                            buffer.push(c);
                            self.stream.next();
                        }
                    } else {
                        buffer.push('&');
                    }
                }
                Some('\0') => {
                    error!(
                        self,
                        NullCharacter, "A NUL character is not allowed in a literal."
                    );
                    buffer.push('\u{FFFD}');
                    self.stream.next();
                }
                Some('\r') => {
                    self.stream.next();
                    if self.stream.current() != Some('\n') {
                        buffer.push('\n');
                    }
                }
                Some(c) => {
                    buffer.push(c);
                    self.stream.next();
                }
                None => {
                    fatal_error!(
                        self,
                        UnexpectedEOF, "Unexpected EOF in an attribute value literal."
                    );
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }
        self.check_literal_end(quote)
    }

    /// ```text
    /// [11] SystemLiteral ::= ('"' [^"]* '"') | ("'" [^']* "'")
    /// ```
    pub(crate) fn parse_system_literal(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        let quote = self.check_literal_start()?;
        loop {
            match self.stream.current() {
                Some(c) if c == quote => break,
                Some('\0') => {
                    error!(
                        self,
                        NullCharacter, "A NUL character is not allowed in a literal."
                    );
                    buffer.push('\u{FFFD}');
                    self.stream.next();
                }
                Some('\r') => {
                    self.stream.next();
                    if self.stream.current() != Some('\n') {
                        buffer.push('\n');
                    }
                }
                Some(c) => {
                    buffer.push(c);
                    self.stream.next();
                }
                None => {
                    fatal_error!(self, UnexpectedEOF, "Unexpected EOF in a system literal.");
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }
        self.check_literal_end(quote)
    }

    /// ```text
    /// [12] PubidLiteral ::= '"' PubidChar* '"' | "'" (PubidChar - "'")* "'"
    /// ```
    ///
    /// Characters outside the PubidChar class are reported and kept, so a
    /// damaged identifier still comes through for diagnostics.
    pub(crate) fn parse_pubid_literal(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        let quote = self.check_literal_start()?;
        loop {
            match self.stream.current() {
                Some(c) if c == quote => break,
                Some('\0') => {
                    error!(
                        self,
                        NullCharacter, "A NUL character is not allowed in a literal."
                    );
                    buffer.push('\u{FFFD}');
                    self.stream.next();
                }
                Some(c) => {
                    if !self.version.is_pubid_char(c) {
                        error!(
                            self,
                            InvalidCharacter,
                            "A character '0x{:X}' is not allowed in a public identifier.",
                            c as u32
                        );
                    }
                    buffer.push(c);
                    self.stream.next();
                }
                None => {
                    fatal_error!(self, UnexpectedEOF, "Unexpected EOF in a pubid literal.");
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }
        self.check_literal_end(quote)
    }
}
