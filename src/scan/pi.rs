use crate::{
    ENCODING_NAME_LIMIT_LENGTH, XML_VERSION_NUM_LIMIT_LENGTH,
    error::DTDError,
    scan::{
        DTDTokenizer,
        error::{error, fatal_error},
    },
    token::DTDToken,
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [16] PI       ::= '<?' PITarget (S (Char* - (Char* '?>' Char*)))? '?>'
    /// [17] PITarget ::= Name - (('X' | 'x') ('M' | 'm') ('L' | 'l'))
    /// ```
    ///
    /// A target of `xml` at the head of an external subset introduces a
    /// text declaration instead.
    pub(crate) fn parse_pi(&mut self) -> Result<DTDToken, DTDError> {
        let mut target = String::new();
        self.parse_name(&mut target)?;

        if self.is_external() && target.eq_ignore_ascii_case("xml") {
            return self.parse_text_decl();
        }

        let s = self.skip_whitespaces();
        if self.stream.continues_with("?>") {
            // skip '?>'
            self.stream.advance(2);
            return Ok(DTDToken::ProcessingInstruction {
                target: target.into(),
                data: None,
            });
        }

        if s == 0 {
            fatal_error!(
                self,
                InvalidProcessingInstruction,
                "Whitespaces are required between PI target and data."
            );
        }

        let mut data = String::new();
        loop {
            if self.stream.continues_with("?>") {
                // skip '?>'
                self.stream.advance(2);
                break;
            }
            match self.stream.current() {
                Some('\r') => {
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
                    fatal_error!(
                        self,
                        UnexpectedEOF, "Unexpected EOF in a processing instruction."
                    );
                    return Err(DTDError::UnexpectedEOF);
                }
            }
        }

        Ok(DTDToken::ProcessingInstruction {
            target: target.into(),
            data: Some(data.into_boxed_str()),
        })
    }

    /// ```text
    /// [77] TextDecl     ::= '<?xml' VersionInfo? EncodingDecl? S? '?>'
    /// [24] VersionInfo  ::= S 'version' Eq ("'" VersionNum "'" | '"' VersionNum '"')
    /// [80] EncodingDecl ::= S 'encoding' Eq ('"' EncName '"' | "'" EncName "'")
    /// ```
    ///
    /// Called with the `<?xml` target already consumed. Both the version
    /// and the encoding are optional here; the tokenizer records them
    /// without acting on them, since decoding happens below this layer.
    pub(crate) fn parse_text_decl(&mut self) -> Result<DTDToken, DTDError> {
        let mut s = self.skip_whitespaces();

        let mut version = None;
        if self.stream.continues_with("version") {
            if s == 0 {
                fatal_error!(
                    self,
                    InvalidProcessingInstruction,
                    "Whitespaces are required before 'version' in a text declaration."
                );
            }
            // skip 'version'
            self.stream.advance(7);
            self.parse_eq()?;

            let quote = self.check_literal_start()?;
            let mut buffer = String::new();
            while let Some(c) = self
                .stream
                .current()
                .filter(|&c| c.is_ascii_digit() || c == '.')
            {
                buffer.push(c);
                self.stream.next();
                if buffer.len() > XML_VERSION_NUM_LIMIT_LENGTH {
                    fatal_error!(
                        self,
                        InvalidProcessingInstruction,
                        "The version number in a text declaration is too long."
                    );
                    return Err(DTDError::InvalidProcessingInstruction);
                }
            }
            self.check_literal_end(quote)?;
            if buffer.is_empty() {
                fatal_error!(
                    self,
                    InvalidProcessingInstruction,
                    "The version number in a text declaration is empty."
                );
                return Err(DTDError::InvalidProcessingInstruction);
            }
            version = Some(buffer.into_boxed_str());
            s = self.skip_whitespaces();
        }

        let mut encoding = None;
        if self.stream.continues_with("encoding") {
            if s == 0 {
                fatal_error!(
                    self,
                    InvalidProcessingInstruction,
                    "Whitespaces are required before 'encoding' in a text declaration."
                );
            }
            // skip 'encoding'
            self.stream.advance(8);
            self.parse_eq()?;

            let quote = self.check_literal_start()?;
            let mut buffer = String::new();
            match self.stream.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    buffer.push(c);
                    self.stream.next();
                }
                _ => {
                    fatal_error!(
                        self,
                        InvalidProcessingInstruction,
                        "An encoding name must start with an ASCII letter."
                    );
                    return Err(DTDError::InvalidProcessingInstruction);
                }
            }
            while let Some(c) = self
                .stream
                .current()
                .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            {
                buffer.push(c);
                self.stream.next();
                if buffer.len() > ENCODING_NAME_LIMIT_LENGTH {
                    fatal_error!(
                        self,
                        InvalidProcessingInstruction,
                        "The encoding name in a text declaration is too long."
                    );
                    return Err(DTDError::InvalidProcessingInstruction);
                }
            }
            self.check_literal_end(quote)?;
            encoding = Some(buffer.into_boxed_str());
            self.skip_whitespaces();
        }

        if !self.stream.continues_with("?>") {
            fatal_error!(
                self,
                InvalidProcessingInstruction,
                "A text declaration is not closed with '?>'."
            );
            return Err(DTDError::InvalidProcessingInstruction);
        }
        // skip '?>'
        self.stream.advance(2);

        Ok(DTDToken::TextDecl { version, encoding })
    }

    /// ```text
    /// [25] Eq ::= S? '=' S?
    /// ```
    fn parse_eq(&mut self) -> Result<(), DTDError> {
        self.skip_whitespaces();
        if self.stream.current() != Some('=') {
            fatal_error!(
                self,
                InvalidProcessingInstruction,
                "'=' is required between an attribute name and its value."
            );
            return Err(DTDError::InvalidProcessingInstruction);
        }
        self.stream.next();
        self.skip_whitespaces();
        Ok(())
    }
}
