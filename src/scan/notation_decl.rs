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
    /// [82] NotationDecl ::= '<!NOTATION' S Name S (ExternalID | PublicID) S? '>'
    /// [83] PublicID     ::= 'PUBLIC' S PubidLiteral
    /// ```
    ///
    /// Called with the `<!NOTATION` already consumed.
    ///
    /// If it starts with "PUBLIC" it is impossible to distinguish an
    /// ExternalID from a PublicID until the optional system literal is
    /// looked for, so the ExternalID parser is not reused here.
    pub(crate) fn parse_notation_decl(&mut self) -> Result<DTDToken, DTDError> {
        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "Whitespaces are required after '<!NOTATION' in a notation declaration."
            );
        }

        let mut name = String::new();
        self.parse_name(&mut name)?;

        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "Whitespaces are required after Name in a notation declaration."
            );
        }

        let mut public_id = None;
        let mut system_id = None;
        if self.stream.continues_with("SYSTEM") {
            // skip 'SYSTEM'
            self.stream.advance(6);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "Whitespaces are required after 'SYSTEM' in a notation declaration."
                );
            }
            if matches!(self.stream.current(), Some('"' | '\'')) {
                let mut buffer = String::new();
                self.parse_system_literal(&mut buffer)?;
                system_id = Some(buffer.into_boxed_str());
            } else {
                error!(
                    self,
                    NotationSystemInvalid,
                    "A system literal is missing in the notation declaration for '{}'.",
                    name
                );
                self.skip_to_decl_end();
                return Ok(DTDToken::NotationDecl {
                    name: name.into(),
                    public_id,
                    system_id,
                });
            }
        } else if self.stream.continues_with("PUBLIC") {
            // skip 'PUBLIC'
            self.stream.advance(6);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "Whitespaces are required after 'PUBLIC' in a notation declaration."
                );
            }
            if matches!(self.stream.current(), Some('"' | '\'')) {
                let mut buffer = String::new();
                self.parse_pubid_literal(&mut buffer)?;
                public_id = Some(buffer.into_boxed_str());
            } else {
                error!(
                    self,
                    NotationPublicInvalid,
                    "A public identifier literal is missing in the notation declaration for '{}'.",
                    name
                );
                self.skip_to_decl_end();
                return Ok(DTDToken::NotationDecl {
                    name: name.into(),
                    public_id,
                    system_id,
                });
            }
            self.skip_blanks()?;
            // If '>' follows the PubidLiteral this is a PublicID and the
            // declaration is complete; otherwise a SystemLiteral follows.
            if matches!(self.stream.current(), Some('"' | '\'')) {
                let mut buffer = String::new();
                self.parse_system_literal(&mut buffer)?;
                system_id = Some(buffer.into_boxed_str());
            }
        } else {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "A notation declaration must have either ExternalID or PublicID."
            );
            return Err(DTDError::DtdDeclInvalid);
        }

        self.skip_blanks()?;
        self.finish_decl(DTDToken::NotationDecl {
            name: name.into(),
            public_id,
            system_id,
        })
    }
}
