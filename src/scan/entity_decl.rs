use crate::{
    error::DTDError,
    scan::{DTDTokenizer, error::fatal_error},
    token::DTDToken,
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [70] EntityDecl ::= GEDecl | PEDecl
    /// [71] GEDecl     ::= '<!ENTITY' S Name S EntityDef S? '>'
    /// [72] PEDecl     ::= '<!ENTITY' S '%' S Name S PEDef S? '>'
    /// [73] EntityDef  ::= EntityValue | (ExternalID NDataDecl?)
    /// [74] PEDef      ::= EntityValue | ExternalID
    /// [76] NDataDecl  ::= S 'NDATA' S Name
    /// ```
    ///
    /// Called with the `<!ENTITY` already consumed.
    pub(crate) fn parse_entity_decl(&mut self) -> Result<DTDToken, DTDError> {
        let mut s = self.skip_blanks()?;
        let mut parameter = false;
        if self.stream.current() == Some('%') {
            // A '%' followed by a name would have been expanded as a
            // reference by skip_blanks, so this one marks a parameter
            // entity declaration.
            if s == 0 {
                fatal_error!(
                    self,
                    DtdEntityInvalid,
                    "Whitespaces are required before '%' in a parameter entity declaration."
                );
            }
            parameter = true;
            // skip '%'
            self.stream.next();
            s = self.skip_blanks()?;
        }

        if s == 0 {
            fatal_error!(
                self,
                DtdEntityInvalid,
                "Whitespaces are required before Name in an entity declaration."
            );
        }

        let mut name = String::new();
        self.parse_name(&mut name)?;

        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdEntityInvalid,
                "Whitespaces are required after Name in an entity declaration."
            );
        }

        let mut external = false;
        let mut public_id = None;
        let mut system_id = None;
        let mut value = None;
        let mut notation = None;
        if matches!(self.stream.current(), Some('"' | '\'')) {
            let mut buffer = String::new();
            self.parse_entity_value(&mut buffer)?;
            value = Some(buffer.into_boxed_str());
        } else if self.stream.continues_with("SYSTEM") || self.stream.continues_with("PUBLIC") {
            external = true;
            self.parse_external_id(&mut public_id, &mut system_id)?;

            // If this is a general entity declaration, NDataDecl may follow.
            // A parameter entity declaration must continue with '>'.
            let s = self.skip_blanks()?;
            if !parameter && self.stream.continues_with("NDATA") {
                if s == 0 {
                    fatal_error!(
                        self,
                        DtdEntityInvalid,
                        "Whitespaces are required between ExternalID and NDataDecl."
                    );
                }
                // skip 'NDATA'
                self.stream.advance(5);
                if self.skip_blanks()? == 0 {
                    fatal_error!(
                        self,
                        DtdEntityInvalid,
                        "Whitespaces are required after 'NDATA' in an entity declaration."
                    );
                }
                let mut ndata = String::new();
                self.parse_name(&mut ndata)?;
                notation = Some(ndata.into_boxed_str());
                self.skip_blanks()?;
            }
        } else if self.stream.current().is_none() {
            fatal_error!(self, UnexpectedEOF, "Unexpected EOF in an entity declaration.");
            return Err(DTDError::UnexpectedEOF);
        } else {
            fatal_error!(
                self,
                DtdEntityInvalid,
                "Neither EntityValue nor ExternalID is found in an entity declaration."
            );
            return Err(DTDError::DtdEntityInvalid);
        }

        self.skip_blanks()?;
        self.finish_decl(DTDToken::EntityDecl {
            name: name.into(),
            parameter,
            external,
            public_id,
            system_id,
            value,
            notation,
        })
    }

    /// ```text
    /// [75] ExternalID ::= 'SYSTEM' S SystemLiteral
    ///                     | 'PUBLIC' S PubidLiteral S SystemLiteral
    /// ```
    pub(crate) fn parse_external_id(
        &mut self,
        public_id: &mut Option<Box<str>>,
        system_id: &mut Option<Box<str>>,
    ) -> Result<(), DTDError> {
        if self.stream.continues_with("SYSTEM") {
            // skip 'SYSTEM'
            self.stream.advance(6);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "Whitespaces are required after 'SYSTEM' in ExternalID."
                );
            }
            let mut buffer = String::new();
            self.parse_system_literal(&mut buffer)?;
            *system_id = Some(buffer.into_boxed_str());
        } else if self.stream.continues_with("PUBLIC") {
            // skip 'PUBLIC'
            self.stream.advance(6);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "Whitespaces are required after 'PUBLIC' in ExternalID."
                );
            }
            let mut pubid = String::new();
            self.parse_pubid_literal(&mut pubid)?;
            *public_id = Some(pubid.into_boxed_str());
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdDeclInvalid,
                    "Whitespaces are required after PubidLiteral in ExternalID."
                );
            }
            let mut buffer = String::new();
            self.parse_system_literal(&mut buffer)?;
            *system_id = Some(buffer.into_boxed_str());
        } else {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "ExternalID must start with 'SYSTEM' or 'PUBLIC'."
            );
            return Err(DTDError::DtdDeclInvalid);
        }
        Ok(())
    }
}
