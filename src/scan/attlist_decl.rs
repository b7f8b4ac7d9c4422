use crate::{
    error::DTDError,
    scan::{
        DTDTokenizer,
        error::{error, fatal_error, warning},
    },
    token::{AttDef, AttributeType, DTDToken, DefaultDecl},
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [52] AttlistDecl ::= '<!ATTLIST' S Name AttDef* S? '>'
    /// ```
    ///
    /// Called with the `<!ATTLIST` already consumed. Garbage before the
    /// closing '>' is reported and skipped so the definitions read so far
    /// survive.
    pub(crate) fn parse_attlist_decl(&mut self) -> Result<DTDToken, DTDError> {
        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdAttlistInvalid,
                "Whitespaces are required after '<!ATTLIST' in an attribute list declaration."
            );
        }

        let mut name = String::new();
        self.parse_name(&mut name)?;

        let mut attributes: Vec<AttDef> = vec![];
        let mut s = self.skip_blanks()?;
        loop {
            match self.stream.current() {
                Some('>') => {
                    self.stream.next();
                    break;
                }
                None => {
                    error!(
                        self,
                        UnexpectedEOF, "Unexpected EOF in an attribute list declaration."
                    );
                    break;
                }
                Some(c) if self.version.is_name_start_char(c) => {
                    if s == 0 {
                        fatal_error!(
                            self,
                            DtdAttlistInvalid,
                            "Whitespaces are required before Name in AttDef."
                        );
                    }
                    let attdef = self.parse_att_def()?;
                    if attributes.iter().any(|a| a.name == attdef.name) {
                        warning!(
                            self,
                            DuplicateAttributeDecl,
                            "The attribute '{}' is declared more than once for the element '{}'.",
                            attdef.name,
                            name
                        );
                    }
                    attributes.push(attdef);
                    s = self.skip_blanks()?;
                }
                Some(_) => {
                    error!(
                        self,
                        InputUnexpected,
                        "An unexpected character occurred before '>' in an attribute list declaration."
                    );
                    while !matches!(self.stream.current(), None | Some('>')) {
                        self.stream.next();
                    }
                }
            }
        }

        Ok(DTDToken::AttlistDecl {
            name: name.into(),
            attributes,
        })
    }

    /// ```text
    /// [53] AttDef ::= S Name S AttType S DefaultDecl
    /// ```
    fn parse_att_def(&mut self) -> Result<AttDef, DTDError> {
        let mut att_name = String::new();
        self.parse_name(&mut att_name)?;

        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdAttlistInvalid,
                "Whitespaces are required before AttType in AttDef."
            );
        }

        let atttype = self.parse_att_type()?;

        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdAttlistInvalid,
                "Whitespaces are required between AttType and DefaultDecl in AttDef."
            );
        }

        let default_decl = self.parse_default_decl()?;

        Ok(AttDef {
            name: att_name.into(),
            atttype,
            default_decl,
        })
    }

    /// ```text
    /// [54] AttType        ::= StringType | TokenizedType | EnumeratedType
    /// [55] StringType     ::= 'CDATA'
    /// [56] TokenizedType  ::= 'ID' | 'IDREF' | 'IDREFS' | 'ENTITY' | 'ENTITIES' | 'NMTOKEN' | 'NMTOKENS'
    /// [57] EnumeratedType ::= NotationType | Enumeration
    /// [58] NotationType   ::= 'NOTATION' S '(' S? Name (S? '|' S? Name)* S? ')'
    /// [59] Enumeration    ::= '(' S? Nmtoken (S? '|' S? Nmtoken)* S? ')'
    /// ```
    fn parse_att_type(&mut self) -> Result<AttributeType, DTDError> {
        if self.stream.current() == Some('(') {
            // skip '('
            self.stream.next();
            return Ok(AttributeType::Enumeration(self.parse_enumeration(false)?));
        }

        if self.stream.continues_with("NOTATION") {
            // skip 'NOTATION'
            self.stream.advance(8);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdAttlistInvalid,
                    "Whitespaces are required after 'NOTATION' in a notation attribute type."
                );
            }
            if self.stream.current() != Some('(') {
                fatal_error!(
                    self,
                    DtdAttlistInvalid,
                    "'(' is required after 'NOTATION' in a notation attribute type."
                );
                return Err(DTDError::DtdAttlistInvalid);
            }
            // skip '('
            self.stream.next();
            return Ok(AttributeType::NOTATION(self.parse_enumeration(true)?));
        }

        // keywords sharing a prefix are tried longest first
        for (keyword, atttype) in [
            ("CDATA", AttributeType::CDATA),
            ("IDREFS", AttributeType::IDREFS),
            ("IDREF", AttributeType::IDREF),
            ("ID", AttributeType::ID),
            ("ENTITIES", AttributeType::ENTITIES),
            ("ENTITY", AttributeType::ENTITY),
            ("NMTOKENS", AttributeType::NMTOKENS),
            ("NMTOKEN", AttributeType::NMTOKEN),
        ] {
            if self.stream.continues_with(keyword) {
                self.stream.advance(keyword.len());
                return Ok(atttype);
            }
        }

        fatal_error!(self, DtdTypeInvalid, "AttType cannot be recognized.");
        Err(DTDError::DtdTypeInvalid)
    }

    /// Parse the name list of an enumerated attribute type. Called with the
    /// opening '(' already consumed; `notation` selects the Name production
    /// over Nmtoken.
    fn parse_enumeration(&mut self, notation: bool) -> Result<Vec<Box<str>>, DTDError> {
        self.skip_blanks()?;

        let mut names: Vec<Box<str>> = vec![];
        let mut buffer = String::new();
        if notation {
            self.parse_name(&mut buffer)?;
        } else {
            self.parse_nmtoken(&mut buffer)?;
        }
        names.push(buffer.as_str().into());
        self.skip_blanks()?;

        while self.stream.current() == Some('|') {
            // skip '|'
            self.stream.next();
            self.skip_blanks()?;
            buffer.clear();
            if notation {
                self.parse_name(&mut buffer)?;
            } else {
                self.parse_nmtoken(&mut buffer)?;
            }
            names.push(buffer.as_str().into());
            self.skip_blanks()?;
        }

        if self.stream.current() != Some(')') {
            fatal_error!(
                self,
                DtdAttlistInvalid,
                "An enumerated attribute type does not close with ')'."
            );
            return Err(DTDError::DtdAttlistInvalid);
        }
        // skip ')'
        self.stream.next();

        Ok(names)
    }

    /// ```text
    /// [60] DefaultDecl ::= '#REQUIRED' | '#IMPLIED' | (('#FIXED' S)? AttValue)
    /// ```
    fn parse_default_decl(&mut self) -> Result<DefaultDecl, DTDError> {
        if self.stream.continues_with("#REQUIRED") {
            // skip '#REQUIRED'
            self.stream.advance(9);
            return Ok(DefaultDecl::REQUIRED);
        }
        if self.stream.continues_with("#IMPLIED") {
            // skip '#IMPLIED'
            self.stream.advance(8);
            return Ok(DefaultDecl::IMPLIED);
        }
        if self.stream.continues_with("#FIXED") {
            // skip '#FIXED'
            self.stream.advance(6);
            if self.skip_blanks()? == 0 {
                fatal_error!(
                    self,
                    DtdAttlistInvalid,
                    "Whitespaces are required after '#FIXED' in DefaultDecl."
                );
            }
            let mut buffer = String::new();
            self.parse_default_value(&mut buffer)?;
            return Ok(DefaultDecl::FIXED(buffer.into_boxed_str()));
        }
        let mut buffer = String::new();
        self.parse_default_value(&mut buffer)?;
        Ok(DefaultDecl::None(buffer.into_boxed_str()))
    }
}
