use crate::{
    contentspec::{ContentParticle, ContentSpec, Quantifier},
    error::DTDError,
    scan::{
        DTDTokenizer,
        error::{error, fatal_error},
    },
    token::DTDToken,
};

impl DTDTokenizer<'_> {
    /// ```text
    /// [45] elementdecl ::= '<!ELEMENT' S Name S contentspec S? '>'
    /// [46] contentspec ::= 'EMPTY' | 'ANY' | Mixed | children
    /// ```
    ///
    /// Called with the `<!ELEMENT` already consumed.
    pub(crate) fn parse_element_decl(&mut self) -> Result<DTDToken, DTDError> {
        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "Whitespaces are required after '<!ELEMENT' in an element declaration."
            );
        }

        let mut name = String::new();
        self.parse_name(&mut name)?;

        if self.skip_blanks()? == 0 {
            fatal_error!(
                self,
                DtdDeclInvalid,
                "Whitespaces are required after Name in an element declaration."
            );
        }

        let content = if self.stream.continues_with("EMPTY") {
            // skip 'EMPTY'
            self.stream.advance(5);
            ContentSpec::EMPTY
        } else if self.stream.continues_with("ANY") {
            // skip 'ANY'
            self.stream.advance(3);
            ContentSpec::ANY
        } else if self.stream.current() == Some('(') {
            // skip '('
            self.stream.next();
            self.skip_blanks()?;
            if self.stream.continues_with("#PCDATA") {
                // skip '#PCDATA'
                self.stream.advance(7);
                self.parse_mixed(&name)?
            } else {
                ContentSpec::Children(self.parse_group()?)
            }
        } else {
            fatal_error!(
                self,
                DtdTypeInvalid,
                "contentspec must be 'EMPTY', 'ANY', Mixed, or children."
            );
            return Err(DTDError::DtdTypeInvalid);
        };

        self.skip_blanks()?;
        self.finish_decl(DTDToken::ElementDecl {
            name: name.into(),
            content,
        })
    }

    /// ```text
    /// [51] Mixed ::= '(' S? '#PCDATA' (S? '|' S? Name)* S? ')*'
    ///              | '(' S? '#PCDATA' S? ')'
    /// ```
    ///
    /// Called with the leading `(` and `#PCDATA` already consumed.
    fn parse_mixed(&mut self, elem_name: &str) -> Result<ContentSpec, DTDError> {
        self.skip_blanks()?;

        let mut names: Vec<Box<str>> = vec![];
        while self.stream.current() == Some('|') {
            // skip '|'
            self.stream.next();
            self.skip_blanks()?;
            let mut buffer = String::new();
            self.parse_name(&mut buffer)?;
            if names.iter().any(|name| **name == *buffer) {
                fatal_error!(
                    self,
                    DtdTypeContent,
                    "'{}' is duplicated as a mixed content of element '{}'.",
                    buffer,
                    elem_name
                );
                return Err(DTDError::DtdTypeContent);
            }
            names.push(buffer.into_boxed_str());
            self.skip_blanks()?;
        }

        let quantifier = if self.stream.continues_with(")*") {
            // skip ')*'
            self.stream.advance(2);
            Quantifier::ZeroOrMore
        } else if self.stream.current() == Some(')') {
            if !names.is_empty() {
                error!(
                    self,
                    QuantifierMissing, "Mixed content with elements must end with ')*'."
                );
            }
            // skip ')'
            self.stream.next();
            Quantifier::One
        } else {
            fatal_error!(
                self,
                DtdTypeContent,
                "Mixed content is not wrapped by parentheses correctly."
            );
            return Err(DTDError::DtdTypeContent);
        };

        Ok(ContentSpec::Mixed { names, quantifier })
    }

    /// ```text
    /// [47] children ::= (choice | seq) ('?' | '*' | '+')?
    /// [48] cp       ::= (Name | choice | seq) ('?' | '*' | '+')?
    /// [49] choice   ::= '(' S? cp ( S? '|' S? cp )+ S? ')'
    /// [50] seq      ::= '(' S? cp ( S? ',' S? cp )* S? ')'
    /// ```
    ///
    /// # Note
    /// The leading '(' and subsequent whitespaces have already been
    /// consumed when this is called: they had to be read to decide whether
    /// '#PCDATA' follows and the model is Mixed instead.
    ///
    /// All children of one group share a single connector; seeing the other
    /// connector at the same nesting level is an error.
    fn parse_group(&mut self) -> Result<ContentParticle, DTDError> {
        let first = self.parse_cp()?;
        self.skip_blanks()?;

        let mut children = vec![first];
        let connector = match self.stream.current() {
            Some(c @ ('|' | ',')) => Some(c),
            Some(')') => None,
            Some(c) => {
                fatal_error!(
                    self,
                    DtdTypeInvalid,
                    "An unexpected character '0x{:X}' occurred in element content.",
                    c as u32
                );
                return Err(DTDError::DtdTypeInvalid);
            }
            None => {
                fatal_error!(self, UnexpectedEOF, "Unexpected EOF in element content.");
                return Err(DTDError::UnexpectedEOF);
            }
        };

        if let Some(connector) = connector {
            loop {
                match self.stream.current() {
                    Some(c) if c == connector => {
                        // skip the connector
                        self.stream.next();
                        self.skip_blanks()?;
                        children.push(self.parse_cp()?);
                        self.skip_blanks()?;
                    }
                    Some(')') => break,
                    Some('|' | ',') => {
                        fatal_error!(
                            self,
                            DtdTypeContent,
                            "',' and '|' must not be mixed within one group of element content."
                        );
                        return Err(DTDError::DtdTypeContent);
                    }
                    Some(c) => {
                        fatal_error!(
                            self,
                            DtdTypeInvalid,
                            "An unexpected character '0x{:X}' occurred in element content.",
                            c as u32
                        );
                        return Err(DTDError::DtdTypeInvalid);
                    }
                    None => {
                        fatal_error!(self, UnexpectedEOF, "Unexpected EOF in element content.");
                        return Err(DTDError::UnexpectedEOF);
                    }
                }
            }
        }

        // skip ')'
        self.stream.next();
        let quantifier = self.parse_quantifier();

        Ok(match connector {
            Some('|') => ContentParticle::Choice {
                children,
                quantifier,
            },
            _ => ContentParticle::Sequence {
                children,
                quantifier,
            },
        })
    }

    /// ```text
    /// [48] cp ::= (Name | choice | seq) ('?' | '*' | '+')?
    /// ```
    fn parse_cp(&mut self) -> Result<ContentParticle, DTDError> {
        if self.stream.current() == Some('(') {
            // skip '('
            self.stream.next();
            self.skip_blanks()?;
            self.parse_group()
        } else {
            let mut buffer = String::new();
            self.parse_name(&mut buffer)?;
            let quantifier = self.parse_quantifier();
            Ok(ContentParticle::Name {
                name: buffer.into(),
                quantifier,
            })
        }
    }

    fn parse_quantifier(&mut self) -> Quantifier {
        match self.stream.current() {
            Some('?') => {
                self.stream.next();
                Quantifier::ZeroOrOne
            }
            Some('*') => {
                self.stream.next();
                Quantifier::ZeroOrMore
            }
            Some('+') => {
                self.stream.next();
                Quantifier::OneOrMore
            }
            _ => Quantifier::One,
        }
    }
}
