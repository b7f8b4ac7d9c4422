//! The declaration scanner.

mod attlist_decl;
mod comment;
mod cond_sect;
mod element_decl;
mod entity_decl;
pub mod error;
pub mod handler;
mod literals;
mod notation_decl;
mod pi;

use std::{mem::replace, sync::Arc};

use crate::{
    XMLVersion,
    entity::EntityContainer,
    error::DTDError,
    scan::{
        error::{error, fatal_error},
        handler::{DefaultErrorHandler, ErrorHandler},
    },
    source::SourceCursor,
    stream::IntermediateStream,
    token::DTDToken,
};

/// A pull tokenizer over one DTD subset.
///
/// Each call to [`get`](DTDTokenizer::get) skips leading whitespace, reads
/// one markup declaration, and returns it, or [`EOF`](DTDToken::EOF) once
/// the subset end is reached: end of input for an external subset, `]` at
/// conditional-section depth zero for an internal one.
///
/// One tokenizer owns one [`IntermediateStream`] and must not be shared
/// across threads. The entity container is only ever read.
pub struct DTDTokenizer<'a> {
    pub(crate) stream: IntermediateStream<'a>,
    container: &'a dyn EntityContainer,
    pub(crate) error_handler: Arc<dyn ErrorHandler>,
    pub(crate) version: XMLVersion,
    /// Whether this subset is an external one. Controls the subset end
    /// character, the legality of conditional sections, and parameter
    /// entity substitution inside entity value literals.
    external: bool,
    /// Nesting depth of open `INCLUDE` conditional sections.
    includes: usize,
    pub(crate) fatal_error_occurred: bool,
}

impl<'a> DTDTokenizer<'a> {
    pub fn new(container: &'a dyn EntityContainer, source: &'a mut dyn SourceCursor) -> Self {
        Self {
            stream: IntermediateStream::new(source),
            container,
            error_handler: Arc::new(DefaultErrorHandler),
            version: XMLVersion::default(),
            external: true,
            includes: 0,
            fatal_error_occurred: false,
        }
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Mark the subset this tokenizer reads as internal or external.
    /// Defaults to external.
    pub fn set_external(&mut self, external: bool) {
        self.external = external;
    }

    pub fn error_handler(&self) -> Arc<dyn ErrorHandler> {
        self.error_handler.clone()
    }

    pub fn set_error_handler(&mut self, handler: Arc<dyn ErrorHandler>) -> Arc<dyn ErrorHandler> {
        replace(&mut self.error_handler, handler)
    }

    /// The unexpanded source text consumed so far.
    pub fn content(&self) -> String {
        self.stream.content()
    }

    pub fn fatal_error_occurred(&self) -> bool {
        self.fatal_error_occurred
    }

    /// Read the next markup declaration from the subset.
    ///
    /// ```text
    /// [28a] DeclSep    ::= PEReference | S
    /// [28b] intSubset  ::= (markupdecl | DeclSep)*
    /// [29]  markupdecl ::= elementdecl | AttlistDecl | EntityDecl | NotationDecl | PI | Comment
    /// [31]  extSubsetDecl ::= ( markupdecl | conditionalSect | DeclSep)*
    /// ```
    pub fn get(&mut self) -> Result<DTDToken, DTDError> {
        loop {
            self.skip_whitespaces();
            match self.stream.current() {
                None => {
                    if self.includes > 0 {
                        fatal_error!(
                            self,
                            DtdInvalid,
                            "{} conditional section(s) are not closed at the end of the subset.",
                            self.includes
                        );
                        return Err(DTDError::DtdInvalid);
                    }
                    if !self.external {
                        error!(
                            self,
                            UnexpectedEOF, "The internal subset does not close with ']'."
                        );
                    }
                    return Ok(DTDToken::EOF);
                }
                Some(']') => {
                    if self.includes > 0 && self.stream.continues_with("]]>") {
                        // skip ']]>'
                        self.stream.advance(3);
                        self.includes -= 1;
                    } else if !self.external {
                        // Leave ']' for the DOCTYPE parser.
                        return Ok(DTDToken::EOF);
                    } else {
                        fatal_error!(
                            self,
                            DtdInvalid,
                            "']' is not allowed outside a conditional section."
                        );
                        return Err(DTDError::DtdInvalid);
                    }
                }
                Some('%') => {
                    self.stream.next();
                    match self.stream.current() {
                        Some(c) if self.version.is_name_start_char(c) => {
                            self.parameter_reference(true, None)?;
                        }
                        _ => {
                            fatal_error!(
                                self,
                                DtdPEReferenceInvalid,
                                "'%' is not followed by a parameter entity name."
                            );
                            return Err(DTDError::DtdPEReferenceInvalid);
                        }
                    }
                }
                Some('<') => {
                    if let Some(token) = self.parse_markup_decl()? {
                        return Ok(token);
                    }
                    // conditional sections and skipped declarations produce
                    // no token; restart dispatch
                }
                Some(c) => {
                    fatal_error!(
                        self,
                        DtdInvalid,
                        "An unexpected character '0x{:X}' occurred in the DTD subset.",
                        c as u32
                    );
                    return Err(DTDError::DtdInvalid);
                }
            }
        }
    }

    fn parse_markup_decl(&mut self) -> Result<Option<DTDToken>, DTDError> {
        if self.stream.continues_with("<?") {
            // skip '<?'
            self.stream.advance(2);
            return self.parse_pi().map(Some);
        }
        if self.stream.continues_with("<!--") {
            // skip '<!--'
            self.stream.advance(4);
            return self.parse_comment().map(Some);
        }
        if self.stream.continues_with("<![") {
            // skip '<!['
            self.stream.advance(3);
            self.parse_conditional_sect()?;
            return Ok(None);
        }
        if self.stream.continues_with("<!ENTITY") {
            // skip '<!ENTITY'
            self.stream.advance(8);
            return self.parse_entity_decl().map(Some);
        }
        if self.stream.continues_with("<!ELEMENT") {
            // skip '<!ELEMENT'
            self.stream.advance(9);
            return self.parse_element_decl().map(Some);
        }
        if self.stream.continues_with("<!ATTLIST") {
            // skip '<!ATTLIST'
            self.stream.advance(9);
            return self.parse_attlist_decl().map(Some);
        }
        if self.stream.continues_with("<!NOTATION") {
            // skip '<!NOTATION'
            self.stream.advance(10);
            return self.parse_notation_decl().map(Some);
        }
        if self.stream.continues_with("<!") {
            error!(
                self,
                UndefinedMarkupDeclaration, "An unknown markup declaration is skipped."
            );
            self.stream.advance(2);
            self.skip_to_decl_end();
            return Ok(None);
        }
        fatal_error!(self, DtdInvalid, "'<' does not start a markup declaration.");
        Err(DTDError::DtdInvalid)
    }

    /// ```text
    /// [3] S ::= (#x20 | #x9 | #xD | #xA)+
    /// ```
    pub(crate) fn skip_whitespaces(&mut self) -> usize {
        let mut s = 0;
        while self
            .stream
            .current()
            .is_some_and(|c| self.version.is_whitespace(c))
        {
            self.stream.next();
            s += 1;
        }
        s
    }

    /// Skip whitespace while expanding parameter entity references in
    /// place. Used inside markup declarations, where a reference boundary
    /// counts as whitespace.
    pub(crate) fn skip_blanks(&mut self) -> Result<usize, DTDError> {
        let mut s = self.skip_whitespaces();
        while self.stream.current() == Some('%') {
            self.stream.next();
            match self.stream.current() {
                Some(c) if self.version.is_name_start_char(c) => {
                    self.parameter_reference(true, None)?;
                    s += 1;
                    s += self.skip_whitespaces();
                }
                _ => {
                    // a lone '%' is not a reference; leave it to the caller
                    self.stream.previous();
                    break;
                }
            }
        }
        Ok(s)
    }

    /// Consume input through the next '>' so scanning can resume after a
    /// damaged declaration.
    pub(crate) fn skip_to_decl_end(&mut self) {
        while let Some(c) = self.stream.current() {
            self.stream.next();
            if c == '>' {
                break;
            }
        }
    }

    /// Consume the closing '>' of a declaration, salvaging `token` when the
    /// input is damaged: trailing garbage is reported and skipped, and EOF
    /// commits the token so that the next call reports end of input.
    pub(crate) fn finish_decl(&mut self, token: DTDToken) -> Result<DTDToken, DTDError> {
        match self.stream.current() {
            Some('>') => {
                self.stream.next();
            }
            Some(_) => {
                error!(
                    self,
                    TagClosedWrong, "A markup declaration does not close with '>'."
                );
                self.skip_to_decl_end();
            }
            None => {
                error!(
                    self,
                    UnexpectedEOF, "Unexpected EOF at the end of a markup declaration."
                );
            }
        }
        Ok(token)
    }

    /// ```text
    /// [5] Name ::= NameStartChar (NameChar)*
    /// ```
    ///
    /// A parameter entity reference may appear embedded in the name; it is
    /// expanded in place and reading continues through the splice.
    pub(crate) fn parse_name(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        match self.stream.current() {
            Some(c) if self.version.is_name_start_char(c) => {
                buffer.push(c);
                self.stream.next();
            }
            Some(c) => {
                fatal_error!(
                    self,
                    DtdNameInvalid,
                    "A character '0x{:X}' is not allowed as a name start character.",
                    c as u32
                );
                return Err(DTDError::DtdNameInvalid);
            }
            None => {
                fatal_error!(self, UnexpectedEOF, "Unexpected EOF while reading a name.");
                return Err(DTDError::UnexpectedEOF);
            }
        }
        loop {
            match self.stream.current() {
                Some(c) if self.version.is_name_char(c) => {
                    buffer.push(c);
                    self.stream.next();
                }
                Some('%') => {
                    self.stream.next();
                    match self.stream.current() {
                        Some(c) if self.version.is_name_start_char(c) => {
                            self.parameter_reference(true, None)?;
                        }
                        _ => {
                            self.stream.previous();
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// ```text
    /// [7] Nmtoken ::= (NameChar)+
    /// ```
    pub(crate) fn parse_nmtoken(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        let start = buffer.len();
        while let Some(c) = self.stream.current() {
            if !self.version.is_name_char(c) {
                break;
            }
            buffer.push(c);
            self.stream.next();
        }
        if buffer.len() == start {
            fatal_error!(self, DtdNameInvalid, "Nmtoken must not be empty.");
            return Err(DTDError::DtdNameInvalid);
        }
        Ok(())
    }

    /// Read the name of a reference being expanded. Unlike
    /// [`parse_name`](DTDTokenizer::parse_name) this never expands nested
    /// references, so the consumed span stays exactly `Name`.
    fn read_reference_name(&mut self, buffer: &mut String) -> Result<(), DTDError> {
        match self.stream.current() {
            Some(c) if self.version.is_name_start_char(c) => {
                buffer.push(c);
                self.stream.next();
            }
            _ => {
                fatal_error!(
                    self,
                    DtdNameInvalid,
                    "A reference does not have a valid name."
                );
                return Err(DTDError::DtdNameInvalid);
            }
        }
        while let Some(c) = self.stream.current() {
            if !self.version.is_name_char(c) {
                break;
            }
            buffer.push(c);
            self.stream.next();
        }
        Ok(())
    }

    /// Expand a parameter entity reference. The head is just past the `%`.
    ///
    /// With `substitute` the reference span `%Name;` is replaced by the
    /// entity's replacement text and reading resumes at the splice point.
    /// Without it the reference appears where substitution is not allowed
    /// (an entity value literal in an internal subset) and the reference
    /// text itself is appended to `literal`.
    ///
    /// ```text
    /// [69] PEReference ::= '%' Name ';'
    /// ```
    pub(crate) fn parameter_reference(
        &mut self,
        substitute: bool,
        literal: Option<&mut String>,
    ) -> Result<(), DTDError> {
        let mut name = String::new();
        self.read_reference_name(&mut name)?;
        if self.stream.current() != Some(';') {
            fatal_error!(
                self,
                DtdPEReferenceInvalid,
                "The parameter entity reference '%{}' does not end with ';'.",
                name
            );
            return Err(DTDError::DtdPEReferenceInvalid);
        }
        self.stream.next();
        if substitute {
            let Some(entity) = self.container.get_parameter(&name) else {
                fatal_error!(
                    self,
                    DtdPEReferenceInvalid,
                    "The parameter entity '{}' is not declared.",
                    name
                );
                return Err(DTDError::DtdPEReferenceInvalid);
            };
            // remove '%' + Name + ';' and reroute reading through the
            // replacement text
            self.stream.push(name.chars().count() + 2, entity.node_value());
        } else if let Some(buffer) = literal {
            buffer.push('%');
            buffer.push_str(&name);
            buffer.push(';');
        }
        Ok(())
    }

    /// Expand a general entity or character reference. The head is just
    /// past the `&`.
    ///
    /// ```text
    /// [66] CharRef   ::= '&#' [0-9]+ ';' | '&#x' [0-9a-fA-F]+ ';'
    /// [68] EntityRef ::= '&' Name ';'
    /// ```
    pub(crate) fn entity_reference(&mut self) -> Result<(), DTDError> {
        if self.stream.current() == Some('#') {
            return self.char_reference();
        }
        let mut name = String::new();
        self.read_reference_name(&mut name)?;
        if self.stream.current() != Some(';') {
            fatal_error!(
                self,
                CharacterReferenceNotTerminated,
                "The entity reference '&{}' does not end with ';'.",
                name
            );
            return Err(DTDError::CharacterReferenceNotTerminated);
        }
        self.stream.next();
        let Some(entity) = self.container.get_entity(&name) else {
            fatal_error!(
                self,
                CharacterReferenceNotTerminated,
                "The entity '{}' is not declared.",
                name
            );
            return Err(DTDError::CharacterReferenceNotTerminated);
        };
        self.stream.push(name.chars().count() + 2, entity.node_value());
        Ok(())
    }

    /// Expand a character reference into the character it denotes. The head
    /// is on the `#`; the `&` has already been consumed.
    pub(crate) fn char_reference(&mut self) -> Result<(), DTDError> {
        // skip '#'; two characters of the reference are consumed so far
        self.stream.next();
        let mut consumed = 2usize;
        let hex = self.stream.current() == Some('x');
        let radix = if hex { 16 } else { 10 };
        if hex {
            self.stream.next();
            consumed += 1;
        }
        let mut code = 0u32;
        let mut digits = 0usize;
        let mut overflowed = false;
        while let Some(v) = self.stream.current().and_then(|c| c.to_digit(radix)) {
            let (new, f) = code.overflowing_mul(radix);
            let (new, g) = new.overflowing_add(v);
            code = new;
            overflowed |= f | g;
            digits += 1;
            consumed += 1;
            self.stream.next();
        }
        if digits == 0 || self.stream.current() != Some(';') {
            fatal_error!(
                self,
                CharacterReferenceNotTerminated,
                "A character reference does not end with ';'."
            );
            return Err(DTDError::CharacterReferenceNotTerminated);
        }
        self.stream.next();
        consumed += 1;
        let Some(c) = (!overflowed)
            .then_some(code)
            .and_then(char::from_u32)
            .filter(|&c| self.version.is_char(c))
        else {
            fatal_error!(
                self,
                CharacterReferenceInvalidCode,
                "The code point '0x{:X}' does not indicate a character that is allowed in a XML document.",
                code
            );
            return Err(DTDError::CharacterReferenceInvalidCode);
        };
        let mut utf8 = [0u8; 4];
        self.stream.push(consumed, c.encode_utf8(&mut utf8));
        Ok(())
    }
}
