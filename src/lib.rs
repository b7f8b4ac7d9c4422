#![doc = include_str!("../README.md")]

pub mod contentspec;
pub mod entity;
pub mod error;
pub mod scan;
pub mod source;
pub mod stream;
pub mod token;

use std::{convert::Infallible, str::FromStr};

/// Maximum length of XML version numbers accepted by the tokenizer
const XML_VERSION_NUM_LIMIT_LENGTH: usize = 128;
/// Maximum length of encoding names accepted by the tokenizer
const ENCODING_NAME_LIMIT_LENGTH: usize = 128;

/// The XML version the character classes below are evaluated against.
///
/// Only XML 1.0 classes are implemented; an unrecognized version number
/// falls back to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum XMLVersion {
    /// XML 1.0
    #[default]
    XML10,
    /// Unknown version. Treat as specified in XML 1.0.
    Unknown,
}

impl XMLVersion {
    /// ```text
    /// [2] Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
    /// ```
    pub fn is_char(&self, c: char) -> bool {
        matches!(c,
            '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
        )
    }

    /// ```text
    /// [4] NameStartChar ::= ":" | [A-Z] | "_" | [a-z] | [#xC0-#xD6] | [#xD8-#xF6] | [#xF8-#x2FF] | [#x370-#x37D] | [#x37F-#x1FFF] | [#x200C-#x200D] | [#x2070-#x218F] | [#x2C00-#x2FEF] | [#x3001-#xD7FF] | [#xF900-#xFDCF] | [#xFDF0-#xFFFD] | [#x10000-#xEFFFF]
    /// ```
    pub fn is_name_start_char(&self, c: char) -> bool {
        matches!(c,
            ':' | '_'
            | 'A'..='Z'
            | 'a'..='z'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
        )
    }

    /// ```text
    /// [4a] NameChar ::= NameStartChar | "-" | "." | [0-9] | #xB7 | [#x0300-#x036F] | [#x203F-#x2040]
    /// ```
    pub fn is_name_char(&self, c: char) -> bool {
        matches!(c,
            '-' | '.' | ':' | '_' | '\u{B7}'
            | '0'..='9'
            | 'A'..='Z'
            | 'a'..='z'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{203F}'..='\u{2040}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
        )
    }

    /// ```text
    /// [13] PubidChar ::= #x20 | #xD | #xA | [a-zA-Z0-9] | [-'()+,./:=?;!*#@$_%]
    /// ```
    pub fn is_pubid_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(c, ' ' | '\r' | '\n')
            || "-'()+,./:=?;!*#@$_%".contains(c)
    }

    /// ```text
    /// [3] S ::= (#x20 | #x9 | #xD | #xA)+
    /// ```
    pub fn is_whitespace(&self, c: char) -> bool {
        matches!(c, ' ' | '\t' | '\r' | '\n')
    }

    /// ```text
    /// [5] Name ::= NameStartChar (NameChar)*
    /// ```
    pub fn validate_name(&self, s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        self.is_name_start_char(first) && chars.all(|c| self.is_name_char(c))
    }
}

impl std::fmt::Display for XMLVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // unknown versions are processed as XML 1.0
        f.write_str("1.0")
    }
}

impl FromStr for XMLVersion {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "1.0" {
            Ok(XMLVersion::XML10)
        } else {
            Ok(XMLVersion::Unknown)
        }
    }
}
