//! The declaration tokens emitted by the tokenizer.

use crate::contentspec::ContentSpec;

/// The declared type of an attribute.
///
/// ```text
/// [54] AttType       ::= StringType | TokenizedType | EnumeratedType
/// [55] StringType    ::= 'CDATA'
/// [56] TokenizedType ::= 'ID' | 'IDREF' | 'IDREFS' | 'ENTITY' | 'ENTITIES' | 'NMTOKEN' | 'NMTOKENS'
/// [57] EnumeratedType ::= NotationType | Enumeration
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeType {
    #[default]
    CDATA,
    ID,
    IDREF,
    IDREFS,
    ENTITY,
    ENTITIES,
    NMTOKEN,
    NMTOKENS,
    /// `NOTATION (name|name|..)`, in declaration order.
    NOTATION(Vec<Box<str>>),
    /// `(nmtoken|nmtoken|..)`, in declaration order.
    Enumeration(Vec<Box<str>>),
}

/// The default-value declaration of an attribute.
///
/// ```text
/// [60] DefaultDecl ::= '#REQUIRED' | '#IMPLIED' | (('#FIXED' S)? AttValue)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultDecl {
    REQUIRED,
    IMPLIED,
    FIXED(Box<str>),
    None(Box<str>),
}

/// One attribute definition within an attribute-list declaration.
///
/// ```text
/// [53] AttDef ::= S Name S AttType S DefaultDecl
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttDef {
    pub name: Box<str>,
    pub atttype: AttributeType,
    pub default_decl: DefaultDecl,
}

/// A markup declaration read from a DTD subset.
///
/// The scanner enforces the shape invariants the variants cannot express
/// themselves: an `EntityDecl` with `external == false` carries a `value`
/// and no identifiers, and `notation` is only ever set on external general
/// entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DTDToken {
    /// `<?target data?>`
    ProcessingInstruction {
        target: Box<str>,
        data: Option<Box<str>>,
    },
    /// `<?xml version=".." encoding=".."?>` at the head of an external
    /// subset.
    TextDecl {
        version: Option<Box<str>>,
        encoding: Option<Box<str>>,
    },
    /// `<!-- data -->`
    Comment { data: Box<str> },
    /// `<!ENTITY ..>`
    EntityDecl {
        name: Box<str>,
        parameter: bool,
        external: bool,
        public_id: Option<Box<str>>,
        system_id: Option<Box<str>>,
        value: Option<Box<str>>,
        /// NDATA notation name of an unparsed entity.
        notation: Option<Box<str>>,
    },
    /// `<!ELEMENT name contentspec>`
    ElementDecl { name: Box<str>, content: ContentSpec },
    /// `<!ATTLIST name attdef*>`
    AttlistDecl {
        name: Box<str>,
        attributes: Vec<AttDef>,
    },
    /// `<!NOTATION name ..>`
    NotationDecl {
        name: Box<str>,
        public_id: Option<Box<str>>,
        system_id: Option<Box<str>>,
    },
    /// End of the subset: end of input for an external subset, `]` at
    /// conditional-section depth zero for an internal one.
    EOF,
}
