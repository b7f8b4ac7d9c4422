use std::{cell::RefCell, sync::Arc};

use pretty_assertions::assert_eq;

use anydtd::{
    contentspec::{ContentParticle, ContentSpec, Quantifier},
    entity::EntityTable,
    error::{DTDError, DTDErrorLevel},
    scan::{
        DTDTokenizer,
        error::DTDParseError,
        handler::ErrorHandler,
    },
    source::StringSource,
    token::{AttDef, AttributeType, DTDToken, DefaultDecl},
};

#[derive(Default)]
struct CollectingHandler {
    reports: RefCell<Vec<DTDParseError>>,
}

impl ErrorHandler for CollectingHandler {
    fn error(&self, error: DTDParseError) {
        self.reports.borrow_mut().push(error);
    }

    fn fatal_error(&self, error: DTDParseError) {
        self.reports.borrow_mut().push(error);
    }

    fn warning(&self, error: DTDParseError) {
        self.reports.borrow_mut().push(error);
    }
}

impl CollectingHandler {
    fn codes(&self) -> Vec<(DTDError, DTDErrorLevel)> {
        self.reports
            .borrow()
            .iter()
            .map(|report| (report.error, report.level))
            .collect()
    }
}

fn tokenize_with(
    entities: &EntityTable,
    input: &str,
    external: bool,
) -> (Vec<DTDToken>, Arc<CollectingHandler>) {
    let mut source = StringSource::from(input);
    let mut tokenizer = DTDTokenizer::new(entities, &mut source);
    tokenizer.set_external(external);
    let handler = Arc::new(CollectingHandler::default());
    tokenizer.set_error_handler(handler.clone());
    let mut tokens = vec![];
    loop {
        let token = tokenizer.get().expect("unexpected fatal error");
        let eof = token == DTDToken::EOF;
        tokens.push(token);
        if eof {
            break;
        }
    }
    (tokens, handler)
}

fn tokenize(input: &str, external: bool) -> Vec<DTDToken> {
    let entities = EntityTable::new();
    let (tokens, handler) = tokenize_with(&entities, input, external);
    assert_eq!(handler.codes(), vec![]);
    tokens
}

fn name(name: &str, quantifier: Quantifier) -> ContentParticle {
    ContentParticle::Name {
        name: name.into(),
        quantifier,
    }
}

#[test]
fn empty_element_decl_tests() {
    assert_eq!(
        tokenize("<!ELEMENT br EMPTY>", true),
        vec![
            DTDToken::ElementDecl {
                name: "br".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::EOF,
        ]
    );
    assert_eq!(
        tokenize("<!ELEMENT anything ANY>", true),
        vec![
            DTDToken::ElementDecl {
                name: "anything".into(),
                content: ContentSpec::ANY,
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn mixed_content_decl_tests() {
    assert_eq!(
        tokenize("<!ELEMENT p (#PCDATA|em|strong)*>", true),
        vec![
            DTDToken::ElementDecl {
                name: "p".into(),
                content: ContentSpec::Mixed {
                    names: vec!["em".into(), "strong".into()],
                    quantifier: Quantifier::ZeroOrMore,
                },
            },
            DTDToken::EOF,
        ]
    );
    assert_eq!(
        tokenize("<!ELEMENT p ( #PCDATA )>", true),
        vec![
            DTDToken::ElementDecl {
                name: "p".into(),
                content: ContentSpec::Mixed {
                    names: vec![],
                    quantifier: Quantifier::One,
                },
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn element_content_decl_tests() {
    assert_eq!(
        tokenize("<!ELEMENT book (title, author+, chapter*)>", true),
        vec![
            DTDToken::ElementDecl {
                name: "book".into(),
                content: ContentSpec::Children(ContentParticle::Sequence {
                    children: vec![
                        name("title", Quantifier::One),
                        name("author", Quantifier::OneOrMore),
                        name("chapter", Quantifier::ZeroOrMore),
                    ],
                    quantifier: Quantifier::One,
                }),
            },
            DTDToken::EOF,
        ]
    );

    // nested groups with quantifiers on the groups themselves
    assert_eq!(
        tokenize("<!ELEMENT a (b, (c | d)+, e?)*>", true),
        vec![
            DTDToken::ElementDecl {
                name: "a".into(),
                content: ContentSpec::Children(ContentParticle::Sequence {
                    children: vec![
                        name("b", Quantifier::One),
                        ContentParticle::Choice {
                            children: vec![
                                name("c", Quantifier::One),
                                name("d", Quantifier::One),
                            ],
                            quantifier: Quantifier::OneOrMore,
                        },
                        name("e", Quantifier::ZeroOrOne),
                    ],
                    quantifier: Quantifier::ZeroOrMore,
                }),
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn mixed_connector_tests() {
    let entities = EntityTable::new();
    let mut source = StringSource::from("<!ELEMENT a (b, c | d)>");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(tokenizer.get(), Err(DTDError::DtdTypeContent));
    assert!(tokenizer.fatal_error_occurred());
}

#[test]
fn quantifier_missing_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) = tokenize_with(&entities, "<!ELEMENT p (#PCDATA|em)>", true);
    assert_eq!(
        tokens[0],
        DTDToken::ElementDecl {
            name: "p".into(),
            content: ContentSpec::Mixed {
                names: vec!["em".into()],
                quantifier: Quantifier::One,
            },
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::QuantifierMissing, DTDErrorLevel::Error)]
    );
}

#[test]
fn attlist_decl_tests() {
    assert_eq!(
        tokenize(
            "<!ATTLIST img src CDATA #REQUIRED alt CDATA #IMPLIED width CDATA #FIXED \"0\">",
            true
        ),
        vec![
            DTDToken::AttlistDecl {
                name: "img".into(),
                attributes: vec![
                    AttDef {
                        name: "src".into(),
                        atttype: AttributeType::CDATA,
                        default_decl: DefaultDecl::REQUIRED,
                    },
                    AttDef {
                        name: "alt".into(),
                        atttype: AttributeType::CDATA,
                        default_decl: DefaultDecl::IMPLIED,
                    },
                    AttDef {
                        name: "width".into(),
                        atttype: AttributeType::CDATA,
                        default_decl: DefaultDecl::FIXED("0".into()),
                    },
                ],
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn attlist_enumeration_tests() {
    assert_eq!(
        tokenize(
            "<!ATTLIST p align (left|right|center) \"left\" fmt NOTATION (gif | png) #IMPLIED id ID #IMPLIED>",
            true
        ),
        vec![
            DTDToken::AttlistDecl {
                name: "p".into(),
                attributes: vec![
                    AttDef {
                        name: "align".into(),
                        atttype: AttributeType::Enumeration(vec![
                            "left".into(),
                            "right".into(),
                            "center".into(),
                        ]),
                        default_decl: DefaultDecl::None("left".into()),
                    },
                    AttDef {
                        name: "fmt".into(),
                        atttype: AttributeType::NOTATION(vec!["gif".into(), "png".into()]),
                        default_decl: DefaultDecl::IMPLIED,
                    },
                    AttDef {
                        name: "id".into(),
                        atttype: AttributeType::ID,
                        default_decl: DefaultDecl::IMPLIED,
                    },
                ],
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn attlist_garbage_recovery_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) =
        tokenize_with(&entities, "<!ATTLIST a b CDATA #IMPLIED ?? >", true);
    assert_eq!(
        tokens[0],
        DTDToken::AttlistDecl {
            name: "a".into(),
            attributes: vec![AttDef {
                name: "b".into(),
                atttype: AttributeType::CDATA,
                default_decl: DefaultDecl::IMPLIED,
            }],
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::InputUnexpected, DTDErrorLevel::Error)]
    );
}

#[test]
fn lt_in_default_value_tests() {
    let entities = EntityTable::new();
    let mut source = StringSource::from("<!ATTLIST a b CDATA \"x<y\">");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(tokenizer.get(), Err(DTDError::LtInAttributeValue));
}

#[test]
fn entity_decl_tests() {
    assert_eq!(
        tokenize("<!ENTITY copy \"&#xA9;\">", true),
        vec![
            DTDToken::EntityDecl {
                name: "copy".into(),
                parameter: false,
                external: false,
                public_id: None,
                system_id: None,
                value: Some("\u{a9}".into()),
                notation: None,
            },
            DTDToken::EOF,
        ]
    );

    assert_eq!(
        tokenize("<!ENTITY % common SYSTEM \"common.ent\">", true),
        vec![
            DTDToken::EntityDecl {
                name: "common".into(),
                parameter: true,
                external: true,
                public_id: None,
                system_id: Some("common.ent".into()),
                value: None,
                notation: None,
            },
            DTDToken::EOF,
        ]
    );

    assert_eq!(
        tokenize(
            "<!ENTITY logo PUBLIC \"-//Example//Logo//EN\" \"logo.gif\" NDATA gif>",
            true
        ),
        vec![
            DTDToken::EntityDecl {
                name: "logo".into(),
                parameter: false,
                external: true,
                public_id: Some("-//Example//Logo//EN".into()),
                system_id: Some("logo.gif".into()),
                value: None,
                notation: Some("gif".into()),
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn entity_value_reference_tests() {
    // in an external subset the parameter entity is substituted
    let mut entities = EntityTable::new();
    entities.declare_parameter("x", "abc");
    let (tokens, handler) = tokenize_with(&entities, "<!ENTITY y \"%x;-tail\">", true);
    assert_eq!(handler.codes(), vec![]);
    assert_eq!(
        tokens[0],
        DTDToken::EntityDecl {
            name: "y".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("abc-tail".into()),
            notation: None,
        }
    );

    // in an internal subset the reference text is part of the literal
    let (tokens, handler) = tokenize_with(&entities, "<!ENTITY y \"%x;-tail\">]", false);
    assert_eq!(handler.codes(), vec![]);
    assert_eq!(
        tokens[0],
        DTDToken::EntityDecl {
            name: "y".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("%x;-tail".into()),
            notation: None,
        }
    );

    // general entity references are kept as text, character references
    // are always substituted
    let (tokens, handler) =
        tokenize_with(&entities, "<!ENTITY y \"&amp;&#60;\">]", false);
    assert_eq!(handler.codes(), vec![]);
    assert_eq!(
        tokens[0],
        DTDToken::EntityDecl {
            name: "y".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("&amp;<".into()),
            notation: None,
        }
    );
}

#[test]
fn notation_decl_tests() {
    assert_eq!(
        tokenize(
            "<!NOTATION gif PUBLIC \"-//IETF//NOTATION GIF89a//EN\">",
            true
        ),
        vec![
            DTDToken::NotationDecl {
                name: "gif".into(),
                public_id: Some("-//IETF//NOTATION GIF89a//EN".into()),
                system_id: None,
            },
            DTDToken::EOF,
        ]
    );

    assert_eq!(
        tokenize("<!NOTATION ps SYSTEM \"gs\">", true),
        vec![
            DTDToken::NotationDecl {
                name: "ps".into(),
                public_id: None,
                system_id: Some("gs".into()),
            },
            DTDToken::EOF,
        ]
    );

    assert_eq!(
        tokenize("<!NOTATION png PUBLIC \"-//Example//PNG//EN\" \"image/png\">", true),
        vec![
            DTDToken::NotationDecl {
                name: "png".into(),
                public_id: Some("-//Example//PNG//EN".into()),
                system_id: Some("image/png".into()),
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn notation_missing_literal_tests() {
    let entities = EntityTable::new();

    let (tokens, handler) = tokenize_with(&entities, "<!NOTATION n SYSTEM >", true);
    assert_eq!(
        tokens[0],
        DTDToken::NotationDecl {
            name: "n".into(),
            public_id: None,
            system_id: None,
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::NotationSystemInvalid, DTDErrorLevel::Error)]
    );

    let (tokens, handler) = tokenize_with(&entities, "<!NOTATION n PUBLIC >", true);
    assert_eq!(
        tokens[0],
        DTDToken::NotationDecl {
            name: "n".into(),
            public_id: None,
            system_id: None,
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::NotationPublicInvalid, DTDErrorLevel::Error)]
    );
}

#[test]
fn pubid_invalid_character_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) =
        tokenize_with(&entities, "<!NOTATION n PUBLIC \"a{b\">", true);
    assert_eq!(
        tokens[0],
        DTDToken::NotationDecl {
            name: "n".into(),
            public_id: Some("a{b".into()),
            system_id: None,
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::InvalidCharacter, DTDErrorLevel::Error)]
    );
}

#[test]
fn pi_tests() {
    assert_eq!(
        tokenize("<?check usage='strict'?><?ping?>]", false),
        vec![
            DTDToken::ProcessingInstruction {
                target: "check".into(),
                data: Some("usage='strict'".into()),
            },
            DTDToken::ProcessingInstruction {
                target: "ping".into(),
                data: None,
            },
            DTDToken::EOF,
        ]
    );

    // an internal '?' is data as long as '>' does not follow
    assert_eq!(
        tokenize("<?q a?b?>]", false),
        vec![
            DTDToken::ProcessingInstruction {
                target: "q".into(),
                data: Some("a?b".into()),
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn text_decl_tests() {
    assert_eq!(
        tokenize(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><!ELEMENT a EMPTY>",
            true
        ),
        vec![
            DTDToken::TextDecl {
                version: Some("1.0".into()),
                encoding: Some("UTF-8".into()),
            },
            DTDToken::ElementDecl {
                name: "a".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::EOF,
        ]
    );

    assert_eq!(
        tokenize("<?xml encoding='ISO-8859-1'?>", true),
        vec![
            DTDToken::TextDecl {
                version: None,
                encoding: Some("ISO-8859-1".into()),
            },
            DTDToken::EOF,
        ]
    );

    // in an internal subset '<?xml' is an ordinary target
    assert_eq!(
        tokenize("<?xml version=\"1.0\"?>]", false),
        vec![
            DTDToken::ProcessingInstruction {
                target: "xml".into(),
                data: Some("version=\"1.0\"".into()),
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn comment_tests() {
    assert_eq!(
        tokenize("<!-- a - b -->]", false),
        vec![
            DTDToken::Comment {
                data: " a - b ".into(),
            },
            DTDToken::EOF,
        ]
    );

    let entities = EntityTable::new();
    let mut source = StringSource::from("<!-- a--b -->");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(tokenizer.get(), Err(DTDError::CommentEndedUnexpected));
}

#[test]
fn conditional_section_tests() {
    assert_eq!(
        tokenize("<![INCLUDE[<!ELEMENT a EMPTY>]]><!ELEMENT b EMPTY>", true),
        vec![
            DTDToken::ElementDecl {
                name: "a".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::ElementDecl {
                name: "b".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::EOF,
        ]
    );

    // an IGNORE section is skipped in full, including nested sections
    assert_eq!(
        tokenize(
            "<![ IGNORE [ <!ELEMENT x (a|b)> <![INCLUDE[ <!junk ]]> tail ]]><!ELEMENT ok EMPTY>",
            true
        ),
        vec![
            DTDToken::ElementDecl {
                name: "ok".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::EOF,
        ]
    );

    // the keyword may come from a parameter entity
    let mut entities = EntityTable::new();
    entities.declare_parameter("draft", "INCLUDE");
    let (tokens, handler) = tokenize_with(
        &entities,
        "<![%draft;[<!ELEMENT note (#PCDATA)>]]>",
        true,
    );
    assert_eq!(handler.codes(), vec![]);
    assert_eq!(
        tokens,
        vec![
            DTDToken::ElementDecl {
                name: "note".into(),
                content: ContentSpec::Mixed {
                    names: vec![],
                    quantifier: Quantifier::One,
                },
            },
            DTDToken::EOF,
        ]
    );
}

#[test]
fn conditional_section_error_tests() {
    let entities = EntityTable::new();

    // conditional sections are not allowed in an internal subset
    let mut source = StringSource::from("<![INCLUDE[]]>]");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    tokenizer.set_external(false);
    assert_eq!(tokenizer.get(), Err(DTDError::DtdInvalid));

    // EOF inside an IGNORE section
    let mut source = StringSource::from("<![IGNORE[ never closed");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(tokenizer.get(), Err(DTDError::DtdInvalid));

    // an unclosed INCLUDE section at the end of the subset
    let mut source = StringSource::from("<![INCLUDE[<!ELEMENT a EMPTY>");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert!(matches!(tokenizer.get(), Ok(DTDToken::ElementDecl { .. })));
    assert_eq!(tokenizer.get(), Err(DTDError::DtdInvalid));
}

#[test]
fn pe_reference_between_declarations_tests() {
    let mut entities = EntityTable::new();
    entities.declare_parameter("decls", "<!ELEMENT a EMPTY><!ELEMENT b ANY>");
    let (tokens, handler) = tokenize_with(&entities, "%decls;", true);
    assert_eq!(handler.codes(), vec![]);
    assert_eq!(
        tokens,
        vec![
            DTDToken::ElementDecl {
                name: "a".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::ElementDecl {
                name: "b".into(),
                content: ContentSpec::ANY,
            },
            DTDToken::EOF,
        ]
    );

    let entities = EntityTable::new();
    let mut source = StringSource::from("%nodecl;");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(tokenizer.get(), Err(DTDError::DtdPEReferenceInvalid));
}

#[test]
fn internal_subset_end_tests() {
    let entities = EntityTable::new();
    let mut source = StringSource::from("<!ELEMENT a EMPTY> ] trailing");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    tokenizer.set_external(false);
    assert!(matches!(tokenizer.get(), Ok(DTDToken::ElementDecl { .. })));
    assert_eq!(tokenizer.get(), Ok(DTDToken::EOF));
    // the ']' is left for the DOCTYPE parser
    assert_eq!(tokenizer.content(), "<!ELEMENT a EMPTY> ");
}

#[test]
fn undefined_markup_declaration_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) =
        tokenize_with(&entities, "<!FOO bar><!ELEMENT a EMPTY>]", false);
    assert_eq!(
        tokens,
        vec![
            DTDToken::ElementDecl {
                name: "a".into(),
                content: ContentSpec::EMPTY,
            },
            DTDToken::EOF,
        ]
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::UndefinedMarkupDeclaration, DTDErrorLevel::Error)]
    );
}

#[test]
fn tag_closed_wrong_recovery_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) =
        tokenize_with(&entities, "<!ENTITY e \"v\" junk><!ELEMENT a EMPTY>", true);
    assert_eq!(
        tokens[0],
        DTDToken::EntityDecl {
            name: "e".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("v".into()),
            notation: None,
        }
    );
    assert!(matches!(tokens[1], DTDToken::ElementDecl { .. }));
    assert_eq!(
        handler.codes(),
        vec![(DTDError::TagClosedWrong, DTDErrorLevel::Error)]
    );
}

#[test]
fn eof_salvage_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) = tokenize_with(&entities, "<!ENTITY e \"v\"", true);
    assert_eq!(
        tokens,
        vec![
            DTDToken::EntityDecl {
                name: "e".into(),
                parameter: false,
                external: false,
                public_id: None,
                system_id: None,
                value: Some("v".into()),
                notation: None,
            },
            DTDToken::EOF,
        ]
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::UnexpectedEOF, DTDErrorLevel::Error)]
    );
}

#[test]
fn null_character_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) = tokenize_with(&entities, "<!ENTITY n \"a\0b\">", true);
    assert_eq!(
        tokens[0],
        DTDToken::EntityDecl {
            name: "n".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("a\u{fffd}b".into()),
            notation: None,
        }
    );
    assert_eq!(
        handler.codes(),
        vec![(DTDError::NullCharacter, DTDErrorLevel::Error)]
    );
}

#[test]
fn duplicate_attribute_warning_tests() {
    let entities = EntityTable::new();
    let (tokens, handler) = tokenize_with(
        &entities,
        "<!ATTLIST a b CDATA #IMPLIED b CDATA #IMPLIED>",
        true,
    );
    assert!(matches!(&tokens[0], DTDToken::AttlistDecl { attributes, .. } if attributes.len() == 2));
    assert_eq!(
        handler.codes(),
        vec![(DTDError::DuplicateAttributeDecl, DTDErrorLevel::Warning)]
    );
}

#[test]
fn content_round_trip_tests() {
    let entities = EntityTable::new();
    let mut source = StringSource::from("<!ENTITY x \"y\">");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert!(matches!(tokenizer.get(), Ok(DTDToken::EntityDecl { .. })));
    assert_eq!(tokenizer.get(), Ok(DTDToken::EOF));
    assert_eq!(tokenizer.content(), "<!ENTITY x \"y\">");
}

#[test]
fn content_is_unexpanded_tests() {
    let mut entities = EntityTable::new();
    entities.declare_parameter("model", "(#PCDATA)");
    let mut source = StringSource::from("<!ELEMENT note %model;>");
    let mut tokenizer = DTDTokenizer::new(&entities, &mut source);
    assert_eq!(
        tokenizer.get(),
        Ok(DTDToken::ElementDecl {
            name: "note".into(),
            content: ContentSpec::Mixed {
                names: vec![],
                quantifier: Quantifier::One,
            },
        })
    );
    assert_eq!(tokenizer.get(), Ok(DTDToken::EOF));
    // splices never leak into the recorded source text
    assert_eq!(tokenizer.content(), "<!ELEMENT note %model;>");
}

#[test]
fn whole_subset_tests() {
    let subset = r#"<?xml version="1.0"?>
<!-- book catalog -->
<!ELEMENT catalog (book+)>
<!ELEMENT book (title, author*)>
<!ATTLIST book id ID #REQUIRED>
<!ELEMENT title (#PCDATA)>
<!ELEMENT author (#PCDATA)>
<!ENTITY publisher "Example Press">
<!NOTATION jpeg PUBLIC "JPG 1.0">
"#;
    let tokens = tokenize(subset, true);
    assert_eq!(tokens.len(), 10);
    assert_eq!(
        tokens[0],
        DTDToken::TextDecl {
            version: Some("1.0".into()),
            encoding: None,
        }
    );
    assert_eq!(
        tokens[1],
        DTDToken::Comment {
            data: " book catalog ".into(),
        }
    );
    assert_eq!(
        tokens[7],
        DTDToken::EntityDecl {
            name: "publisher".into(),
            parameter: false,
            external: false,
            public_id: None,
            system_id: None,
            value: Some("Example Press".into()),
            notation: None,
        }
    );
    assert_eq!(
        tokens[8],
        DTDToken::NotationDecl {
            name: "jpeg".into(),
            public_id: Some("JPG 1.0".into()),
            system_id: None,
        }
    );
    assert_eq!(tokens[9], DTDToken::EOF);
}
