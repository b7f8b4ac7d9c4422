//! Content models for element type declarations.

/// Repetition suffix attached to a content particle or group.
///
/// ```text
/// [47] children ::= (choice | seq) ('?' | '*' | '+')?
/// [48] cp       ::= (Name | choice | seq) ('?' | '*' | '+')?
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Quantifier {
    #[default]
    One,
    /// `?`
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::One => Ok(()),
            Self::ZeroOrOne => write!(f, "?"),
            Self::ZeroOrMore => write!(f, "*"),
            Self::OneOrMore => write!(f, "+"),
        }
    }
}

/// One node of an element-content model.
///
/// All children of a [`Sequence`](ContentParticle::Sequence) are joined by
/// `,` and all children of a [`Choice`](ContentParticle::Choice) by `|`;
/// the scanner rejects mixed connectors at a single nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentParticle {
    Name {
        name: Box<str>,
        quantifier: Quantifier,
    },
    Sequence {
        children: Vec<ContentParticle>,
        quantifier: Quantifier,
    },
    Choice {
        children: Vec<ContentParticle>,
        quantifier: Quantifier,
    },
}

impl ContentParticle {
    pub fn quantifier(&self) -> Quantifier {
        match self {
            Self::Name { quantifier, .. }
            | Self::Sequence { quantifier, .. }
            | Self::Choice { quantifier, .. } => *quantifier,
        }
    }
}

impl std::fmt::Display for ContentParticle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name { name, quantifier } => write!(f, "{name}{quantifier}"),
            Self::Sequence {
                children,
                quantifier,
            } => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "){quantifier}")
            }
            Self::Choice {
                children,
                quantifier,
            } => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, "){quantifier}")
            }
        }
    }
}

/// The content specification of an element type declaration.
///
/// # Reference
/// - [3.2 Element Type Declarations](https://www.w3.org/TR/xml/#elemdecls)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSpec {
    /// `'EMPTY'`
    EMPTY,
    /// `'ANY'`
    ANY,
    /// [Mixed Content](https://www.w3.org/TR/xml/#sec-mixed-content)
    ///
    /// The quantifier is [`ZeroOrMore`](Quantifier::ZeroOrMore) for
    /// `(#PCDATA|..)*` and [`One`](Quantifier::One) for a bare `(#PCDATA)`.
    Mixed {
        names: Vec<Box<str>>,
        quantifier: Quantifier,
    },
    /// [Element Content](https://www.w3.org/TR/xml/#sec-element-content)
    Children(ContentParticle),
}

impl std::fmt::Display for ContentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EMPTY => write!(f, "EMPTY"),
            Self::ANY => write!(f, "ANY"),
            Self::Mixed { names, quantifier } => {
                write!(f, "(#PCDATA")?;
                for name in names {
                    write!(f, "|{name}")?;
                }
                write!(f, "){quantifier}")
            }
            Self::Children(children) => {
                if matches!(children, ContentParticle::Name { .. }) {
                    write!(f, "({children})")
                } else {
                    write!(f, "{children}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(name: &str, quantifier: Quantifier) -> ContentParticle {
        ContentParticle::Name {
            name: name.into(),
            quantifier,
        }
    }

    #[test]
    fn display_tests() {
        assert_eq!(ContentSpec::EMPTY.to_string(), "EMPTY");
        assert_eq!(
            ContentSpec::Mixed {
                names: vec![],
                quantifier: Quantifier::One
            }
            .to_string(),
            "(#PCDATA)"
        );
        assert_eq!(
            ContentSpec::Mixed {
                names: vec!["em".into(), "strong".into()],
                quantifier: Quantifier::ZeroOrMore
            }
            .to_string(),
            "(#PCDATA|em|strong)*"
        );

        let model = ContentSpec::Children(ContentParticle::Sequence {
            children: vec![
                name("title", Quantifier::One),
                name("author", Quantifier::OneOrMore),
                ContentParticle::Choice {
                    children: vec![name("chapter", Quantifier::ZeroOrMore), name("part", Quantifier::One)],
                    quantifier: Quantifier::ZeroOrOne,
                },
            ],
            quantifier: Quantifier::One,
        });
        assert_eq!(model.to_string(), "(title,author+,(chapter*|part)?)");
    }
}
