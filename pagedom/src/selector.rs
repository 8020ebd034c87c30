use crate::element::Element;

/// Errors produced when parsing a selector expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unclosed attribute bracket in '{0}'")]
    UnclosedBracket(String),

    #[error("malformed attribute selector '{0}'")]
    MalformedAttribute(String),
}

/// A parsed lookup expression over the element tree.
///
/// Covers the page-contract subset: `#id`, `.class`, `tag`, `tag.class`,
/// `[attr]`, `tag[attr]`, and `tag[attr="value"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    TagClass {
        tag: String,
        class: String,
    },
    /// Attribute presence/value match; `tag` of `None` matches any tag.
    Attr {
        tag: Option<String>,
        attr: String,
        value: Option<String>,
    },
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        if let Some(id) = input.strip_prefix('#') {
            if id.is_empty() {
                return Err(SelectorError::Empty);
            }
            return Ok(Self::Id(id.to_string()));
        }

        if let Some(class) = input.strip_prefix('.') {
            if class.is_empty() {
                return Err(SelectorError::Empty);
            }
            return Ok(Self::Class(class.to_string()));
        }

        if let Some(bracket) = input.find('[') {
            let tag = if bracket == 0 {
                None
            } else {
                Some(input[..bracket].to_string())
            };
            let rest = &input[bracket + 1..];
            let Some(close) = rest.find(']') else {
                return Err(SelectorError::UnclosedBracket(input.to_string()));
            };
            if !rest[close + 1..].is_empty() {
                return Err(SelectorError::MalformedAttribute(input.to_string()));
            }
            let body = &rest[..close];
            return match body.split_once('=') {
                None => {
                    if body.is_empty() {
                        Err(SelectorError::MalformedAttribute(input.to_string()))
                    } else {
                        Ok(Self::Attr {
                            tag,
                            attr: body.to_string(),
                            value: None,
                        })
                    }
                }
                Some((attr, value)) => {
                    if attr.is_empty() {
                        return Err(SelectorError::MalformedAttribute(input.to_string()));
                    }
                    let value = value
                        .strip_prefix('"')
                        .and_then(|v| v.strip_suffix('"'))
                        .or_else(|| {
                            value.strip_prefix('\'').and_then(|v| v.strip_suffix('\''))
                        })
                        .unwrap_or(value);
                    Ok(Self::Attr {
                        tag,
                        attr: attr.to_string(),
                        value: Some(value.to_string()),
                    })
                }
            };
        }

        if let Some((tag, class)) = input.split_once('.') {
            if tag.is_empty() || class.is_empty() {
                return Err(SelectorError::Empty);
            }
            return Ok(Self::TagClass {
                tag: tag.to_string(),
                class: class.to_string(),
            });
        }

        Ok(Self::Tag(input.to_string()))
    }

    /// Whether this selector matches the given element.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
            Self::Tag(tag) => element.tag == *tag,
            Self::TagClass { tag, class } => element.tag == *tag && element.has_class(class),
            Self::Attr { tag, attr, value } => {
                tag.as_ref().is_none_or(|t| element.tag == *t)
                    && match value {
                        None => element.attrs.contains_key(attr),
                        Some(v) => element.get_attr(attr) == Some(v.as_str()),
                    }
            }
        }
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
