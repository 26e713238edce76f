//! One `property: value` item of a `style` attribute.

/// A single declaration parsed from a style attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, ASCII lowercase.
    pub property: String,
    /// Raw value trimmed of surrounding ASCII whitespace.
    pub value: String,
}

impl Declaration {
    pub fn new(property: &str, value: &str) -> Self {
        Self {
            property: property.trim_matches(is_ascii_whitespace).to_ascii_lowercase(),
            value: value.trim_matches(is_ascii_whitespace).to_owned(),
        }
    }

    /// Read one `;`-separated item, split on its first `:`.
    ///
    /// `None` for items with no colon, a blank property or a blank value.
    pub fn parse(item: &str) -> Option<Self> {
        let (property, value) = item.split_once(':')?;
        let declaration = Self::new(property, value);
        if declaration.property.is_empty() || declaration.value.is_empty() {
            return None;
        }
        Some(declaration)
    }
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
pub(crate) const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}
