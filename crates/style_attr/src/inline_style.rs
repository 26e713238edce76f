//! An editable view of an element's inline style.

use crate::declaration::Declaration;
use std::fmt;

/// Inline style declarations in source order, one per property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value.
    ///
    /// Items are split on `;`; malformed items are skipped. A repeated
    /// property keeps its last value, at the position of that last
    /// occurrence.
    pub fn parse(attribute: &str) -> Self {
        let mut style = Self::new();
        for declaration in attribute.split(';').filter_map(Declaration::parse) {
            style.remove(&declaration.property);
            style.declarations.push(declaration);
        }
        style
    }

    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl_item| decl_item.property.eq_ignore_ascii_case(property))
            .map(|decl_item| decl_item.value.as_str())
    }

    /// Declare `property: value`, replacing an existing declaration in place.
    pub fn set(&mut self, property: &str, value: &str) {
        let replacement = Declaration::new(property, value);
        if let Some(existing) = self
            .declarations
            .iter_mut()
            .find(|decl_item| decl_item.property == replacement.property)
        {
            *existing = replacement;
        } else {
            self.declarations.push(replacement);
        }
    }

    /// Drop `property`, returning its previous value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self
            .declarations
            .iter()
            .position(|decl_item| decl_item.property.eq_ignore_ascii_case(property))?;
        Some(self.declarations.remove(index).value)
    }

    /// Set `property` when `value` is present, remove it otherwise.
    ///
    /// Mirrors assigning `null` to a CSSOM style property.
    pub fn assign(&mut self, property: &str, value: Option<&str>) {
        match value {
            Some(text) => self.set(property, text),
            None => {
                self.remove(property);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, decl_item) in self.declarations.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{}: {};", decl_item.property, decl_item.value)?;
        }
        Ok(())
    }
}
