//! Cell value variants

use crate::style::StyleRef;

/// A written cell: a tagged value plus an optional style handle
///
/// Only explicitly written cells exist in the table; absence means "empty",
/// not "zero". String-like variants carry the index the enclosing workbook
/// assigned in its shared-string table, since string interning is not this
/// crate's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Numeric value (all numbers stored as f64)
    Number {
        /// The value
        value: f64,
        /// Optional style handle
        style: Option<StyleRef>,
    },

    /// Shared string, already interned by the workbook
    String {
        /// Index into the workbook's shared-string table
        index: u32,
        /// Optional style handle
        style: Option<StyleRef>,
    },

    /// Rich-text string, also interned by the workbook
    RichString {
        /// Index into the workbook's shared-string table
        index: u32,
        /// Optional style handle
        style: Option<StyleRef>,
    },

    /// Formula with its cached result
    Formula {
        /// Formula text without the leading `=`
        formula: String,
        /// Last calculated value
        result: f64,
        /// Optional style handle
        style: Option<StyleRef>,
    },

    /// Boolean value (TRUE/FALSE)
    Boolean {
        /// The value
        value: bool,
        /// Optional style handle
        style: Option<StyleRef>,
    },

    /// Blank cell; only stored when styled, so the style is mandatory
    Blank {
        /// Style handle
        style: StyleRef,
    },
}

impl Cell {
    /// The cell's own style handle, if any
    pub fn style(&self) -> Option<StyleRef> {
        match self {
            Cell::Number { style, .. }
            | Cell::String { style, .. }
            | Cell::RichString { style, .. }
            | Cell::Formula { style, .. }
            | Cell::Boolean { style, .. } => *style,
            Cell::Blank { style } => Some(*style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_accessor() {
        let styled = Cell::Number {
            value: 1.0,
            style: Some(StyleRef::new(3)),
        };
        assert_eq!(styled.style(), Some(StyleRef::new(3)));

        let unstyled = Cell::Boolean {
            value: true,
            style: None,
        };
        assert_eq!(unstyled.style(), None);

        let blank = Cell::Blank {
            style: StyleRef::new(7),
        };
        assert_eq!(blank.style(), Some(StyleRef::new(7)));
    }
}
