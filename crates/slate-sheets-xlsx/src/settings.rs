//! Serialization settings

use slate_sheets_core::DEFAULT_ROW_HEIGHT;

/// Which Excel release the worksheet part targets
///
/// Targeting 2010 adds the markup-compatibility namespaces on the root
/// element and the `x14ac:dyDescent` hint on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcelVersion {
    /// Excel 2007 document shape
    #[default]
    Excel2007,
    /// Excel 2010 document shape (mc/x14ac namespaces)
    Excel2010,
}

/// Page margins in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    /// Left margin
    pub left: f64,
    /// Right margin
    pub right: f64,
    /// Top margin
    pub top: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Header margin
    pub header: f64,
    /// Footer margin
    pub footer: f64,
}

impl Default for PageMargins {
    fn default() -> Self {
        // Excel's "Normal" margin preset.
        Self {
            left: 0.7,
            right: 0.7,
            top: 0.75,
            bottom: 0.75,
            header: 0.3,
            footer: 0.3,
        }
    }
}

/// Worksheet-wide presentation settings consumed by the serializer
///
/// Passed explicitly to [`WorksheetWriter`](crate::WorksheetWriter) so the
/// emission code has no ambient configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSettings {
    /// Target document shape
    pub excel_version: ExcelVersion,
    /// Default row height in points
    pub default_row_height: f64,
    /// Page margins
    pub margins: PageMargins,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            excel_version: ExcelVersion::default(),
            default_row_height: DEFAULT_ROW_HEIGHT,
            margins: PageMargins::default(),
        }
    }
}
