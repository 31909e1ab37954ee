//! Worksheet XML writer
//!
//! Emits the `<worksheet>` element tree in the fixed order Excel expects:
//! dimension, sheetViews, sheetFormatPr, cols, sheetData, pageMargins.
//! Attribute order and default-value elision follow the reference output
//! exactly; consumers are strict about both.

use std::io::{Cursor, Write};

use slate_sheets_core::{
    Cell, CellAddress, ColumnRange, RowProperties, StyleResolver, Worksheet, DEFAULT_COL_WIDTH,
};

use crate::error::XlsxResult;
use crate::settings::{ExcelVersion, SheetSettings};
use crate::spans::RowSpans;
use crate::xml::XmlWriter;

const XMLNS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const XMLNS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const XMLNS_MC: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
const XMLNS_X14AC: &str = "http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac";

/// Serializer for one worksheet part
///
/// Borrows the finished [`Worksheet`] and the external style registry; all
/// presentation defaults come from [`SheetSettings`]. A writer is cheap to
/// construct and a single [`write`](Self::write) call produces the whole
/// part.
#[derive(Debug)]
pub struct WorksheetWriter<'a, R: StyleResolver> {
    sheet: &'a Worksheet,
    styles: &'a R,
    settings: SheetSettings,
}

impl<'a, R: StyleResolver> WorksheetWriter<'a, R> {
    /// Create a writer with default settings
    pub fn new(sheet: &'a Worksheet, styles: &'a R) -> Self {
        Self::with_settings(sheet, styles, SheetSettings::default())
    }

    /// Create a writer with explicit settings
    pub fn with_settings(sheet: &'a Worksheet, styles: &'a R, settings: SheetSettings) -> Self {
        Self {
            sheet,
            styles,
            settings,
        }
    }

    /// Serialize the worksheet part into a sink
    pub fn write<W: Write>(&self, sink: W) -> XlsxResult<()> {
        log::debug!(
            "writing worksheet part: {} cells, {} comments, {} column ranges",
            self.sheet.cells().cell_count(),
            self.sheet.comments().count(),
            self.sheet.columns().ranges().len(),
        );

        let mut xml = XmlWriter::new(sink);

        xml.declaration()?;
        self.write_worksheet_start(&mut xml)?;
        self.write_dimension(&mut xml)?;
        self.write_sheet_views(&mut xml)?;
        self.write_sheet_format_pr(&mut xml)?;
        self.write_cols(&mut xml)?;
        self.write_sheet_data(&mut xml)?;
        self.write_page_margins(&mut xml)?;
        xml.end_element("worksheet")?;

        Ok(())
    }

    /// Serialize the worksheet part to a string
    pub fn write_to_string(&self) -> XlsxResult<String> {
        let mut buf = Cursor::new(Vec::new());
        self.write(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf.into_inner()).into_owned())
    }

    /// Write the `<worksheet>` root element with its namespaces
    fn write_worksheet_start<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        let mut attrs = vec![("xmlns", XMLNS), ("xmlns:r", XMLNS_R)];

        // Extra namespaces for the 2010 document shape.
        if self.settings.excel_version == ExcelVersion::Excel2010 {
            attrs.push(("xmlns:mc", XMLNS_MC));
            attrs.push(("xmlns:x14ac", XMLNS_X14AC));
            attrs.push(("mc:Ignorable", "x14ac"));
        }

        xml.start_element("worksheet", &attrs)
    }

    /// Write the `<dimension>` element
    ///
    /// An untouched worksheet references "A1". Bounds touched on only one
    /// axis (via set_column/set_row) span index 0 on the other axis. A
    /// rectangle collapses to a single-cell reference when min == max on
    /// both axes.
    fn write_dimension<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        let row_bounds = self.sheet.dimension().row_bounds();
        let col_bounds = self.sheet.dimension().col_bounds();

        let reference = match (row_bounds, col_bounds) {
            (None, None) => "A1".to_string(),
            (None, Some((col_min, col_max))) => range_ref(0, col_min, 0, col_max),
            (Some((row_min, row_max)), None) => range_ref(row_min, 0, row_max, 0),
            (Some((row_min, row_max)), Some((col_min, col_max))) => {
                range_ref(row_min, col_min, row_max, col_max)
            }
        };

        xml.empty_element("dimension", &[("ref", &reference)])
    }

    /// Write the `<sheetViews>` element and its single view
    fn write_sheet_views<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        xml.start_element("sheetViews", &[])?;
        xml.empty_element(
            "sheetView",
            &[("tabSelected", "1"), ("workbookViewId", "0")],
        )?;
        xml.end_element("sheetViews")
    }

    /// Write the `<sheetFormatPr>` element
    fn write_sheet_format_pr<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        let height = self.settings.default_row_height.to_string();
        xml.empty_element("sheetFormatPr", &[("defaultRowHeight", &height)])
    }

    /// Write the `<cols>` element, one `<col>` per configured range
    fn write_cols<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        if self.sheet.columns().is_empty() {
            return Ok(());
        }

        xml.start_element("cols", &[])?;
        for range in self.sheet.columns().ranges() {
            self.write_col(xml, range)?;
        }
        xml.end_element("cols")
    }

    /// Write one `<col>` element
    fn write_col<W: Write>(&self, xml: &mut XmlWriter<W>, range: &ColumnRange) -> XlsxResult<()> {
        let xf_index = range.style.map_or(0, |s| self.styles.xf_index(s));

        let mut custom_width = true;
        let width = match range.width {
            None if !range.hidden => {
                custom_width = false;
                DEFAULT_COL_WIDTH
            }
            None => 0.0,
            Some(w) => {
                if (w - DEFAULT_COL_WIDTH).abs() < f64::EPSILON {
                    // Width given but equal to the default.
                    custom_width = false;
                }
                w
            }
        };

        // Convert from character units to the stored width. Calibri 11 has
        // a 7 pixel maximum digit width plus 5 pixels of cell padding, and
        // the result is rounded down to 1/256ths.
        let width = if width > 0.0 {
            ((width * 7.0 + 5.0) / 7.0 * 256.0).trunc() / 256.0
        } else {
            width
        };

        let min = (range.first_col + 1).to_string();
        let max = (range.last_col + 1).to_string();
        let width_str = width.to_string();
        let style_str = xf_index.to_string();
        let level_str = range.outline_level.to_string();

        let mut attrs: Vec<(&str, &str)> =
            vec![("min", &min), ("max", &max), ("width", &width_str)];
        if xf_index != 0 {
            attrs.push(("style", &style_str));
        }
        if range.hidden {
            attrs.push(("hidden", "1"));
        }
        if custom_width {
            attrs.push(("customWidth", "1"));
        }
        if range.outline_level > 0 {
            attrs.push(("outlineLevel", &level_str));
        }

        xml.empty_element("col", &attrs)
    }

    /// Write the `<sheetData>` element
    fn write_sheet_data<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        if self.sheet.dimension().row_bounds().is_none() {
            // No row was ever referenced, so there is nothing to emit.
            return xml.empty_element("sheetData", &[]);
        }

        xml.start_element("sheetData", &[])?;
        self.write_rows(xml)?;
        xml.end_element("sheetData")
    }

    /// Write all rows within the tracked dimension
    fn write_rows<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        let spans = RowSpans::calculate(self.sheet);
        log::trace!("{} row blocks carry span hints", spans.len());

        let Some((row_min, row_max)) = self.sheet.dimension().row_bounds() else {
            return Ok(());
        };
        let col_bounds = self.sheet.dimension().col_bounds();

        for row in row_min..=row_max {
            let properties = self.sheet.row_properties(row);
            let cells = self.sheet.cells().row(row);
            let has_comments = self.sheet.comments().row(row).is_some();

            // Only rows with explicit properties, comments or cell data are
            // emitted; everything else inside the dimension stays implicit.
            if properties.is_none() && !has_comments && cells.is_none() {
                continue;
            }

            let span = spans.get(row / 16);

            match (cells, col_bounds) {
                (Some(cells), Some((col_min, col_max))) => {
                    self.write_row(xml, row, span, properties, false)?;
                    for (&col, cell) in cells.range(col_min..=col_max) {
                        self.write_cell(xml, row, col, cell)?;
                    }
                    xml.end_element("row")?;
                }
                // Blank row carrying properties or comments only. Cell
                // writes record both axes, so (Some(_), None) never occurs.
                (None, _) | (Some(_), None) => {
                    self.write_row(xml, row, span, properties, true)?;
                }
            }
        }

        Ok(())
    }

    /// Write a `<row>` start tag (or self-closing tag for blank rows)
    fn write_row<W: Write>(
        &self,
        xml: &mut XmlWriter<W>,
        row: u32,
        span: Option<&str>,
        properties: Option<&RowProperties>,
        empty: bool,
    ) -> XlsxResult<()> {
        let defaults = RowProperties::default();
        let properties = properties.unwrap_or(&defaults);

        let height = properties
            .height
            .unwrap_or(self.settings.default_row_height);
        let custom_height = (height - self.settings.default_row_height).abs() > 0.001;
        let xf_index = properties.style.map_or(0, |s| self.styles.xf_index(s));

        let r = (row + 1).to_string();
        let style_str = xf_index.to_string();
        let height_str = height.to_string();
        let level_str = properties.outline_level.to_string();

        let mut attrs: Vec<(&str, &str)> = vec![("r", &r)];
        if let Some(span) = span {
            attrs.push(("spans", span));
        }
        if xf_index != 0 {
            attrs.push(("s", &style_str));
        }
        if properties.style.is_some() {
            attrs.push(("customFormat", "1"));
        }
        if custom_height {
            attrs.push(("ht", &height_str));
        }
        if properties.hidden {
            attrs.push(("hidden", "1"));
        }
        if custom_height {
            attrs.push(("customHeight", "1"));
        }
        if properties.outline_level > 0 {
            attrs.push(("outlineLevel", &level_str));
        }
        if properties.collapsed {
            attrs.push(("collapsed", "1"));
        }
        if self.settings.excel_version == ExcelVersion::Excel2010 {
            attrs.push(("x14ac:dyDescent", "0.25"));
        }

        if empty {
            xml.empty_element("row", &attrs)
        } else {
            xml.start_element("row", &attrs)
        }
    }

    /// Write one `<c>` element
    ///
    /// This is the innermost loop of serialization. The style index falls
    /// back from the cell to its row, then to its column.
    fn write_cell<W: Write>(
        &self,
        xml: &mut XmlWriter<W>,
        row: u32,
        col: u16,
        cell: &Cell,
    ) -> XlsxResult<()> {
        let reference = CellAddress::new(row, col).to_a1_string();
        let xf_index = self.cell_xf_index(row, col, cell);
        let style_str = xf_index.to_string();

        let mut attrs: Vec<(&str, &str)> = vec![("r", &reference)];
        if xf_index != 0 {
            attrs.push(("s", &style_str));
        }

        match cell {
            Cell::Number { value, .. } => {
                xml.start_element("c", &attrs)?;
                xml.data_element("v", &value.to_string(), &[])?;
                xml.end_element("c")
            }
            Cell::String { index, .. } | Cell::RichString { index, .. } => {
                attrs.push(("t", "s"));
                xml.start_element("c", &attrs)?;
                xml.data_element("v", &index.to_string(), &[])?;
                xml.end_element("c")
            }
            Cell::Formula {
                formula, result, ..
            } => {
                xml.start_element("c", &attrs)?;
                xml.data_element("f", formula, &[])?;
                xml.data_element("v", &result.to_string(), &[])?;
                xml.end_element("c")
            }
            Cell::Boolean { value, .. } => {
                attrs.push(("t", "b"));
                xml.start_element("c", &attrs)?;
                xml.data_element("v", if *value { "1" } else { "0" }, &[])?;
                xml.end_element("c")
            }
            Cell::Blank { .. } => xml.empty_element("c", &attrs),
        }
    }

    /// Resolve the effective xf index for a cell
    fn cell_xf_index(&self, row: u32, col: u16, cell: &Cell) -> u32 {
        if let Some(style) = cell.style() {
            return self.styles.xf_index(style);
        }
        if let Some(style) = self.sheet.row_properties(row).and_then(|p| p.style) {
            return self.styles.xf_index(style);
        }
        if let Some(style) = self.sheet.columns().style(col) {
            return self.styles.xf_index(style);
        }
        0
    }

    /// Write the `<pageMargins>` element
    fn write_page_margins<W: Write>(&self, xml: &mut XmlWriter<W>) -> XlsxResult<()> {
        let margins = self.settings.margins;
        let left = margins.left.to_string();
        let right = margins.right.to_string();
        let top = margins.top.to_string();
        let bottom = margins.bottom.to_string();
        let header = margins.header.to_string();
        let footer = margins.footer.to_string();

        xml.empty_element(
            "pageMargins",
            &[
                ("left", &left),
                ("right", &right),
                ("top", &top),
                ("bottom", &bottom),
                ("header", &header),
                ("footer", &footer),
            ],
        )
    }
}

/// Build an A1-style reference for a rectangle, collapsing to a single
/// cell when both axes have min == max
fn range_ref(row_min: u32, col_min: u16, row_max: u32, col_max: u16) -> String {
    if row_min == row_max && col_min == col_max {
        CellAddress::new(row_min, col_min).to_a1_string()
    } else {
        format!(
            "{}:{}",
            CellAddress::new(row_min, col_min),
            CellAddress::new(row_max, col_max)
        )
    }
}
