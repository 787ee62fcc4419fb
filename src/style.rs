//! Style bundles attached to presentation blocks.
//!
//! A style is purely presentational: fonts, sizes, alignment, spacing and
//! table decoration. The named constructors mirror the handful of styles the
//! fixture documents actually use; `with_*` builders derive variants from
//! them.

use oxidize_pdf::{Color, Font, TextAlign};

/// Visual attributes for a heading or paragraph block.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font used for every line of the block
    pub font: Font,
    /// Font size in points
    pub size: f64,
    /// Horizontal alignment within the content area
    pub align: TextAlign,
    /// Line height as a multiple of the font size
    pub leading: f64,
    /// Vertical gap after the block, in points
    pub space_after: f64,
}

impl TextStyle {
    /// Large centered bold title (document title pages).
    pub fn title() -> Self {
        Self {
            font: Font::HelveticaBold,
            size: 24.0,
            align: TextAlign::Center,
            leading: 1.2,
            space_after: 30.0,
        }
    }

    /// Centered bold section heading.
    pub fn heading() -> Self {
        Self {
            font: Font::HelveticaBold,
            size: 16.0,
            align: TextAlign::Center,
            leading: 1.2,
            space_after: 12.0,
        }
    }

    /// Left-aligned body text.
    pub fn body() -> Self {
        Self {
            font: Font::Helvetica,
            size: 11.0,
            align: TextAlign::Left,
            leading: 1.2,
            space_after: 6.0,
        }
    }

    /// Small centered print (notices, disclaimers).
    pub fn small() -> Self {
        Self {
            font: Font::Helvetica,
            size: 9.0,
            align: TextAlign::Center,
            leading: 1.2,
            space_after: 4.0,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_space_after(mut self, space_after: f64) -> Self {
        self.space_after = space_after;
        self
    }

    /// Baseline-to-baseline distance for one line of this style.
    pub(crate) fn line_advance(&self) -> f64 {
        self.size * self.leading
    }
}

/// Visual attributes for a table block.
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Grid line width in points
    pub border_width: f64,
    /// Grid line color
    pub border_color: Color,
    /// Padding inside each cell, in points
    pub cell_padding: f64,
    /// Fixed row height in points, or 0.0 for auto height
    pub row_height: f64,
    /// Font for cell text
    pub font: Font,
    /// Font size for cell text, in points
    pub font_size: f64,
    /// Background fill for the first row, if any
    pub header_background: Option<Color>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            border_width: 1.0,
            border_color: Color::black(),
            cell_padding: 5.0,
            row_height: 0.0, // Auto
            font: Font::Helvetica,
            font_size: 10.0,
            header_background: None,
        }
    }
}

impl TableStyle {
    /// Row height actually used when laying the table out.
    pub fn resolved_row_height(&self) -> f64 {
        if self.row_height > 0.0 {
            self.row_height
        } else {
            self.font_size + self.cell_padding * 2.0
        }
    }
}

/// Bold counterpart of a standard font, for emphasized cells.
pub fn bold_variant(font: &Font) -> Font {
    match font {
        Font::Helvetica => Font::HelveticaBold,
        Font::TimesRoman => Font::TimesBold,
        Font::Courier => Font::CourierBold,
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_style_defaults() {
        let style = TextStyle::body();
        assert_eq!(style.size, 11.0);
        assert_eq!(style.align, TextAlign::Left);
        assert_eq!(style.line_advance(), 11.0 * 1.2);
    }

    #[test]
    fn test_style_builders() {
        let style = TextStyle::heading().with_size(20.0).with_space_after(10.0);
        assert_eq!(style.size, 20.0);
        assert_eq!(style.space_after, 10.0);
        assert_eq!(style.font, Font::HelveticaBold);
    }

    #[test]
    fn test_auto_row_height() {
        let style = TableStyle {
            font_size: 11.0,
            cell_padding: 5.0,
            ..Default::default()
        };
        assert_eq!(style.resolved_row_height(), 21.0);
    }

    #[test]
    fn test_fixed_row_height_wins() {
        let style = TableStyle {
            row_height: 30.0,
            ..Default::default()
        };
        assert_eq!(style.resolved_row_height(), 30.0);
    }

    #[test]
    fn test_bold_variant_mapping() {
        assert_eq!(bold_variant(&Font::Helvetica), Font::HelveticaBold);
        assert_eq!(bold_variant(&Font::TimesRoman), Font::TimesBold);
        assert_eq!(bold_variant(&Font::Courier), Font::CourierBold);
        assert_eq!(bold_variant(&Font::Symbol), Font::Symbol);
    }
}
