//! Turns a document template into rendered PDF pages.
//!
//! The composer owns only cursor arithmetic and page breaks. Text wrapping,
//! font metrics and byte-stream encoding stay inside the rendering library;
//! blocks are laid out top-down and a block that does not fit above the
//! bottom margin starts a new page. Blocks never split across pages.

use oxidize_pdf::{measure_text, Document, Page, TextAlign, TextFlowContext};

use crate::block::{Block, Cell, Table};
use crate::error::Result;
use crate::style::{bold_variant, TableStyle, TextStyle};
use crate::template::DocumentTemplate;

/// Render a template into an in-memory PDF document.
pub fn compose(template: &DocumentTemplate) -> Result<Document> {
    Composer::new(template).render()
}

struct Composer<'a> {
    template: &'a DocumentTemplate,
    doc: Document,
    page: Page,
    cursor_y: f64,
}

impl<'a> Composer<'a> {
    fn new(template: &'a DocumentTemplate) -> Self {
        let mut doc = Document::new();
        doc.set_title(template.title());
        if let Some(author) = template.author() {
            doc.set_author(author);
        }
        if let Some(subject) = template.subject() {
            doc.set_subject(subject);
        }

        let page = Self::fresh_page(template);
        let (_, height) = template.page_size().dimensions();
        let cursor_y = height - template.margins().top;

        Self {
            template,
            doc,
            page,
            cursor_y,
        }
    }

    fn fresh_page(template: &DocumentTemplate) -> Page {
        let mut page = template.page_size().page();
        let margins = template.margins();
        page.set_margins(margins.left, margins.right, margins.top, margins.bottom);
        page
    }

    fn top(&self) -> f64 {
        self.template.page_size().dimensions().1 - self.template.margins().top
    }

    fn bottom(&self) -> f64 {
        self.template.margins().bottom
    }

    fn left(&self) -> f64 {
        self.template.margins().left
    }

    fn content_width(&self) -> f64 {
        let (width, _) = self.template.page_size().dimensions();
        width - self.template.margins().left - self.template.margins().right
    }

    fn break_page(&mut self) {
        let finished = std::mem::replace(&mut self.page, Self::fresh_page(self.template));
        self.doc.add_page(finished);
        self.cursor_y = self.top();
    }

    fn render(mut self) -> Result<Document> {
        let template = self.template;
        for block in template.blocks() {
            match block {
                Block::Heading { text, style } | Block::Paragraph { text, style } => {
                    self.flow_text(text, style)?;
                }
                Block::Table(table) => self.render_table(table)?,
                Block::Spacer(points) => self.cursor_y -= *points,
            }
        }

        let mut doc = self.doc;
        doc.add_page(self.page);
        Ok(doc)
    }

    fn flow_text(&mut self, text: &str, style: &TextStyle) -> Result<()> {
        let advance = style.line_advance();

        // Blank paragraphs still take one line of vertical space.
        if text.trim().is_empty() {
            self.cursor_y -= advance + style.space_after;
            if self.cursor_y < self.bottom() {
                self.break_page();
            }
            return Ok(());
        }

        let mut flow = self.build_flow(text, style)?;
        let mut end_y = flow.cursor_position().1;

        // The lowest baseline written is one line above the final cursor.
        let fits = end_y + advance >= self.bottom();
        if !fits && self.cursor_y < self.top() {
            self.break_page();
            flow = self.build_flow(text, style)?;
            end_y = flow.cursor_position().1;
        }

        self.page.add_text_flow(&flow);
        self.cursor_y = end_y - style.space_after;
        Ok(())
    }

    fn build_flow(&self, text: &str, style: &TextStyle) -> Result<TextFlowContext> {
        let mut flow = self.page.text_flow();
        flow.set_font(style.font.clone(), style.size)
            .set_line_height(style.leading)
            .set_alignment(style.align)
            .at(self.left(), self.cursor_y);
        flow.write_wrapped(text)?;
        Ok(flow)
    }

    fn render_table(&mut self, table: &Table) -> Result<()> {
        if table.rows().is_empty() {
            return Ok(());
        }

        let height = table.height();
        if self.cursor_y - height < self.bottom() && self.cursor_y < self.top() {
            self.break_page();
        }

        let style = table.style().clone();
        let row_height = style.resolved_row_height();
        let total_width = table.width();
        // Tables are centered within the content area.
        let x0 = self.left() + ((self.content_width() - total_width) / 2.0).max(0.0);
        let top = self.cursor_y;
        let row_count = table.rows().len();

        {
            let graphics = self.page.graphics();

            if let Some(background) = style.header_background {
                graphics
                    .save_state()
                    .set_fill_color(background)
                    .rect(x0, top - row_height, total_width, row_height)
                    .fill()
                    .restore_state();
            }

            graphics
                .save_state()
                .set_stroke_color(style.border_color)
                .set_line_width(style.border_width);
            for row_index in 0..row_count {
                let row_top = top - row_index as f64 * row_height;
                let mut cell_x = x0;
                for &column_width in table.column_widths() {
                    graphics
                        .rect(cell_x, row_top - row_height, column_width, row_height)
                        .stroke();
                    cell_x += column_width;
                }
            }
            graphics.restore_state();
        }

        for (row_index, row) in table.rows().iter().enumerate() {
            let baseline =
                top - row_index as f64 * row_height - style.cell_padding - style.font_size;
            let mut cell_x = x0;
            for (cell, &column_width) in row.iter().zip(table.column_widths()) {
                self.draw_cell(cell, &style, cell_x, column_width, baseline)?;
                cell_x += column_width;
            }
        }

        self.cursor_y = top - height;
        Ok(())
    }

    fn draw_cell(
        &mut self,
        cell: &Cell,
        style: &TableStyle,
        cell_x: f64,
        column_width: f64,
        baseline: f64,
    ) -> Result<()> {
        if cell.text.is_empty() {
            return Ok(());
        }

        let font = if cell.bold {
            bold_variant(&style.font)
        } else {
            style.font.clone()
        };
        let text_width = measure_text(&cell.text, font.clone(), style.font_size);
        let inner_width = column_width - style.cell_padding * 2.0;
        let text_x = match cell.align {
            TextAlign::Center => cell_x + style.cell_padding + (inner_width - text_width) / 2.0,
            TextAlign::Right => cell_x + column_width - style.cell_padding - text_width,
            _ => cell_x + style.cell_padding,
        };

        self.page
            .text()
            .set_font(font, style.font_size)
            .at(text_x, baseline)
            .write(&cell.text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Cell, Table};
    use crate::style::TableStyle;

    fn lorem() -> &'static str {
        "The quick brown fox jumps over the lazy dog near the quiet river bank every single morning."
    }

    #[test]
    fn test_empty_template_renders_one_page() {
        let template = DocumentTemplate::new("Test.pdf", "Test");
        let doc = compose(&template).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_short_document_stays_on_one_page() {
        let mut template = DocumentTemplate::new("Test.pdf", "Test");
        template
            .heading("Heading", TextStyle::heading())
            .spacer(20.0)
            .paragraph(lorem(), TextStyle::body());
        let doc = compose(&template).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_long_document_paginates() {
        let mut template = DocumentTemplate::new("Test.pdf", "Test");
        for _ in 0..80 {
            template.paragraph(lorem(), TextStyle::body());
        }
        let doc = compose(&template).unwrap();
        assert!(doc.page_count() >= 2);
    }

    #[test]
    fn test_blank_paragraphs_advance_the_cursor() {
        let mut template = DocumentTemplate::new("Test.pdf", "Test");
        for _ in 0..200 {
            template.paragraph("", TextStyle::body());
        }
        let doc = compose(&template).unwrap();
        assert!(doc.page_count() >= 2);
    }

    #[test]
    fn test_table_breaks_to_next_page_when_out_of_room() {
        let mut table = Table::new(vec![144.0, 216.0]).with_style(TableStyle {
            font_size: 11.0,
            ..Default::default()
        });
        for _ in 0..5 {
            table
                .add_row(vec![Cell::label("Key:"), Cell::new("value")])
                .unwrap();
        }

        let mut template = DocumentTemplate::new("Test.pdf", "Test");
        template.spacer(650.0).table(table);
        let doc = compose(&template).unwrap();
        assert_eq!(doc.page_count(), 2);
    }
}
