//! Document templates: an output file name, a page size and an ordered
//! sequence of presentation blocks.

use oxidize_pdf::{Margins, Page};

use crate::block::{Block, Table};
use crate::style::TextStyle;

/// Supported page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// 595 x 842 points
    A4,
    /// 612 x 792 points
    Letter,
}

impl PageSize {
    /// Page width and height in points.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
        }
    }

    pub(crate) fn page(self) -> Page {
        match self {
            PageSize::A4 => Page::a4(),
            PageSize::Letter => Page::letter(),
        }
    }
}

/// The fixed structure for one mock document: metadata plus the block
/// sequence to render. Built once, consumed by [`crate::compose`], then
/// discarded.
#[derive(Debug, Clone)]
pub struct DocumentTemplate {
    file_name: String,
    title: String,
    author: Option<String>,
    subject: Option<String>,
    page_size: PageSize,
    margins: Margins,
    blocks: Vec<Block>,
}

impl DocumentTemplate {
    pub fn new(file_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            title: title.into(),
            author: None,
            subject: None,
            page_size: PageSize::A4,
            margins: Margins::default(),
            blocks: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Append a heading block.
    pub fn heading(&mut self, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.blocks.push(Block::Heading {
            text: text.into(),
            style,
        });
        self
    }

    /// Append a paragraph block.
    pub fn paragraph(&mut self, text: impl Into<String>, style: TextStyle) -> &mut Self {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            style,
        });
        self
    }

    /// Append a table block.
    pub fn table(&mut self, table: Table) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Append vertical whitespace, in points.
    pub fn spacer(&mut self, points: f64) -> &mut Self {
        self.blocks.push(Block::Spacer(points));
        self
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
