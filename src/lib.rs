//! # vault-fixtures
//!
//! Generates mock PDF documents for exercising document-vault ingestion in
//! tests: a life insurance policy, a last will and testament, and a state ID
//! card. Each document is described as a template of presentation blocks
//! (headings, tables, paragraphs, spacers) and rendered to disk through
//! [`oxidize_pdf`].
//!
//! Fixture content is fixed. Output files have deterministic names and are
//! overwritten on every run; only embedded dates change between runs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vault_fixtures::generate_all;
//!
//! fn main() -> vault_fixtures::Result<()> {
//!     for path in generate_all("documents")? {
//!         println!("Created: {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Custom templates
//!
//! The block model is generic; additional mock documents can be assembled
//! from the same pieces:
//!
//! ```no_run
//! use vault_fixtures::{compose, DocumentTemplate, TextStyle};
//!
//! # fn main() -> vault_fixtures::Result<()> {
//! let mut template = DocumentTemplate::new("Cover_Letter.pdf", "Cover Letter");
//! template
//!     .heading("Acme Insurance", TextStyle::heading())
//!     .spacer(20.0)
//!     .paragraph("To whom it may concern...", TextStyle::body());
//!
//! let mut doc = compose(&template)?;
//! doc.save("documents/Cover_Letter.pdf")?;
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod compose;
pub mod error;
pub mod fixtures;
pub mod style;
pub mod template;

pub use block::{Block, Cell, Table};
pub use compose::compose;
pub use error::{FixtureError, Result};
pub use fixtures::{generate, generate_all, DocumentKind};
pub use style::{TableStyle, TextStyle};
pub use template::{DocumentTemplate, PageSize};

/// Current version of vault-fixtures
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_kind_count_matches_fixture_set() {
        assert_eq!(DocumentKind::ALL.len(), 3);
    }
}
