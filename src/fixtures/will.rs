//! Last will and testament fixture.

use oxidize_pdf::Font;

use super::DocumentKind;
use crate::error::Result;
use crate::style::TextStyle;
use crate::template::DocumentTemplate;

const CLAUSES: [(&str, &str); 4] = [
    (
        "CLAUSE 1: REAL PROPERTY",
        "I give, devise, and bequeath all my real property located at 123 Compassion Way, \
         Anytown, ST 12345, to my daughter, Sarah Smith-Jones, absolutely and without \
         conditions.",
    ),
    (
        "CLAUSE 2: PERSONAL PROPERTY",
        "I give, devise, and bequeath all my personal property, including but not limited to \
         furniture, clothing, jewelry, and household items, to my daughter, Sarah Smith-Jones.",
    ),
    (
        "CLAUSE 3: FINANCIAL ASSETS",
        "I give, devise, and bequeath all my financial assets, including bank accounts, \
         investments, and retirement accounts, to be divided equally among my children.",
    ),
    (
        "CLAUSE 4: FUNERAL ARRANGEMENTS",
        "It is my wish that my remains be cremated and that my ashes be scattered in the \
         Pacific Ocean at a location to be determined by my Executor.",
    ),
];

const SIGNATURE_LINES: [&str; 15] = [
    "_______________________________________",
    "John Robert Smith",
    "Testator",
    "",
    "Date: _______________",
    "",
    "_______________________________________",
    "Sarah Smith-Jones",
    "Witness",
    "",
    "Date: _______________",
    "",
    "_______________________________________",
    "Notary Public",
    "My Commission Expires: _______________",
];

pub(super) fn template() -> Result<DocumentTemplate> {
    let title_style = TextStyle::title().with_size(28.0).with_space_after(20.0);
    let label_style = TextStyle::body()
        .with_font(Font::HelveticaBold)
        .with_size(12.0)
        .with_space_after(8.0);
    let body_style = TextStyle::body().with_size(12.0).with_space_after(8.0);
    let clause_style = TextStyle::body().with_size(12.0).with_space_after(12.0);

    let mut template = DocumentTemplate::new(
        DocumentKind::LastWillAndTestament.file_name(),
        "Last Will and Testament",
    )
    .with_author("John Robert Smith")
    .with_subject("Mock last will and testament fixture");

    template
        .heading("LAST WILL AND TESTAMENT", title_style.clone())
        .heading("OF JOHN ROBERT SMITH", title_style)
        .spacer(30.0)
        .paragraph("EXECUTOR:", label_style.clone())
        .paragraph(
            "I hereby appoint my daughter, Sarah Smith-Jones, as the Executor of this Will.",
            body_style.clone(),
        )
        .spacer(20.0);

    for (index, (heading, text)) in CLAUSES.iter().enumerate() {
        template
            .paragraph(*heading, label_style.clone())
            .paragraph(*text, clause_style.clone());
        let last = index == CLAUSES.len() - 1;
        template.spacer(if last { 30.0 } else { 15.0 });
    }

    template.paragraph("SIGNATURE", label_style);
    for line in SIGNATURE_LINES {
        template.paragraph(line, body_style.clone());
    }

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;

    #[test]
    fn test_will_contains_all_clauses() {
        let template = template().unwrap();
        let paragraphs: Vec<&str> = template
            .blocks()
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        for (heading, _) in CLAUSES {
            assert!(paragraphs.contains(&heading), "missing {heading}");
        }
        assert!(paragraphs.contains(&"Notary Public"));
    }
}
