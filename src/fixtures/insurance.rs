//! Life insurance policy fixture.

use chrono::Local;
use oxidize_pdf::TextAlign;

use super::{light_grey, DocumentKind, INCH};
use crate::block::{Cell, Table};
use crate::error::Result;
use crate::style::{TableStyle, TextStyle};
use crate::template::DocumentTemplate;

const TERMS: [&str; 3] = [
    "This policy is a permanent life insurance policy providing coverage for the entire \
     lifetime of the insured person. The policy includes a death benefit of $500,000.00 \
     payable to the named primary beneficiary, Sarah Smith-Jones.",
    "Premiums are due on the 1st of each month and can be paid through various methods \
     including electronic funds transfer, credit card, or automatic withdrawal from a bank \
     account.",
    "The policy accumulates cash value over time, which can be borrowed against or \
     surrendered if needed. For more information about policy benefits and terms, please \
     contact our customer service department.",
];

fn detail_row(label: &str, value: impl Into<String>) -> Vec<Cell> {
    vec![
        Cell::label(label).with_align(TextAlign::Center),
        Cell::new(value).with_align(TextAlign::Center),
    ]
}

pub(super) fn template() -> Result<DocumentTemplate> {
    let policy_date = Local::now().format("%B %d, %Y").to_string();

    let mut details = Table::new(vec![2.0 * INCH, 3.0 * INCH]).with_style(TableStyle {
        font_size: 11.0,
        header_background: Some(light_grey()),
        ..Default::default()
    });
    details.add_row(detail_row("Policy Holder:", "John Robert Smith"))?;
    details.add_row(detail_row("Policy Number:", "LH-99887766"))?;
    details.add_row(detail_row("Benefit Amount:", "$500,000.00"))?;
    details.add_row(detail_row("Primary Beneficiary:", "Sarah Smith-Jones"))?;
    details.add_row(detail_row("Policy Date:", policy_date))?;
    details.add_row(detail_row("Policy Type:", "Whole Life Insurance"))?;
    details.add_row(detail_row("Monthly Premium:", "$275.00"))?;
    details.add_row(detail_row("Cash Value:", "$45,230.50"))?;

    let watermark_style = TextStyle::body()
        .with_size(36.0)
        .with_align(TextAlign::Center)
        .with_space_after(0.0);

    let mut template = DocumentTemplate::new(
        DocumentKind::LifeInsurancePolicy.file_name(),
        "Permanent Life Policy",
    )
    .with_author("Legacy Life & Casualty")
    .with_subject("Mock life insurance policy fixture");

    template
        .heading("Legacy Life & Casualty", TextStyle::heading())
        .heading("Permanent Life Policy", TextStyle::heading())
        .spacer(20.0)
        .table(details)
        .spacer(30.0)
        .heading("Policy Terms and Conditions:", TextStyle::heading());
    for terms in TERMS {
        template.paragraph(terms, TextStyle::body());
    }
    template
        .spacer(30.0)
        .paragraph("Watermark: TEST DOCUMENT", watermark_style);

    Ok(template)
}
