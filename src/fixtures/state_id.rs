//! State ID card fixture.

use oxidize_pdf::Font;

use super::{light_grey, DocumentKind, INCH};
use crate::block::{Cell, Table};
use crate::error::Result;
use crate::style::{TableStyle, TextStyle};
use crate::template::DocumentTemplate;

fn pair(label: &str, value: &str) -> Vec<Cell> {
    vec![Cell::label(label), Cell::new(value)]
}

fn pairs(left: (&str, &str), right: (&str, &str)) -> Vec<Cell> {
    vec![
        Cell::label(left.0),
        Cell::new(left.1),
        Cell::label(right.0),
        Cell::new(right.1),
    ]
}

pub(super) fn template() -> Result<DocumentTemplate> {
    let header_style = TextStyle::heading().with_size(20.0).with_space_after(10.0);
    let value_style = TextStyle::body()
        .with_font(Font::HelveticaBold)
        .with_size(12.0)
        .with_space_after(8.0);

    let mut card = Table::new(vec![1.5 * INCH; 4]).with_style(TableStyle {
        border_width: 0.5,
        font_size: 11.0,
        header_background: Some(light_grey()),
        ..Default::default()
    });
    card.add_row(pairs(("CLASS:", "C"), ("RESTRICTIONS:", "None")))?;
    card.add_row(pairs(("SEX:", "Male"), ("HEIGHT:", "5'10\"")))?;
    card.add_row(pairs(("EYES:", "Blue"), ("WEIGHT:", "185 lbs")))?;
    card.add_row(pairs(("HAIR:", "Brown"), ("ORGAN DONOR:", "YES")))?;
    card.add_row(pair("NAME:", "John R. Smith"))?;
    card.add_row(pair("DOB:", "05/12/1955"))?;
    card.add_row(pair("ADDRESS:", "123 Compassion Way"))?;
    card.add_row(vec![Cell::new(""), Cell::new("Anytown, ST 12345")])?;
    card.add_row(pairs(("ISSUE DATE:", "01/10/2020"), ("EXPIRES:", "01/10/2025")))?;

    let mut template = DocumentTemplate::new(DocumentKind::StateIdCard.file_name(), "State ID Card")
        .with_author("State of Example Department of Motor Vehicles")
        .with_subject("Mock state ID card fixture");

    template
        .heading("State of Example", header_style.clone())
        .heading("Driver License", header_style)
        .spacer(20.0)
        .table(card)
        .spacer(20.0)
        .paragraph("DOCUMENT NUMBER: EX-1987654321", value_style.clone())
        .paragraph(
            "ISSUING AUTHORITY: State of Example Department of Motor Vehicles",
            value_style,
        )
        .spacer(30.0)
        .paragraph(
            "This document contains security features to prevent counterfeiting.",
            TextStyle::small(),
        )
        .paragraph(
            "Unauthorized reproduction is a criminal offense.",
            TextStyle::small(),
        );

    Ok(template)
}
