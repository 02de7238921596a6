//! Terminal rendering of lists, catalogs and suggestions

use anyhow::Result;
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use basket_core::catalog::CatalogItem;
use basket_core::messages::Messages;
use basket_core::suggestions::Suggestion;
use basket_core::{CommandError, Language, Session};

#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Price")]
    unit_price: String,
    #[tabled(rename = "Subtotal")]
    line_total: String,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "In Stock")]
    in_stock: String,
    #[tabled(rename = "Max")]
    max_stock: u32,
    #[tabled(rename = "Alternatives")]
    alternatives: String,
}

#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Suggestion")]
    label: String,
    #[tabled(rename = "Adds")]
    name: String,
    #[tabled(rename = "Seasonal")]
    seasonal: String,
}

fn styled(table: &mut Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Current list with localized title and total
pub fn write_list<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    let messages = Messages::for_language(session.language());
    writeln!(out, "{}", messages.shopping_list)?;

    if session.list().is_empty() {
        writeln!(out, "{}", messages.empty_list)?;
    } else {
        let rows: Vec<ListRow> = session
            .list()
            .lines(session.catalog(), session.language())
            .into_iter()
            .map(|line| ListRow {
                name: line.name,
                category: line.category,
                quantity: line.quantity,
                unit_price: line.unit_price.to_string(),
                line_total: line.line_total.to_string(),
            })
            .collect();
        writeln!(out, "{}", styled(&mut Table::new(&rows)))?;
    }

    writeln!(out, "{}: {:.2}", messages.total, session.total())?;
    Ok(())
}

/// Outcome line for one command
pub fn write_outcome<W: Write>(
    out: &mut W,
    language: Language,
    text: &str,
    result: &Result<(), CommandError>,
) -> Result<()> {
    let messages = Messages::for_language(language);
    match result {
        Ok(()) => writeln!(out, "✓ {}", messages.processed(text))?,
        Err(err) => writeln!(out, "✗ {}", messages.error(err))?,
    }
    Ok(())
}

/// Catalog items as a table, names in `language`
pub fn write_catalog<W: Write>(
    out: &mut W,
    items: &[CatalogItem],
    language: Language,
) -> Result<()> {
    let rows: Vec<CatalogRow> = items
        .iter()
        .map(|item| CatalogRow {
            id: item.id.to_string(),
            name: item.display_name(language).to_string(),
            category: item.category.clone(),
            price: item.price.to_string(),
            in_stock: if item.in_stock { "yes" } else { "no" }.to_string(),
            max_stock: item.max_stock,
            alternatives: item.alternatives.join(", "),
        })
        .collect();
    writeln!(out, "{}", styled(&mut Table::new(&rows)))?;
    Ok(())
}

/// Suggestions with a localized heading
pub fn write_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[Suggestion],
    language: Language,
) -> Result<()> {
    let messages = Messages::for_language(language);
    writeln!(out, "{}", messages.suggestions)?;

    let rows: Vec<SuggestionRow> = suggestions
        .iter()
        .map(|suggestion| SuggestionRow {
            label: suggestion.label.clone(),
            name: suggestion.name.clone(),
            seasonal: if suggestion.seasonal {
                messages.seasonal.to_string()
            } else {
                String::new()
            },
        })
        .collect();
    writeln!(out, "{}", styled(&mut Table::new(&rows)))?;
    Ok(())
}
