//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{fmt, io, io::Write};

use digital_goods_storefront::{listing::Listing, traits::ListingView};
use log::*;

const LOG_TARGET: &str = "digital_goods::cli::table";

const MAX_DESCRIPTION_WIDTH: usize = 40;

macro_rules! table_row {
    ($($cell:expr),* $(,)?) => {
        vec![$($cell.to_string()),*]
    };
}
pub(crate) use table_row;

/// A plain text table with left aligned columns.
#[derive(Debug, Default)]
pub struct Table {
    titles: Vec<String>,
    rows: Vec<Vec<String>>,
    row_count: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_row_count(&mut self) -> &mut Self {
        self.row_count = true;
        self
    }

    pub fn set_titles<T: ToString>(&mut self, titles: Vec<T>) -> &mut Self {
        self.titles = titles.iter().map(ToString::to_string).collect();
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn print_stdout(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self)?;
        stdout.flush()
    }

    fn column_widths(&self) -> Vec<usize> {
        let num_columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(Some(self.titles.len()))
            .max()
            .unwrap_or(0);
        (0..num_columns)
            .map(|i| {
                self.rows
                    .iter()
                    .chain(Some(&self.titles))
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let write_row = |f: &mut fmt::Formatter<'_>, row: &[String]| -> fmt::Result {
            let line = widths
                .iter()
                .enumerate()
                .map(|(i, width)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", cell, width = *width)
                })
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())
        };

        if !self.titles.is_empty() {
            write_row(f, &self.titles)?;
            let separator = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-");
            writeln!(f, "{}", separator)?;
        }
        for row in &self.rows {
            write_row(f, row)?;
        }
        if self.row_count {
            writeln!(f, "{} row(s)", self.rows.len())?;
        }
        Ok(())
    }
}

/// The listing table shown by every command that refreshes the storefront.
pub fn listing_table(listings: &[Listing]) -> Table {
    let mut table = Table::new();
    table.enable_row_count();
    table.set_titles(vec![
        "ID",
        "Name",
        "Description",
        "Category",
        "Lister",
        "Price (ETH)",
        "Supply",
        "Preview",
    ]);
    for listing in listings {
        // Buyers pay the marked up price, so that is what we show
        let price = listing
            .buyer_unit_price()
            .map(|p| p.to_ether_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(table_row!(
            listing.id,
            listing.name,
            truncate(&listing.description, MAX_DESCRIPTION_WIDTH),
            listing.category,
            listing.lister,
            price,
            listing.remaining_supply,
            listing.preview_link,
        ));
    }
    table
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut truncated = s.chars().take(max_chars - 3).collect::<String>();
    truncated.push_str("...");
    truncated
}

/// Renders listings to stdout.
#[derive(Debug, Default)]
pub struct ListingTable;

impl ListingView for ListingTable {
    fn render(&mut self, listings: &[Listing]) {
        if listings.is_empty() {
            println!("No digital goods found.");
            return;
        }
        if let Err(err) = listing_table(listings).print_stdout() {
            error!(target: LOG_TARGET, "Failed to print listings: {}", err);
        }
    }
}
