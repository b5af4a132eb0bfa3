// Extraction stage: fetch the source page and parse the first table body
// into raw bank records.

use scraper::{Html, Selector};

use crate::error::EtlError;
use crate::types::RawBankRecord;

/// Fetch the page body as text.
///
/// One blocking request, no retries. A transport failure or a
/// non-success status is fatal.
pub fn fetch_page(url: &str) -> Result<String, EtlError> {
    let fetch_err = |source| EtlError::Fetch {
        url: url.to_string(),
        source,
    };

    reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch_err)?
        .text()
        .map_err(fetch_err)
}

/// Parse the first `tbody` on the page into records, in document order.
///
/// Rows without any `td` cells (header rows) are skipped. A data row
/// with fewer than 3 cells means the page shape changed and is an error
/// rather than a silent truncation.
pub fn parse_bank_table(html: &str) -> Result<Vec<RawBankRecord>, EtlError> {
    let tbody_sel = Selector::parse("tbody").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);

    let tbody = document
        .select(&tbody_sel)
        .next()
        .ok_or_else(|| EtlError::Parse("no table body found on source page".to_string()))?;

    let mut records = Vec::new();

    for (row_idx, row) in tbody.select(&tr_sel).enumerate() {
        let cells: Vec<String> = row
            .select(&td_sel)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if cells.is_empty() {
            continue;
        }

        if cells.len() < 3 {
            return Err(EtlError::Parse(format!(
                "table row {} has {} data cell(s), expected at least 3",
                row_idx,
                cells.len()
            )));
        }

        records.push(RawBankRecord {
            rank: cells[0].clone(),
            bank_name: cells[1].clone(),
            mc_usd_billion: cells[2].clone(),
        });
    }

    Ok(records)
}

/// Full extraction: fetch then parse.
pub fn extract(url: &str) -> Result<Vec<RawBankRecord>, EtlError> {
    let page = fetch_page(url)?;
    parse_bank_table(&page)
}
