//! Spreadsheet report output
//!
//! Builds the multi-tab workbook: per period one summary sheet (payment /
//! expense / net block, category totals, optional chart) and one sheet per
//! category with its transactions and a TOTAL row. Chart rendering and
//! cell styling are delegated to rust_xlsxwriter; this module only shapes
//! the data.

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Chart, Color, Format, FormatAlign, Workbook, Worksheet};

use crate::error::SorterResult;
use crate::models::Money;
use crate::services::aggregate::{CategorySummary, PeriodReport};

use super::ChartKind;

/// Sheet-name characters Excel rejects
const ILLEGAL_SHEET_CHARS: [char; 7] = [':', '\\', '/', '*', '?', '[', ']'];

/// Excel's sheet-name length cap
const SHEET_NAME_MAX: usize = 31;

/// Category portion of a sheet name is clipped before the period suffix
const CATEGORY_NAME_MAX: usize = 20;

/// Row (0-based) where the category-totals table header lands on a
/// summary sheet; the table itself starts on the next row
const SUMMARY_TABLE_HEADER_ROW: u32 = 6;

/// Write the full report workbook to `path`
pub fn write_workbook(
    path: &Path,
    reports: &[PeriodReport],
    chart: ChartKind,
) -> SorterResult<()> {
    let mut workbook = Workbook::new();
    let mut used_names = HashSet::new();

    for report in reports {
        let summary_name = unique_sheet_name(
            &sanitize_sheet_name(&format!("Summary_{}", report.label)),
            &mut used_names,
        );
        write_summary_sheet(&mut workbook, &summary_name, report, chart)?;

        for summary in &report.categories {
            let base: String = summary.category.chars().take(CATEGORY_NAME_MAX).collect();
            let name = unique_sheet_name(
                &sanitize_sheet_name(&format!("{}_{}", base, report.label)),
                &mut used_names,
            );
            write_category_sheet(&mut workbook, &name, summary)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_summary_sheet(
    workbook: &mut Workbook,
    name: &str,
    report: &PeriodReport,
    chart: ChartKind,
) -> SorterResult<()> {
    let bold = Format::new().set_bold();
    let title = Format::new().set_bold().set_align(FormatAlign::Center);
    let money = Format::new().set_num_format("$#,##0.00");
    let money_bold = Format::new().set_bold().set_num_format("$#,##0.00");
    // Red when the period closed in the red, green otherwise
    let net_color = if report.net.is_positive() {
        Color::Red
    } else {
        Color::Green
    };
    let money_net = Format::new()
        .set_bold()
        .set_num_format("$#,##0.00")
        .set_font_color(net_color);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    worksheet.merge_range(0, 0, 0, 1, &format!("Summary for {}", report.label), &title)?;

    write_money_row(worksheet, 1, "Credit Card Payments", report.payment_total, &bold, &money_bold)?;
    write_money_row(worksheet, 2, "Expense Total", report.expense_total, &bold, &money_bold)?;
    write_money_row(worksheet, 3, "Difference", report.net, &bold, &money_net)?;

    worksheet.write_with_format(SUMMARY_TABLE_HEADER_ROW, 0, "Expenses", &bold)?;
    worksheet.write_with_format(SUMMARY_TABLE_HEADER_ROW, 1, "Total Amount", &bold)?;

    let first_data_row = SUMMARY_TABLE_HEADER_ROW + 1;
    for (offset, summary) in report.categories.iter().enumerate() {
        let row = first_data_row + offset as u32;
        worksheet.write(row, 0, summary.category.as_str())?;
        worksheet.write_with_format(row, 1, summary.total.to_f64(), &money)?;
    }

    worksheet.set_column_width(0, 28)?;
    worksheet.set_column_width(1, 16)?;

    if let Some(chart_type) = chart.chart_type() {
        let last_data_row = first_data_row + report.categories.len() as u32 - 1;
        let mut chart = Chart::new(chart_type);
        chart.title().set_name("Spending Breakdown");
        chart
            .add_series()
            .set_values((name, first_data_row, 1, last_data_row, 1))
            .set_categories((name, first_data_row, 0, last_data_row, 0));
        worksheet.insert_chart(1, 3, &chart)?;
    }

    Ok(())
}

fn write_money_row(
    worksheet: &mut Worksheet,
    row: u32,
    label: &str,
    amount: Money,
    label_format: &Format,
    amount_format: &Format,
) -> SorterResult<()> {
    worksheet.write_with_format(row, 0, label, label_format)?;
    worksheet.write_with_format(row, 1, amount.to_f64(), amount_format)?;
    Ok(())
}

fn write_category_sheet(
    workbook: &mut Workbook,
    name: &str,
    summary: &CategorySummary,
) -> SorterResult<()> {
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format("$#,##0.00");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name)?;

    for (col, header) in ["Trans. date", "Post date", "Description", "Amount", "Category"]
        .iter()
        .enumerate()
    {
        worksheet.write_with_format(0, col as u16, *header, &bold)?;
    }

    let mut row = 1;
    for txn in &summary.transactions {
        worksheet.write(row, 0, txn.trans_date.format("%Y-%m-%d").to_string())?;
        if let Some(post_date) = txn.post_date {
            worksheet.write(row, 1, post_date.format("%Y-%m-%d").to_string())?;
        }
        worksheet.write(row, 2, txn.description.as_str())?;
        worksheet.write_with_format(row, 3, txn.amount.to_f64(), &money)?;
        worksheet.write(row, 4, txn.category.as_str())?;
        row += 1;
    }

    worksheet.write_with_format(row, 2, "TOTAL", &bold)?;
    worksheet.write_with_format(row, 3, summary.total.to_f64(), &money)?;

    // Fixed widths standing in for the source's auto-fit pass
    for (col, width) in [(0, 12), (1, 12), (2, 40), (3, 12), (4, 22)] {
        worksheet.set_column_width(col, width as f64)?;
    }

    Ok(())
}

/// Replace characters Excel rejects and cap the name length
fn sanitize_sheet_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if ILLEGAL_SHEET_CHARS.contains(&c) { '-' } else { c })
        .take(SHEET_NAME_MAX)
        .collect()
}

/// Truncation can collide distinct categories; suffix duplicates
fn unique_sheet_name(candidate: &str, used: &mut HashSet<String>) -> String {
    if used.insert(candidate.to_string()) {
        return candidate.to_string();
    }
    let mut counter = 2;
    loop {
        let suffix = format!("~{}", counter);
        let keep = SHEET_NAME_MAX - suffix.chars().count();
        let name: String = candidate.chars().take(keep).chain(suffix.chars()).collect();
        if used.insert(name.clone()) {
            return name;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupingMode, Period, Transaction};
    use crate::services::aggregate::aggregate_period;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_sheet_name() {
        assert_eq!(sanitize_sheet_name("Gas/Auto: [fuel]?"), "Gas-Auto- -fuel--");
        assert_eq!(
            sanitize_sheet_name("a very long sheet name that exceeds the cap").len(),
            SHEET_NAME_MAX
        );
    }

    #[test]
    fn test_unique_sheet_name_suffixes_duplicates() {
        let mut used = HashSet::new();
        assert_eq!(unique_sheet_name("Groceries_Jan", &mut used), "Groceries_Jan");
        assert_eq!(unique_sheet_name("Groceries_Jan", &mut used), "Groceries_Jan~2");
        assert_eq!(unique_sheet_name("Groceries_Jan", &mut used), "Groceries_Jan~3");
    }

    #[test]
    fn test_write_workbook_produces_file() {
        let period = Period::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        let txns = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                "WHOLE FOODS",
                Money::from_cents(-5000),
                "Groceries",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
                "PAYMENT THANK YOU",
                Money::from_cents(8000),
                "Payments and Credits",
            ),
        ];
        let report = aggregate_period(
            period,
            period.label(GroupingMode::Monthly, 1),
            period.file_suffix(GroupingMode::Monthly, 1),
            &txns,
        )
        .unwrap();

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.xlsx");
        write_workbook(&path, &[report], ChartKind::Pie).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
