use crate::api::Earnings;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// Build the earnings workbook: one row per month, then summary rows.
pub fn earnings_workbook(earnings: &Earnings) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Earnings")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {e}")))?;

    let headers = ["Month", "Bookings", "Amount", "Currency"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, m) in earnings.monthly.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &m.month)
            .map_err(|e| ServerError::XlsxError(format!("month: {e}")))?;
        worksheet
            .write_number(r, 1, m.bookings as f64)
            .map_err(|e| ServerError::XlsxError(format!("bookings: {e}")))?;
        worksheet
            .write_number(r, 2, m.amount)
            .map_err(|e| ServerError::XlsxError(format!("amount: {e}")))?;
        worksheet
            .write_string(r, 3, &earnings.currency)
            .map_err(|e| ServerError::XlsxError(format!("currency: {e}")))?;
    }

    // Blank row, then totals.
    let mut r = earnings.monthly.len() as u32 + 2;
    for (label, value) in [
        ("Total", earnings.total),
        ("Pending payout", earnings.pending),
        ("Paid out", earnings.paid_out),
    ] {
        worksheet
            .write_string(r, 0, label)
            .map_err(|e| ServerError::XlsxError(format!("summary label: {e}")))?;
        worksheet
            .write_number(r, 2, value)
            .map_err(|e| ServerError::XlsxError(format!("summary value: {e}")))?;
        r += 1;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_earnings_xlsx(earnings: &Earnings, filename: &str) -> ResultResp {
    let buffer = earnings_workbook(earnings)?;
    xlsx_response(buffer, filename)
}
