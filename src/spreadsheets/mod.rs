pub mod earnings_xlsx;

pub use earnings_xlsx::export_earnings_xlsx;
