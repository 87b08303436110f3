// src/handlers/earnings.rs
use crate::app::App;
use crate::auth::{require_user, CurrentUser};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, ResultResp};
use crate::spreadsheets::export_earnings_xlsx;
use crate::templates::pages::earnings_page;
use astra::Request;
use chrono::Utc;

pub fn earnings(req: &Request, app: &App) -> ResultResp {
    let cu = match earner(req, app)? {
        Ok(cu) => cu,
        Err(to) => return redirect(to),
    };
    let earnings = app.api.earnings(&cu.token)?;
    html_response(earnings_page(&cu.user, &earnings))
}

pub fn export(req: &Request, app: &App) -> ResultResp {
    let cu = match earner(req, app)? {
        Ok(cu) => cu,
        Err(to) => return redirect(to),
    };
    let earnings = app.api.earnings(&cu.token)?;
    let filename = format!("earnings_{}.xlsx", Utc::now().format("%Y-%m-%d"));
    export_earnings_xlsx(&earnings, &filename)
}

/// Signed-in user allowed to see earnings, or the path to send them to instead.
fn earner(req: &Request, app: &App) -> Result<Result<CurrentUser, &'static str>, ServerError> {
    let cu = require_user(req, app)?;
    if cu.user.user_type.can_view_earnings() {
        Ok(Ok(cu))
    } else {
        Ok(Err(cu.user.user_type.dashboard_path()))
    }
}
