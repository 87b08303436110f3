// src/handlers/pages.rs
use crate::app::App;
use crate::auth::{optional_user, require_user};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::templates::pages::{home_page, not_found_page, payments_page, reviews_page};
use astra::{Body, Request, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn home(req: &Request, app: &App) -> ResultResp {
    let cu = optional_user(req, app);
    html_response(home_page(cu.as_ref().map(|c| &c.user)))
}

pub fn payments(req: &Request, app: &App) -> ResultResp {
    let cu = require_user(req, app)?;
    let transactions = app.api.transactions(&cu.token)?;
    html_response(payments_page(&cu.user, &transactions))
}

pub fn reviews(req: &Request, app: &App) -> ResultResp {
    let cu = require_user(req, app)?;
    let reviews = app.api.reviews(&cu.token)?;
    html_response(reviews_page(&cu.user, &reviews))
}

pub fn not_found(req: &Request, app: &App) -> ResultResp {
    let cu = optional_user(req, app);
    html_response_with_status(
        404,
        not_found_page(cu.as_ref().map(|c| &c.user), req.uri().path()),
    )
}

pub fn stylesheet() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(MAIN_CSS.to_string()))
        .map_err(|_| ServerError::InternalError)
}
