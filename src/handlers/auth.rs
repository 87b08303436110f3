// src/handlers/auth.rs
use crate::api::ApiError;
use crate::app::App;
use crate::auth::{clear_session_cookie, is_cookie_safe, session_cookie};
use crate::errors::ServerError;
use crate::responses::{html_response_with_status, redirect_with_cookie, ResultResp};
use crate::templates::pages::login_page;
use astra::Request;
use std::io::Read;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn login(req: Request, app: &App) -> ResultResp {
    let form = read_form(req)?;
    let email = form_value(&form, "email").trim().to_lowercase();
    let password = form_value(&form, "password");

    if email.is_empty() || password.is_empty() {
        return html_response_with_status(
            400,
            login_page(&email, Some("Enter your email and password.")),
        );
    }

    match app.api.login(&email, &password) {
        Ok(token) if !is_cookie_safe(&token) => {
            log::warn!("login for {email} returned a token unusable as a cookie");
            html_response_with_status(401, login_page(&email, Some("Invalid email or password.")))
        }
        Ok(token) => {
            log::info!("login succeeded for {email}");
            redirect_with_cookie(
                "/dashboard",
                &session_cookie(&token, app.config.secure_cookies),
            )
        }
        Err(ApiError::Unauthorized) => {
            log::info!("login rejected for {email}");
            html_response_with_status(401, login_page(&email, Some("Invalid email or password.")))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn logout() -> ResultResp {
    redirect_with_cookie("/login", &clear_session_cookie())
}

fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

fn form_value(form: &[(String, String)], key: &str) -> String {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or_default()
}
