use crate::app::App;
use crate::domain::UserType;
use crate::handlers;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    log::debug!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => handlers::pages::home(&req, app),
        ("GET", "/static/main.css") => handlers::pages::stylesheet(),

        // Auth
        ("GET", "/login") => html_response(templates::pages::login_page("", None)),
        ("POST", "/auth/login") => handlers::auth::login(req, app),
        ("POST", "/logout") => handlers::auth::logout(),

        // Dashboards
        ("GET", "/dashboard") => handlers::dashboard::role_redirect(&req, app),
        ("GET", "/host") => handlers::dashboard::role_dashboard(&req, app, UserType::Host),
        ("GET", "/guest") => handlers::dashboard::role_dashboard(&req, app, UserType::Guest),
        ("GET", "/agent") => handlers::dashboard::role_dashboard(&req, app, UserType::Agent),
        ("GET", "/tourguide") => {
            handlers::dashboard::role_dashboard(&req, app, UserType::TourGuide)
        }

        ("GET", "/earnings") => handlers::earnings::earnings(&req, app),
        ("GET", "/earnings/export") => handlers::earnings::export(&req, app),
        ("GET", "/payments") => handlers::pages::payments(&req, app),
        ("GET", "/reviews") => handlers::pages::reviews(&req, app),

        ("GET", "/details") => handlers::details::view(&req, app),

        _ => handlers::pages::not_found(&req, app),
    }
}
