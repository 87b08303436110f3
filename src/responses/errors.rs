use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::LoginRequired => login_redirect(),
        ServerError::NotFound => render(404, "Not Found"),
        ServerError::BadRequest(msg) => render(400, &msg),
        ServerError::Upstream(msg) => {
            log::warn!("upstream failure: {msg}");
            render(502, "The booking service is unavailable right now. Please try again.")
        }
        ServerError::InternalError => {
            log::error!("internal error while handling request");
            render(500, "Internal Server Error")
        }
        ServerError::XlsxError(msg) => {
            log::error!("spreadsheet export failed: {msg}");
            render(500, &format!("Spreadsheet Error: {msg}"))
        }
    }
}

fn render(status: u16, message: &str) -> Response {
    let html = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

fn login_redirect() -> Response {
    ResponseBuilder::new()
        .status(302)
        .header("Location", "/login")
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::from("Login required")))
}
