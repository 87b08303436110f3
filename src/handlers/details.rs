// src/handlers/details.rs
use crate::app::App;
use crate::auth::{optional_user, require_user, CurrentUser};
use crate::domain::details::page_title;
use crate::domain::{parse_detail_request, resolve_detail_view, RenderChoice};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, ResultResp};
use crate::templates::details::{
    booking_detail, invalid_link_panel, listing_detail, transaction_detail, unsupported_panel,
    user_detail,
};
use crate::templates::pages::details_page;
use astra::Request;
use maud::Markup;

/// `/details?type=..&id=..`
pub fn view(req: &Request, app: &App) -> ResultResp {
    let request = parse_detail_request(req.uri().query().unwrap_or(""));
    let choice = resolve_detail_view(request.as_ref());
    let title = page_title(request.as_ref().map(|r| r.kind.as_str()));

    match &choice {
        RenderChoice::Invalid => {
            log::debug!("details link without type/id: {:?}", req.uri().query());
            let cu = optional_user(req, app);
            html_response_with_status(
                400,
                details_page(title, cu.as_ref().map(|c| &c.user), invalid_link_panel()),
            )
        }
        RenderChoice::Unsupported(kind) => {
            log::debug!("unsupported details type {kind:?}");
            let cu = optional_user(req, app);
            html_response(details_page(
                title,
                cu.as_ref().map(|c| &c.user),
                unsupported_panel(kind),
            ))
        }
        _ => {
            let cu = require_user(req, app)?;
            let body = render(&choice, &cu, app)?;
            html_response(details_page(title, Some(&cu.user), body))
        }
    }
}

/// Fetch the entity for a resolved choice and hand it to its renderer.
fn render(choice: &RenderChoice, cu: &CurrentUser, app: &App) -> Result<Markup, ServerError> {
    let api = app.api.as_ref();
    let token = cu.token.as_str();

    let markup = match choice {
        RenderChoice::Transaction { id } => transaction_detail(&api.transaction(token, id)?),
        RenderChoice::Booking { id, booking_type } => {
            booking_detail(&api.booking(token, id, *booking_type)?, *booking_type)
        }
        RenderChoice::Listing { id, kind } => listing_detail(&api.listing(token, id, *kind)?, *kind),
        RenderChoice::User { id } => user_detail(&api.user(token, id)?),
        RenderChoice::Unsupported(kind) => unsupported_panel(kind),
        RenderChoice::Invalid => invalid_link_panel(),
    };
    Ok(markup)
}
