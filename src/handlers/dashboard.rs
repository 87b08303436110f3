// src/handlers/dashboard.rs
use crate::app::App;
use crate::auth::require_user;
use crate::domain::UserType;
use crate::responses::{html_response, redirect, ResultResp};
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::Request;

/// `/dashboard`: send the user to the dashboard for their role.
pub fn role_redirect(req: &Request, app: &App) -> ResultResp {
    let cu = require_user(req, app)?;
    redirect(cu.user.user_type.dashboard_path())
}

/// `/host`, `/guest`, `/agent`, `/tourguide`.
pub fn role_dashboard(req: &Request, app: &App, role: UserType) -> ResultResp {
    let cu = require_user(req, app)?;

    if cu.user.user_type != role {
        log::debug!(
            "{} tried {}, redirecting to own dashboard",
            cu.user.user_type.label(),
            role.dashboard_path()
        );
        return redirect(cu.user.user_type.dashboard_path());
    }

    let bookings = app.api.bookings(&cu.token)?;
    let earnings = if role.can_view_earnings() {
        Some(app.api.earnings(&cu.token)?)
    } else {
        None
    };

    html_response(dashboard_page(&DashboardVm {
        user: cu.user,
        bookings,
        earnings,
    }))
}
