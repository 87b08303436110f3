// src/domain/status.rs

/// The three independent status vocabularies shown in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDomain {
    Booking,
    Payment,
    CheckIn,
}

pub const DEFAULT_COLOR: &str = "bg-gray-100 text-gray-800";
pub const DEFAULT_ICON: &str = "help-circle";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPresentation {
    pub canonical_text: String,
    pub color_class: &'static str,
    pub icon_id: &'static str,
}

/// Booking lifecycle: (key, color, icon).
const BOOKING_STATUSES: &[(&str, &str, &str)] = &[
    ("pending", "bg-yellow-100 text-yellow-800", "clock"),
    ("confirmed", "bg-green-100 text-green-800", "check-circle"),
    ("checked_in", "bg-blue-100 text-blue-800", "log-in"),
    ("checked_out", "bg-indigo-100 text-indigo-800", "log-out"),
    ("completed", "bg-emerald-100 text-emerald-800", "check-check"),
    ("cancelled", "bg-red-100 text-red-800", "x-circle"),
    ("canceled", "bg-red-100 text-red-800", "x-circle"),
    ("rejected", "bg-red-100 text-red-800", "ban"),
    ("refunded", "bg-purple-100 text-purple-800", "rotate-ccw"),
    ("no_show", "bg-orange-100 text-orange-800", "user-x"),
];

const PAYMENT_STATUSES: &[(&str, &str)] = &[
    ("pending", "bg-yellow-100 text-yellow-800"),
    ("processing", "bg-blue-100 text-blue-800"),
    ("paid", "bg-green-100 text-green-800"),
    ("completed", "bg-green-100 text-green-800"),
    ("successful", "bg-green-100 text-green-800"),
    ("failed", "bg-red-100 text-red-800"),
    ("refunded", "bg-purple-100 text-purple-800"),
    ("cancelled", "bg-gray-100 text-gray-600"),
];

const CHECK_IN_STATUSES: &[(&str, &str)] = &[
    ("not_checked_in", "bg-gray-100 text-gray-600"),
    ("pending", "bg-yellow-100 text-yellow-800"),
    ("checked_in", "bg-green-100 text-green-800"),
    ("checked_out", "bg-blue-100 text-blue-800"),
    ("no_show", "bg-red-100 text-red-800"),
];

/// Lower-case and treat `-` as `_`.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

pub fn color_for(domain: StatusDomain, raw: &str) -> &'static str {
    let key = normalize_key(raw);
    let found = match domain {
        StatusDomain::Booking => BOOKING_STATUSES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, color, _)| *color),
        StatusDomain::Payment => lookup(PAYMENT_STATUSES, &key),
        StatusDomain::CheckIn => lookup(CHECK_IN_STATUSES, &key),
    };
    found.unwrap_or(DEFAULT_COLOR)
}

/// Only booking statuses carry icons.
pub fn icon_for(domain: StatusDomain, raw: &str) -> &'static str {
    if domain != StatusDomain::Booking {
        return DEFAULT_ICON;
    }
    let key = normalize_key(raw);
    BOOKING_STATUSES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, _, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Drops `_` and `-` and upper-cases the rest: `checked_in` -> `CHECKEDIN`.
pub fn canonical_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

pub fn present(domain: StatusDomain, raw: &str) -> StatusPresentation {
    StatusPresentation {
        canonical_text: canonical_label(raw),
        color_class: color_for(domain, raw),
        icon_id: icon_for(domain, raw),
    }
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
