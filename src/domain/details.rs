// src/domain/details.rs

/// The seven entity kinds a "view details" link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailType {
    Transaction,
    Booking,
    PropertyBooking,
    TourBooking,
    Property,
    Tour,
    User,
}

impl DetailType {
    pub const ALL: [DetailType; 7] = [
        DetailType::Transaction,
        DetailType::Booking,
        DetailType::PropertyBooking,
        DetailType::TourBooking,
        DetailType::Property,
        DetailType::Tour,
        DetailType::User,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DetailType::Transaction => "transaction",
            DetailType::Booking => "booking",
            DetailType::PropertyBooking => "property-booking",
            DetailType::TourBooking => "tour-booking",
            DetailType::Property => "property",
            DetailType::Tour => "tour",
            DetailType::User => "user",
        }
    }

    /// Exact, case-sensitive match on the wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DetailType::Transaction => "Transaction Details",
            DetailType::Booking => "Booking Details",
            DetailType::PropertyBooking => "Property Booking Details",
            DetailType::TourBooking => "Tour Booking Details",
            DetailType::Property => "Property Details",
            DetailType::Tour => "Tour Details",
            DetailType::User => "User Details",
        }
    }
}

pub const DEFAULT_TITLE: &str = "View Details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Raw `type` parameter; not necessarily a known tag.
    pub kind: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingKind {
    Property,
    Tour,
}

impl BookingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Property => "property",
            BookingKind::Tour => "tour",
        }
    }

    /// Sub-type as reported by the API, ignoring case and surrounding space.
    pub fn from_api(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        [BookingKind::Property, BookingKind::Tour]
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Property,
    Tour,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Property => "property",
            ListingKind::Tour => "tour",
        }
    }
}

/// Which detail renderer a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderChoice {
    Transaction {
        id: String,
    },
    Booking {
        id: String,
        booking_type: Option<BookingKind>,
    },
    Listing {
        id: String,
        kind: ListingKind,
    },
    User {
        id: String,
    },
    Unsupported(String),
    Invalid,
}

/// Parse `type` and `id` out of a raw query string.
/// Both must be present and non-blank; the first occurrence of a key wins.
pub fn parse_detail_request(query: &str) -> Option<DetailRequest> {
    let mut kind: Option<String> = None;
    let mut id: Option<String> = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "type" if kind.is_none() => kind = Some(value.trim().to_string()),
            "id" if id.is_none() => id = Some(value.trim().to_string()),
            _ => {}
        }
    }

    match (kind, id) {
        (Some(kind), Some(id)) if !kind.is_empty() && !id.is_empty() => {
            Some(DetailRequest { kind, id })
        }
        _ => None,
    }
}

pub fn resolve_detail_view(request: Option<&DetailRequest>) -> RenderChoice {
    let Some(req) = request else {
        return RenderChoice::Invalid;
    };
    let id = req.id.clone();

    match DetailType::from_tag(&req.kind) {
        Some(DetailType::Transaction) => RenderChoice::Transaction { id },
        Some(DetailType::Booking) => RenderChoice::Booking {
            id,
            booking_type: None,
        },
        Some(DetailType::PropertyBooking) => RenderChoice::Booking {
            id,
            booking_type: Some(BookingKind::Property),
        },
        Some(DetailType::TourBooking) => RenderChoice::Booking {
            id,
            booking_type: Some(BookingKind::Tour),
        },
        Some(DetailType::Property) => RenderChoice::Listing {
            id,
            kind: ListingKind::Property,
        },
        Some(DetailType::Tour) => RenderChoice::Listing {
            id,
            kind: ListingKind::Tour,
        },
        Some(DetailType::User) => RenderChoice::User { id },
        None => RenderChoice::Unsupported(req.kind.clone()),
    }
}

/// Title for the details page; unknown or missing tags get the generic one.
pub fn page_title(kind: Option<&str>) -> &'static str {
    kind.and_then(DetailType::from_tag)
        .map(|t| t.title())
        .unwrap_or(DEFAULT_TITLE)
}

/// Link into the details page for a given tag and id.
pub fn details_href(kind: DetailType, id: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("type", kind.tag())
        .append_pair("id", id)
        .finish();
    format!("/details?{query}")
}
