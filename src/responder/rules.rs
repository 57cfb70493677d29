use std::sync::LazyLock;

use regex::Regex;

use crate::script;

// Digits followed by a headcount word, e.g. "4 people", "2guests"
static PARTY_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(people|person|guests?)").expect("Invalid party size regex")
});

static DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(tomorrow|tonight|today|monday|tuesday|wednesday|thursday|friday|saturday|sunday)")
        .expect("Invalid day regex")
});

// Not a clock parser: "25 pm" and "99:" both count as a time
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\s*(am|pm|:)").expect("Invalid time regex"));

/// What the caller is asking about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Reservation with a headcount; holds the number as written
    ReservationPartySize(String),
    /// Reservation naming a day and a time
    ReservationDetails,
    /// Reservation without usable details yet
    ReservationStart,
    Menu,
    Dietary,
    Hours,
    Location,
    Greeting,
    Closing,
    Fallback,
}

impl Intent {
    pub fn reply(&self) -> String {
        match self {
            Intent::ReservationPartySize(n) => script::party_size_reply(n),
            Intent::ReservationDetails => script::RESERVATION_DETAILS_REPLY.to_string(),
            Intent::ReservationStart => script::RESERVATION_START_REPLY.to_string(),
            Intent::Menu => script::MENU_REPLY.to_string(),
            Intent::Dietary => script::DIETARY_REPLY.to_string(),
            Intent::Hours => script::HOURS_REPLY.to_string(),
            Intent::Location => script::LOCATION_REPLY.to_string(),
            Intent::Greeting => script::GREETING_REPLY.to_string(),
            Intent::Closing => script::CLOSING_REPLY.to_string(),
            Intent::Fallback => script::FALLBACK_REPLY.to_string(),
        }
    }
}

struct Rule {
    keywords: &'static [&'static str],
    // Matches only when the whole utterance is one of these
    exact: &'static [&'static str],
    intent: fn(&str) -> Intent,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
            || self.exact.iter().any(|e| text.trim() == *e)
    }
}

// Evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    Rule {
        keywords: &["reservation", "book", "table"],
        exact: &[],
        intent: reservation_intent,
    },
    Rule {
        keywords: &["menu", "food", "dish", "special"],
        exact: &[],
        intent: |_| Intent::Menu,
    },
    Rule {
        keywords: &["vegan", "vegetarian", "gluten", "allergy"],
        exact: &[],
        intent: |_| Intent::Dietary,
    },
    Rule {
        keywords: &["hour", "open", "close", "time"],
        exact: &[],
        intent: |_| Intent::Hours,
    },
    Rule {
        keywords: &["location", "address", "where", "parking"],
        exact: &[],
        intent: |_| Intent::Location,
    },
    Rule {
        keywords: &["hello", "hi"],
        exact: &["hey"],
        intent: |_| Intent::Greeting,
    },
    Rule {
        keywords: &["thank", "bye", "goodbye"],
        exact: &[],
        intent: |_| Intent::Closing,
    },
];

fn reservation_intent(text: &str) -> Intent {
    if let Some(caps) = PARTY_SIZE_RE.captures(text) {
        return Intent::ReservationPartySize(caps[1].to_string());
    }
    if DAY_RE.is_match(text) && TIME_RE.is_match(text) {
        return Intent::ReservationDetails;
    }
    Intent::ReservationStart
}

/// Classify a caller utterance. Matching is case-insensitive
/// substring search; anything unmatched is `Intent::Fallback`.
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| (rule.intent)(&text))
        .unwrap_or(Intent::Fallback)
}
