//! Fixed lines the assistant can say and the facts it says them
//! about. Nothing here is generated; every reply is one of these.

use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Hello! Thank you for calling our restaurant. I'm your AI assistant. How may I help you today? I can help with reservations, menu questions, hours, or directions.";

pub const APOLOGY_MESSAGE: &str =
    "I apologize, but I encountered an error. Could you please repeat that?";

// What the voice placeholder "hears"
pub const VOICE_SAMPLE: &str =
    "I would like to make a reservation for 4 people tomorrow at 7 PM";

pub const RESERVATION_DETAILS_REPLY: &str = "Excellent! I can confirm that reservation for you. May I have your name and phone number to complete the booking? We'll send you a confirmation text.";

pub const RESERVATION_START_REPLY: &str = "I'd be delighted to help with your reservation! How many guests will be joining you, and what date and time works best?";

pub const MENU_REPLY: &str = "We specialize in authentic Italian cuisine! Our most popular dishes include our handmade Truffle Mushroom Ravioli, wood-fired Margherita Pizza, and slow-braised Osso Buco. We also have wonderful seafood dishes and fresh salads. Are you interested in any particular type of cuisine or have any dietary restrictions?";

pub const DIETARY_REPLY: &str = "We absolutely accommodate dietary restrictions! We have dedicated vegetarian and vegan options, including vegan pasta dishes and pizzas with dairy-free cheese. We also offer gluten-free pasta and pizza crusts. Our chef is happy to modify dishes for allergies - just let your server know when you arrive.";

pub const HOURS_REPLY: &str = "We're open Monday through Thursday from 11am to 10pm, Friday and Saturday from 11am to 11pm, and Sunday from 12pm to 9pm. Would you like to make a reservation?";

pub const LOCATION_REPLY: &str = "We're located at 123 Main Street in Downtown, CA 94102. There's street parking available, and we also validate parking for the garage on 5th Avenue. We're about a 5-minute walk from the Main Street metro station. Can I help you with anything else?";

pub const GREETING_REPLY: &str = "Hello! Thank you for calling. How may I assist you today? I can help with reservations, answer menu questions, or provide information about our hours and location.";

pub const CLOSING_REPLY: &str = "You're very welcome! Thank you for calling, and we look forward to serving you. Have a wonderful day! 🍝";

pub const FALLBACK_REPLY: &str = "I'd be happy to help you with that! I can assist with making reservations, answering questions about our menu and specialties, or providing information about our hours and location. What would you like to know?";

/// Reply once the caller has told us how many are coming.
pub fn party_size_reply(party_size: &str) -> String {
    format!(
        "Perfect! I'd be happy to help you reserve a table for {}. What date and time would you prefer? We're open Monday-Thursday 11am-10pm, Friday-Saturday 11am-11pm, and Sunday 12pm-9pm.",
        party_size
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

/// The info card shown next to the call pane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantInfo {
    pub name: String,
    pub hours: Vec<OpeningHours>,
    pub address: Vec<String>,
    pub specialties: Vec<String>,
}

impl RestaurantInfo {
    fn hours(days: &str, hours: &str) -> OpeningHours {
        OpeningHours {
            days: days.to_string(),
            hours: hours.to_string(),
        }
    }
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: String::from("Restaurant Calling Agent"),
            hours: vec![
                Self::hours("Mon-Thu", "11am-10pm"),
                Self::hours("Fri-Sat", "11am-11pm"),
                Self::hours("Sunday", "12pm-9pm"),
            ],
            address: vec![
                String::from("123 Main Street"),
                String::from("Downtown, CA 94102"),
            ],
            specialties: vec![
                String::from("Italian Cuisine, Fresh Pasta"),
                String::from("Wood-Fired Pizza"),
            ],
        }
    }
}
