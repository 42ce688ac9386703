//! Placeholder pages behind each nav destination. Content for these routes
//! lives outside this workspace; each page only marks where it mounts.

mod home;
pub use home::Home;

mod daily_horoscope;
pub use daily_horoscope::DailyHoroscope;

mod about;
pub use about::About;

mod account;
pub use account::{Login, Register};

mod card;
pub use card::Card;

mod not_found;
pub use not_found::NotFound;
