mod availabilities;
mod availability;
mod count;
mod item;

pub use self::availabilities::Availabilities;
pub use self::availability::Availability;
pub use self::count::Count;
pub use self::item::Item;
