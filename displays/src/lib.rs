mod current_conditions;
pub mod gateways;
pub mod sink;
mod statistics;

pub use current_conditions::CurrentConditionsDisplay;
pub use statistics::StatisticsDisplay;

pub const CELSIUS: &str = "°C";
