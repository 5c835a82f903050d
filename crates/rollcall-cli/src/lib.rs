//! Library components of the notification pipeline driver.

pub mod audit;
pub mod delivery;
pub mod logging;
