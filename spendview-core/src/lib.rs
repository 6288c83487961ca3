pub mod aggregate;
pub mod config;
pub mod home;
pub mod locate;
pub mod notices;
pub mod repository;
pub mod util;

mod logic;
pub use logic::Logic;

pub use home::{HomeError, HomeEvent, HomeState};
pub use spendview_state;
