pub mod display;
pub mod ids;
pub mod input;
pub mod models;
mod request;
mod result;
pub mod script;
pub mod services;

pub use display::{ConsoleDisplay, Display, DisplayType};
pub use ids::AccountNumber;
pub use models::{Account, TransactionRecord};
pub use request::UserRequest;
pub use result::Result;
pub use services::{Atm, Bank, Session};
