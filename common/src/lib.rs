//! Types and logic shared by the address form frontend and the places proxy.
//!
//! - `model`: the address record, suggestions and the places wire format.
//! - `requests`: payloads sent from the browser to the backend.
//! - `search`: debounce generations and request tickets.
//! - `verify`: ZIP/city lookup against the CSV dataset.

pub mod model;
pub mod requests;
pub mod search;
pub mod verify;
