pub mod address;
pub mod csv;
pub mod place;
