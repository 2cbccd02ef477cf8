//! Business service layer

mod readings;

pub use readings::ReadingsService;
