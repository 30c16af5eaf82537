pub mod convert;
pub mod routing;
pub mod types;
