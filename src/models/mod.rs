pub mod cost;
pub mod trip;
