pub mod provider_cbr;
mod rate;

pub use rate::*;
pub use provider_cbr as cbr;
