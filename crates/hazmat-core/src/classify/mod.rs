pub mod asbestos;
pub mod lead;
pub mod outcome;
pub mod refrigerant;

pub use asbestos::classify_asbestos;
pub use lead::{classify_lead, lead_band, parse_concentration, Comparison, Concentration};
pub use outcome::{AsbestosClass, LeadBand, LeadClass};
