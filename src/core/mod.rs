pub mod contrast;
pub mod reservation;
pub mod subdomain;

pub use crate::domain::model::{
    AdjustedColor, ColorRamp, ContrastResult, LabelValidation, Rgb, SubdomainCandidate,
    SubdomainCheckResult, WcagLevel,
};
pub use crate::domain::ports::{Clock, ResolveOutcome, Resolver, ReservationStore};
pub use crate::utils::error::Result;
