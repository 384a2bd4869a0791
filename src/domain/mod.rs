// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod atm;
pub mod audit;
pub mod license;
pub mod repositories;
