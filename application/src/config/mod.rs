//! Application configuration types.

mod advice_params;

pub use advice_params::AdviceParams;
