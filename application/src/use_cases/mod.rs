//! Application use cases

pub mod request_advice;
