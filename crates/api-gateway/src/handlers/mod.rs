//! Route handlers.
//!
//! Each handler validates its input locally, makes at most one backend call,
//! and returns either a success [`Envelope`](gateway_rest::Envelope) or a
//! [`RestError`](gateway_rest::RestError).

pub mod company;
pub mod system;
