//! Domain model: candidates, members, the ports the registries implement, and
//! the read-side projections used to redact tallies.

pub mod candidate;
pub mod member;
pub mod ports;
pub mod view;
