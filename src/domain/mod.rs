// Domain layer: wire-level models and ports. Transport details live in adapters.

pub mod model;
pub mod ports;
