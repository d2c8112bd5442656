// Domain layer: core models and ports (interfaces). No logic beyond
// sentinel rendering at the serialization boundary.

pub mod model;
pub mod ports;
