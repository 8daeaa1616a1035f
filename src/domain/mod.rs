// Domain layer: content model, the read-time value object and the ports the
// aggregator is written against.

pub mod duration;
pub mod model;
pub mod ports;
