// Domain layer: the captured-event model and the observer port.

pub mod model;
pub mod ports;
