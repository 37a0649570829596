// Domain layer: the recipe record and the ports (interfaces) the rest of the crate plugs into.

pub mod model;
pub mod ports;
