// Domain layer: wire models and the ports the HTTP layer depends on
pub mod model;
pub mod ports;
