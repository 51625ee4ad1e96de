// Domain layer: core models, ports (interfaces), and the assembly services.
// No knowledge of HTTP, filesystems, or CLI surfaces.

pub mod model;
pub mod ports;

pub mod services;
