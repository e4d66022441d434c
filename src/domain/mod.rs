// Domain layer: result models and ports (transport, config). Depends on serde and the wire method descriptor only.

pub mod model;
pub mod ports;
