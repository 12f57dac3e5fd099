mod health_port;
mod resource_port;
mod share_port;

pub use health_port::{HealthPort, ServiceInfo};
pub use resource_port::ResourcePort;
pub use share_port::SharePort;

#[cfg(test)]
pub use health_port::MockHealthPort;
#[cfg(test)]
pub use share_port::MockSharePort;
