mod inbound;
mod outbound;

pub use inbound::*;
pub use outbound::*;

pub trait Storage: WebApiInboundPort + WebApiOutboundPort + Send + Sync + 'static {}

impl<T> Storage for T where T: WebApiInboundPort + WebApiOutboundPort + Send + Sync + 'static {}
