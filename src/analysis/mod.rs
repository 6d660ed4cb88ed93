pub mod protocol;
pub mod sentiment;

pub use protocol::{ProtocolChecker, ProtocolConfig};
pub use sentiment::score;
