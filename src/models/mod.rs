pub mod report;
pub mod token;
pub mod transcript;

pub use report::*;
pub use token::*;
pub use transcript::*;
