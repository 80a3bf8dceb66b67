pub mod codec;
pub mod container;
pub mod error;
pub mod format;

pub use codec::Codec;
pub use container::{decode, encode};
pub use error::{EnkError, Result};
pub use format::{ContainerHeader, EXTENSION, HEADER_SIZE, SIGNATURE};
