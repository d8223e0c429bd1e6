pub mod conversion;
pub mod definition;
pub mod schema;
pub mod specific;

pub use conversion::*;
pub use definition::*;
pub use specific::*;
