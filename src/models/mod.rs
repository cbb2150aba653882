pub use errors::*;
pub use form_draft::*;
pub use glass_request::*;
pub use request_record::*;

pub mod errors;
pub mod form_draft;
pub mod glass_request;
pub mod request_record;
pub mod serde_utils;
