pub mod request;
pub mod response;

pub use request::GenerateRequest;
pub use response::{GenerateErrorResponse, GenerateResponse};
