/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod attributed_module;
mod scan_request;
mod scan_response;

pub use attributed_module::AttributedModule;
pub use scan_request::ScanRequest;
pub use scan_response::{ScanResponse, ScanStats};
