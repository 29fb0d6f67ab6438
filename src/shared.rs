//! The constant shared by the client scene and the server greeting.

pub const SHARED_MESSAGE: &str = "Hello from the shared module";
