// Mock-test practice exam: question assembly, the session state machine and
// the registry that owns each session's countdown.

pub mod assembler;
pub mod bank;
pub mod handlers;
pub mod languages;
pub mod registry;
pub mod session;

pub use registry::SessionRegistry;
