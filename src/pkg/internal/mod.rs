pub mod adaptors;
pub mod email;
pub mod extract;
