pub(crate) mod channel;
pub(crate) mod core;
pub(crate) mod error;
