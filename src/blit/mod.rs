pub(crate) mod engine;
pub(crate) mod filter;
pub(crate) mod kernel;
pub(crate) mod parallel;
pub(crate) mod request;
