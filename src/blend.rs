pub mod dispatch;
pub(crate) mod kernel;
