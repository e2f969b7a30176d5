pub mod bitmap;
pub mod clip;
pub(crate) mod codec;
pub mod format;
