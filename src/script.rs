pub mod array;
pub mod funcs;
pub mod registry;
pub mod value;
