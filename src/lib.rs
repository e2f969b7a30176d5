//! Mixel is a pixel-format-aware software compositor with an embedded
//! scripting value model.
//!
//! The raster half blends bitmaps across six pixel formats with a per-call
//! global alpha, optional sub-rectangle clipping and nearest-neighbor scaling.
//! The script half provides the tagged [`Value`] model, the shared
//! [`ObjectArray`] container and an explicit [`FuncRegistry`] for the
//! `array_*` function set. Typical flow:
//!
//! - Wrap pixel memory in a [`Bitmap`], or borrow it via [`BitmapRef`] / [`BitmapMut`]
//! - Composite with [`blend_image`] or [`Bitmap::blend_from`]
//! - On the script side, build a [`FuncRegistry`], call
//!   [`register_array_funcs`] and dispatch calls by name
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blend;
mod foundation;
mod raster;
mod script;

pub use crate::foundation::core::{Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{MixelError, MixelResult};

pub use crate::blend::dispatch::blend_image;
pub use crate::raster::bitmap::{Bitmap, BitmapMut, BitmapRef};
pub use crate::raster::clip::{BlendClip, clip_blend_rects};
pub use crate::raster::format::PixelFormat;
pub use crate::script::array::ObjectArray;
pub use crate::script::funcs::register_array_funcs;
pub use crate::script::registry::{FuncRegistry, ScriptFn};
pub use crate::script::value::{ArrayRef, Value, ValueKind};
