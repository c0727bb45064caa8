pub mod array2d;
pub mod bytes;
pub mod error;
pub mod game;
pub mod gfx;
pub mod lz77;
pub mod msg;
pub mod navicust;
pub mod rom;
pub mod save;
pub mod scan;

pub use error::{DirtyReason, Error};
pub use save::{sniff, sniff_raw, Editor};

#[cfg(target_endian = "big")]
compile_error!("Big endian architectures are not currently supported");
