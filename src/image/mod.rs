pub mod bgr;
pub mod io;
pub mod mask;
pub mod traits;

pub use self::bgr::{BgrImage, ImageBgr8};
pub use self::mask::Mask;
pub use self::traits::{ImageView, ImageViewMut, Rows};
