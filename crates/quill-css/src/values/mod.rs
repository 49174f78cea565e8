//! Typed CSS values read out of component value runs.

pub mod background;
pub mod border_image;
pub mod color;
pub mod image;
pub mod keyword;
pub mod length;
pub mod position;

pub use background::BackgroundSize;
pub use border_image::{
    BorderImageRepeat, BorderImageSideWidth, BorderImageSlice, LengthOrNumber,
    NumberOrPercentage, Sides,
};
pub use color::{Color, ColorValue};
pub use image::ImageSource;
pub use keyword::{BackgroundAttachment, BackgroundRepeat, BoxModel, ImageRepeat, PositionKeyword};
pub use length::{AutoLength, LengthValue};
pub use position::{Edge, Point, PositionOffset};
