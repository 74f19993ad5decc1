//! In-memory transforms over a decoded [`Image`].
//!
//! Every transform is also available as an [`Operation`] value so a driver
//! can build a list of edits and run them with [`Image::apply`].

mod color;
mod geometry;

pub use color::{average, sepia_tone};

use crate::error::BmpError;
use crate::image::Image;

/// A single edit applied in place to an [`Image`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    InvertColors,
    FlipHorizontal,
    FlipVertical,
    Grayscale,
    IsolateRed,
    IsolateGreen,
    IsolateBlue,
    Sepia,
    Transpose,
    Rotate90Left,
    Rotate90Right,
    /// See [`Image::crop`] for the bound semantics.
    Crop {
        x_begin: u32,
        y_begin: u32,
        x_end: u32,
        y_end: u32,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvertColors => "invert colors",
            Self::FlipHorizontal => "flip horizontal",
            Self::FlipVertical => "flip vertical",
            Self::Grayscale => "grayscale",
            Self::IsolateRed => "isolate red",
            Self::IsolateGreen => "isolate green",
            Self::IsolateBlue => "isolate blue",
            Self::Sepia => "sepia",
            Self::Transpose => "transpose",
            Self::Rotate90Left => "rotate 90 left",
            Self::Rotate90Right => "rotate 90 right",
            Self::Crop { .. } => "crop",
        }
    }

    /// Whether the operation can change width or height.
    pub fn changes_geometry(&self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90Left | Self::Rotate90Right | Self::Crop { .. }
        )
    }
}

impl Image {
    /// Run one operation. Only [`Operation::Crop`] can fail.
    pub fn apply(&mut self, operation: Operation) -> Result<(), BmpError> {
        log::trace!("applying {}", operation.name());
        match operation {
            Operation::InvertColors => self.invert_colors(),
            Operation::FlipHorizontal => self.flip_horizontal(),
            Operation::FlipVertical => self.flip_vertical(),
            Operation::Grayscale => self.grayscale(),
            Operation::IsolateRed => self.isolate_red(),
            Operation::IsolateGreen => self.isolate_green(),
            Operation::IsolateBlue => self.isolate_blue(),
            Operation::Sepia => self.sepia(),
            Operation::Transpose => self.transpose(),
            Operation::Rotate90Left => self.rotate90_left(),
            Operation::Rotate90Right => self.rotate90_right(),
            Operation::Crop {
                x_begin,
                y_begin,
                x_end,
                y_end,
            } => self.crop(x_begin, y_begin, x_end, y_end)?,
        }
        Ok(())
    }

    /// Run operations in order, stopping at the first failure.
    pub fn apply_all(
        &mut self,
        operations: impl IntoIterator<Item = Operation>,
    ) -> Result<(), BmpError> {
        operations.into_iter().try_for_each(|op| self.apply(op))
    }
}
