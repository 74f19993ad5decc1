//! Geometric transforms: flips, transpose, quarter turns and crop.
//!
//! ```text
//! flip_horizontal    flip_vertical      transpose
//! ┌─────┐ ┌─────┐    ┌─────┐ ┌─────┐    ┌─────┐ ┌───┐
//! │a b c│ │c b a│    │a b c│ │d e f│    │a b c│ │a d│
//! │d e f│ │f e d│    │d e f│ │a b c│    │d e f│ │b e│
//! └─────┘ └─────┘    └─────┘ └─────┘    └─────┘ │c f│
//!                                               └───┘
//! ```
//!
//! Transforms that change the dimensions also refresh the width, height,
//! row padding and file size recorded in the headers.

use alloc::vec::Vec;

use crate::error::{BmpError, CropViolation};
use crate::image::Image;
use crate::pixel::Pixel;

impl Image {
    /// Mirror every row around the vertical axis.
    pub fn flip_horizontal(&mut self) {
        for row in &mut self.pixels {
            row.reverse();
        }
    }

    /// Mirror the row order around the horizontal axis.
    pub fn flip_vertical(&mut self) {
        let len = self.pixels.len();
        let (top, bottom) = self.pixels.split_at_mut(len / 2);
        for (t, b) in top.iter_mut().zip(bottom.iter_mut().rev()) {
            core::mem::swap(t, b);
        }
    }

    /// Swap rows and columns: pixel `(row, col)` moves to `(col, row)`.
    ///
    /// The new geometry is taken from the grid, so a header width edited
    /// through [`Image::info_header_mut`] is replaced.
    pub fn transpose(&mut self) {
        let rows = self.pixels.len();
        let cols = self.pixels.first().map_or(0, Vec::len);
        let transposed: Vec<Vec<Pixel>> = (0..cols)
            .map(|col| self.pixels.iter().map(|row| row[col]).collect())
            .collect();
        self.pixels = transposed;
        self.set_dimensions(rows as u32, cols as u32);
    }

    /// Rotate 90 degrees counterclockwise.
    pub fn rotate90_left(&mut self) {
        self.transpose();
        self.flip_vertical();
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate90_right(&mut self) {
        self.transpose();
        self.flip_horizontal();
    }

    /// Keep the columns `x_begin..x_end` of the rows `y_begin..y_end`.
    ///
    /// Every bound must be a valid index (`< width` / `< height`) and the
    /// begin bounds may not pass the end bounds. The end bounds are
    /// exclusive, so the column `x_end` and row `y_end` are not kept even
    /// though they are validated as in range. On error the image is left
    /// untouched.
    pub fn crop(
        &mut self,
        x_begin: u32,
        y_begin: u32,
        x_end: u32,
        y_end: u32,
    ) -> Result<(), BmpError> {
        let (width, height) = (self.info.width, self.info.height);
        if !(x_begin < width && x_end < width) {
            return Err(BmpError::OutOfRange(CropViolation::XBeyondWidth));
        }
        if x_begin > x_end {
            return Err(BmpError::OutOfRange(CropViolation::XInverted));
        }
        if !(y_begin < height && y_end < height) {
            return Err(BmpError::OutOfRange(CropViolation::YBeyondHeight));
        }
        if y_begin > y_end {
            return Err(BmpError::OutOfRange(CropViolation::YInverted));
        }

        // TODO: add an inclusive-end variant; this one drops the validated
        // end row and column.
        let new_width = x_end - x_begin;
        let new_height = y_end - y_begin;
        let rows = core::mem::take(&mut self.pixels);
        self.pixels = rows
            .into_iter()
            .skip(y_begin as usize)
            .take(new_height as usize)
            .map(|row| {
                row.into_iter()
                    .skip(x_begin as usize)
                    .take(new_width as usize)
                    .collect()
            })
            .collect();
        self.set_dimensions(new_width, new_height);
        Ok(())
    }
}
