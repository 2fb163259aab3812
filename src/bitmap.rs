//! The bitmap grid and its painting operations
//!
//! Coordinates are 1-based with `x` the column (left to right) and `y` the
//! row (top to bottom). Every mutating operation validates all of its
//! arguments first and only then writes, so a rejected call never leaves a
//! partially painted grid behind.

use std::fmt;

use log::debug;

use crate::error::Axis;
use crate::{fill, Colour, Error, Result};

/// Smallest accepted width or height
pub const MIN_SIZE: i64 = 1;
/// Largest accepted width or height
pub const MAX_SIZE: i64 = 250;

/// A fixed-size grid of colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    // grid[row][col], each row its own allocation
    grid: Vec<Vec<Colour>>,
}

impl Bitmap {
    /// Create a `width` x `height` bitmap filled with [`Colour::BACKGROUND`].
    ///
    /// # Examples
    ///
    /// ```
    /// let bitmap = bitmap_editor::Bitmap::new(3, 5).unwrap();
    /// assert_eq!(bitmap.size(), (3, 5));
    /// assert!(bitmap_editor::Bitmap::new(0, 5).is_err());
    /// ```
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(Error::InvalidSize { width, height });
        }

        let (width, height) = (width as usize, height as usize);
        debug!("creating {}x{} bitmap", width, height);
        Ok(Self {
            width,
            height,
            grid: vec![vec![Colour::BACKGROUND; width]; height],
        })
    }

    /// `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get_colour(&self, x: i64, y: i64) -> Result<Colour> {
        let (col, row) = self.locate(x, y)?;
        Ok(self.grid[row][col])
    }

    /// Paint the single pixel `(x, y)`.
    pub fn set_colour<C>(&mut self, x: i64, y: i64, colour: C) -> Result<()>
    where
        C: TryInto<Colour>,
        Error: From<C::Error>,
    {
        let (col, row) = self.locate(x, y)?;
        let colour = colour.try_into()?;
        self.grid[row][col] = colour;
        Ok(())
    }

    /// Paint column `x` between rows `y1` and `y2` inclusive, in either order.
    pub fn vertical_segment<C>(&mut self, x: i64, y1: i64, y2: i64, colour: C) -> Result<()>
    where
        C: TryInto<Colour>,
        Error: From<C::Error>,
    {
        let (col, top) = self.locate(x, y1)?;
        let (_, bottom) = self.locate(x, y2)?;
        let colour = colour.try_into()?;

        for row in &mut self.grid[top.min(bottom)..=top.max(bottom)] {
            row[col] = colour;
        }
        Ok(())
    }

    /// Paint row `y` between columns `x1` and `x2` inclusive, in either order.
    pub fn horizontal_segment<C>(&mut self, x1: i64, x2: i64, y: i64, colour: C) -> Result<()>
    where
        C: TryInto<Colour>,
        Error: From<C::Error>,
    {
        let (left, row) = self.locate(x1, y)?;
        let (right, _) = self.locate(x2, y)?;
        let colour = colour.try_into()?;

        self.grid[row][left.min(right)..=left.max(right)].fill(colour);
        Ok(())
    }

    /// Reset every pixel to [`Colour::BACKGROUND`].
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(Colour::BACKGROUND);
        }
    }

    /// Bucket fill: recolour the 4-connected region sharing the colour at `(x, y)`.
    ///
    /// Filling with the colour already present is a successful no-op.
    pub fn fill_bucket<C>(&mut self, x: i64, y: i64, colour: C) -> Result<()>
    where
        C: TryInto<Colour>,
        Error: From<C::Error>,
    {
        let (col, row) = self.locate(x, y)?;
        let colour = colour.try_into()?;

        if self.grid[row][col] == colour {
            return Ok(());
        }

        let grid = &self.grid;
        let cells = fill::region(col, row, self.width, self.height, |cx, cy| grid[cy][cx]);
        debug!("fill at ({}, {}) with {} repaints {} cells", x, y, colour, cells.len());
        for (cx, cy) in cells {
            self.grid[cy][cx] = colour;
        }
        Ok(())
    }

    /// Each row as a string, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.iter().map(|row| row.iter().map(|c| c.as_char()).collect())
    }

    /// Text dump: one line per row, every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }

    /// Validate a 1-based coordinate and convert it to zero-based `(col, row)`.
    fn locate(&self, x: i64, y: i64) -> Result<(usize, usize)> {
        Ok((check_axis(Axis::X, x, self.width)?, check_axis(Axis::Y, y, self.height)?))
    }
}

fn check_axis(axis: Axis, value: i64, max: usize) -> Result<usize> {
    if value >= 1 && value <= max as i64 {
        Ok(value as usize - 1)
    } else {
        Err(Error::CoordinateOutOfRange { axis, value, max })
    }
}

impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_background(bitmap: &Bitmap) -> bool {
        bitmap.grid.iter().flatten().all(|c| *c == Colour::BACKGROUND)
    }

    #[test]
    fn new_rejects_sizes_outside_range() {
        for (w, h) in [(-1, 1), (2, -3), (0, 1), (2, 0), (251, 24), (250, 251), (1234, 5678)] {
            assert!(matches!(Bitmap::new(w, h), Err(Error::InvalidSize { .. })), "{}x{}", w, h);
        }
    }

    #[test]
    fn new_accepts_bounds() {
        assert_eq!(Bitmap::new(1, 1).unwrap().size(), (1, 1));
        let big = Bitmap::new(250, 250).unwrap();
        assert_eq!(big.size(), (250, 250));
        assert!(all_background(&big));
    }

    #[test]
    fn rows_are_not_aliased() {
        let mut bitmap = Bitmap::new(3, 3).unwrap();
        bitmap.set_colour(2, 1, 'A').unwrap();
        assert_eq!(bitmap.render(), "OAO\nOOO\nOOO\n");
    }

    #[test]
    fn set_colour_reports_axis() {
        let mut bitmap = Bitmap::new(25, 25).unwrap();
        match bitmap.set_colour(4, -1, 'C') {
            Err(Error::CoordinateOutOfRange { axis, value, max }) => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(value, -1);
                assert_eq!(max, 25);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn segment_with_bad_second_endpoint_paints_nothing() {
        let mut bitmap = Bitmap::new(5, 5).unwrap();
        assert!(bitmap.vertical_segment(2, 1, 6, 'A').is_err());
        assert!(bitmap.horizontal_segment(1, 9, 2, 'A').is_err());
        assert!(bitmap.horizontal_segment(1, 3, 2, "a").is_err());
        assert!(all_background(&bitmap));
    }

    #[test]
    fn segment_single_cell() {
        let mut bitmap = Bitmap::new(3, 3).unwrap();
        bitmap.vertical_segment(2, 2, 2, 'B').unwrap();
        bitmap.horizontal_segment(3, 3, 3, 'C').unwrap();
        assert_eq!(bitmap.render(), "OOO\nOBO\nOOC\n");
    }

    #[test]
    fn clear_resets() {
        let mut bitmap = Bitmap::new(4, 2).unwrap();
        bitmap.horizontal_segment(1, 4, 2, 'Z').unwrap();
        bitmap.clear();
        assert!(all_background(&bitmap));
        assert_eq!(bitmap, Bitmap::new(4, 2).unwrap());
    }

    #[test]
    fn fill_same_colour_is_noop() {
        let mut bitmap = Bitmap::new(3, 3).unwrap();
        bitmap.set_colour(1, 1, 'A').unwrap();
        let before = bitmap.clone();
        bitmap.fill_bucket(2, 2, 'O').unwrap();
        assert_eq!(bitmap, before);
    }

    #[test]
    fn display_matches_render() {
        let mut bitmap = Bitmap::new(2, 2).unwrap();
        bitmap.set_colour(1, 2, Colour::parse("Q").unwrap()).unwrap();
        assert_eq!(bitmap.to_string(), bitmap.render());
        assert_eq!(bitmap.render(), "OO\nQO\n");
    }
}
