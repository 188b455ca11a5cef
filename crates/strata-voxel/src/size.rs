//! World dimensions shared read-only by every generation stage.

use glam::IVec3;
use thiserror::Error;

/// Largest accepted extent on any axis. Keeps local coordinates well inside
/// `i32` and the cell count inside `usize`.
pub const MAX_EXTENT: usize = 1 << 20;

/// Horizontal and vertical extent of a chunk, in blocks.
///
/// A chunk is `width × width` in the horizontal plane and `height` tall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WorldSize {
    width: usize,
    height: usize,
}

/// Errors raised when constructing a [`WorldSize`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldSizeError {
    /// Either extent was zero.
    #[error("world size must be positive, got width {width} and height {height}")]
    Empty {
        /// Requested horizontal extent.
        width: usize,
        /// Requested vertical extent.
        height: usize,
    },

    /// An extent exceeded [`MAX_EXTENT`].
    #[error(
        "world size must be at most {max} per axis, got width {width} and height {height}",
        max = MAX_EXTENT
    )]
    TooLarge {
        /// Requested horizontal extent.
        width: usize,
        /// Requested vertical extent.
        height: usize,
    },
}

impl WorldSize {
    /// Creates a world size, rejecting zero and oversized extents.
    ///
    /// # Errors
    ///
    /// Returns [`WorldSizeError::Empty`] if `width` or `height` is zero and
    /// [`WorldSizeError::TooLarge`] if either exceeds [`MAX_EXTENT`].
    pub fn new(width: usize, height: usize) -> Result<Self, WorldSizeError> {
        if width == 0 || height == 0 {
            return Err(WorldSizeError::Empty { width, height });
        }
        if width > MAX_EXTENT || height > MAX_EXTENT {
            return Err(WorldSizeError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    /// Horizontal extent (both X and Z).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Vertical extent (Y).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width × height × width`.
    #[inline]
    pub fn volume(&self) -> usize {
        self.width * self.height * self.width
    }

    /// Returns `true` if the signed local coordinate lies inside the chunk.
    #[inline]
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
            && (pos.z as usize) < self.width
    }
}
