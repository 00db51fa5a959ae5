//! Pixel dimensions read from an image header.

use std::fmt;

/// Width and height of a remote image, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    width: u32,
    height: u32,
}

impl ImageDescriptor {
    /// Creates a descriptor, rejecting zero dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Pixel width.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Pixel height.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }
}

impl fmt::Display for ImageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(ImageDescriptor::new(0, 10).is_none());
        assert!(ImageDescriptor::new(10, 0).is_none());
    }

    #[test]
    fn test_display() {
        let descriptor = ImageDescriptor::new(640, 480).unwrap();
        assert_eq!(descriptor.to_string(), "640x480");
    }
}
