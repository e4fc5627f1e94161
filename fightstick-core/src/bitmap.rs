//! Read-only 1-bit raster images.
//!
//! A [`Bitmap`] borrows its pixel data, so an image can live in flash (via
//! `include_bytes!`) or in a test-local array. Rows are packed, each padded to
//! a whole byte. Two bit orders are supported: least-significant-bit first,
//! the layout of generated C image tables, and most-significant-bit first, the
//! layout of binary PBM (`P4`) files.

/// Order of pixels inside one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Pixel `x` is bit `x % 8`.
    Lsb0,
    /// Pixel `x` is bit `7 - x % 8`.
    Msb0,
}

/// Error type for bitmap construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitmapError {
    /// Width or height is zero.
    ZeroDimension,
    /// Fewer bytes than `height` rows of `ceil(width / 8)` bytes.
    Truncated,
    /// The data does not start with the `P4` magic.
    BadMagic,
    /// The PBM header is malformed or its dimensions do not fit in `u16`.
    BadHeader,
}

impl core::fmt::Display for BitmapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "bitmap has a zero dimension"),
            Self::Truncated => write!(f, "bitmap data is truncated"),
            Self::BadMagic => write!(f, "not a binary PBM image"),
            Self::BadHeader => write!(f, "malformed PBM header"),
        }
    }
}

/// Read-only bit grid addressed by `(x, y)`; a set bit means "ink".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    stride: usize,
    bit_order: BitOrder,
}

impl<'a> Bitmap<'a> {
    /// Canvas width of the Switch drawing screens the printer targets.
    pub const CANVAS_WIDTH: u16 = 320;
    /// Canvas height of the Switch drawing screens the printer targets.
    pub const CANVAS_HEIGHT: u16 = 120;

    /// Wrap LSB-first row data.
    ///
    /// # Errors
    ///
    /// See [`Bitmap::with_bit_order`].
    pub const fn new(data: &'a [u8], width: u16, height: u16) -> Result<Self, BitmapError> {
        Self::with_bit_order(data, width, height, BitOrder::Lsb0)
    }

    /// Wrap row data with an explicit bit order.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::ZeroDimension`] for an empty geometry and
    /// [`BitmapError::Truncated`] if `data` is shorter than the geometry needs.
    /// Trailing bytes are ignored.
    pub const fn with_bit_order(
        data: &'a [u8],
        width: u16,
        height: u16,
        bit_order: BitOrder,
    ) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::ZeroDimension);
        }
        let stride = (width as usize).div_ceil(8);
        if data.len() < stride * height as usize {
            return Err(BitmapError::Truncated);
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            bit_order,
        })
    }

    /// Parse a binary PBM (`P4`) image.
    ///
    /// Comments in the header are skipped. The raster starts after the single
    /// whitespace byte that follows the height.
    ///
    /// # Errors
    ///
    /// Returns [`BitmapError::BadMagic`] without the `P4` prefix,
    /// [`BitmapError::BadHeader`] for unparseable dimensions, and the
    /// [`Bitmap::with_bit_order`] errors for the raster itself.
    pub fn from_pbm(bytes: &'a [u8]) -> Result<Self, BitmapError> {
        if !bytes.starts_with(b"P4") {
            return Err(BitmapError::BadMagic);
        }

        let mut header = HeaderReader { bytes, pos: 2 };
        let width = header.read_dimension()?;
        let height = header.read_dimension()?;
        if !bytes.get(header.pos).is_some_and(u8::is_ascii_whitespace) {
            return Err(BitmapError::BadHeader);
        }

        Self::with_bit_order(&bytes[header.pos + 1..], width, height, BitOrder::Msb0)
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check whether `(x, y)` lies inside the image.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Pixel at `(x, y)`. Out-of-bounds positions read as blank.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        let byte = self.data[y * self.stride + x / 8];
        let bit = match self.bit_order {
            BitOrder::Lsb0 => x % 8,
            BitOrder::Msb0 => 7 - x % 8,
        };
        byte & (1 << bit) != 0
    }

    /// Number of pixels that will be inked.
    #[must_use]
    pub fn ink_count(&self) -> u32 {
        let mut count = 0;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                count += u32::from(self.get(x, y));
            }
        }
        count
    }
}

/// Cursor over the text part of a PBM header.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl HeaderReader<'_> {
    fn skip_separators(&mut self) {
        loop {
            match self.bytes.get(self.pos) {
                Some(b'#') => {
                    while let Some(&b) = self.bytes.get(self.pos) {
                        self.pos += 1;
                        if b == b'\n' {
                            break;
                        }
                    }
                }
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                _ => return,
            }
        }
    }

    fn read_dimension(&mut self) -> Result<u16, BitmapError> {
        self.skip_separators();
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(&b) = self.bytes.get(self.pos) {
            if !b.is_ascii_digit() {
                break;
            }
            value = value * 10 + u32::from(b - b'0');
            if value > u32::from(u16::MAX) {
                return Err(BitmapError::BadHeader);
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(BitmapError::BadHeader);
        }
        u16::try_from(value).map_err(|_| BitmapError::BadHeader)
    }
}
