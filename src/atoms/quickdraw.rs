//! QuickDraw geometry types embedded in clipping/matte atoms: a `Rect`
//! (four 16-bit edges) and a `Region` (a size-prefixed rect plus
//! opaque region data this decoder does not interpret).

use crate::error::Result;
use crate::scalar::{i16_be, u16_be};
use crate::transport::{read_array, read_vec, Transport};

/// QuickDraw rect edges are signed (a region can sit above/left of the
/// origin); read via `i16_be`, not `u16_be`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickDrawRect {
    pub top: i16,
    pub left: i16,
    pub bottom: i16,
    pub right: i16,
}

impl QuickDrawRect {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        Ok(Self {
            top: i16_be(read_array(t)?),
            left: i16_be(read_array(t)?),
            bottom: i16_be(read_array(t)?),
            right: i16_be(read_array(t)?),
        })
    }
}

/// `{ size: u16, rect: QuickDrawRect, data }`. `size` covers the whole
/// region, region data itself is left opaque: interpreting QuickDraw's
/// packed polygon/bitmap encoding is outside this decoder's scope.
#[derive(Debug, Clone)]
pub struct QuickDrawRegion {
    pub size: u16,
    pub rect: QuickDrawRect,
    pub data: Vec<u8>,
}

impl QuickDrawRegion {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let size = u16_be(read_array(t)?);
        let rect = QuickDrawRect::decode(t)?;
        let data_len = size.saturating_sub(10);
        let data = read_vec(t, data_len as usize)?;
        Ok(Self { size, rect, data })
    }
}
