//! Growable bitmap lists filled by subtitle rendering bridges
//!
//! A renderer produces a set of positioned alpha bitmaps per video frame.
//! [`BitmapList`] collects them for the compositor, reusing its allocation
//! across frames so steady-state rendering stops allocating once the list
//! has grown to the size a track needs.

use std::sync::Arc;

/// Smallest part capacity a list grows to.
const MIN_PARTS_ALLOC: usize = 32;

/// Pixel layout shared by every part of a [`BitmapList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitmapFormat {
    /// The list has not been claimed by a producer yet.
    #[default]
    None,
    /// 8-bit alpha bitmaps, each tinted by its part's packed color.
    /// SSA/ASS engines produce this format.
    Mono,
    /// 32-bit BGRA bitmaps, as image-based subtitle decoders produce.
    Bgra,
}

/// One positioned subtitle bitmap.
///
/// The pixel buffer is shared with its producer: cloning a part clones a
/// reference, never pixels.
#[derive(Debug, Clone)]
pub struct SubBitmap {
    /// Pixel data, `stride` bytes per row.
    pub bitmap: Arc<[u8]>,
    /// Bytes per bitmap row.
    pub stride: usize,
    /// Horizontal placement on the video frame.
    pub x: i32,
    /// Vertical placement on the video frame.
    pub y: i32,
    /// Bitmap width in pixels.
    pub w: i32,
    /// Bitmap height in pixels.
    pub h: i32,
    /// Displayed width; equals `w` until the part is rescaled.
    pub dw: i32,
    /// Displayed height; equals `h` until the part is rescaled.
    pub dh: i32,
    /// Packed color tinting a [`BitmapFormat::Mono`] bitmap.
    pub color: u32,
}

/// Bitmap parts accumulated for one rendered frame.
///
/// The list is owned by the caller and reused across frames: a producer
/// appends with [`push`](Self::push), the compositor reads
/// [`parts`](Self::parts), and the caller [`clear`](Self::clear)s before the
/// next frame when accumulation must start over. Appends without a `clear`
/// are cumulative. The change counter lets the compositor skip compositing
/// frames whose content did not change.
///
/// Part storage grows only when an append would overflow it, doubling with
/// a floor of 32 slots, and never shrinks while accumulating.
#[derive(Debug, Clone, Default)]
pub struct BitmapList {
    parts: Vec<SubBitmap>,
    format: BitmapFormat,
    change_id: u64,
}

impl BitmapList {
    /// Empty list with no storage allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parts appended so far, in append order.
    #[must_use]
    pub fn parts(&self) -> &[SubBitmap] {
        &self.parts
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the list holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Allocated part slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.parts.capacity()
    }

    /// Format every part shares.
    #[must_use]
    pub fn format(&self) -> BitmapFormat {
        self.format
    }

    /// Content-change counter.
    #[must_use]
    pub fn change_id(&self) -> u64 {
        self.change_id
    }

    /// Record that the rendered content differs from the previous frame.
    pub fn bump_change_id(&mut self) {
        self.change_id += 1;
    }

    /// Claim the list for `format`.
    ///
    /// A list holds parts of one format for its whole lifetime; claiming an
    /// already-claimed list with a different format is a caller bug.
    pub fn set_format(&mut self, format: BitmapFormat) {
        debug_assert!(
            self.format == BitmapFormat::None || self.format == format,
            "bitmap list already holds {:?} parts",
            self.format,
        );
        self.format = format;
    }

    /// Append one part, growing storage first if it is full.
    pub fn push(&mut self, part: SubBitmap) {
        if self.parts.len() == self.parts.capacity() {
            let grown = (self.parts.capacity() * 2).max(MIN_PARTS_ALLOC);
            self.parts.reserve_exact(grown - self.parts.len());
        }
        self.parts.push(part);
    }

    /// Drop all parts, keeping the allocation, format, and change counter.
    pub fn clear(&mut self) {
        self.parts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(w: i32, h: i32) -> SubBitmap {
        SubBitmap {
            bitmap: Arc::from(vec![0u8; (w * h).unsigned_abs() as usize]),
            stride: w.unsigned_abs() as usize,
            x: 0,
            y: 0,
            w,
            h,
            dw: w,
            dh: h,
            color: 0,
        }
    }

    #[test]
    fn test_capacity_growth_law() {
        let mut list = BitmapList::new();
        assert_eq!(list.capacity(), 0);

        list.push(part(4, 4));
        assert_eq!(list.capacity(), MIN_PARTS_ALLOC);

        for _ in 1..MIN_PARTS_ALLOC {
            list.push(part(4, 4));
        }
        assert_eq!(list.len(), MIN_PARTS_ALLOC);
        assert_eq!(list.capacity(), MIN_PARTS_ALLOC);

        list.push(part(4, 4));
        assert_eq!(list.capacity(), MIN_PARTS_ALLOC * 2);
    }

    #[test]
    fn test_count_never_exceeds_capacity() {
        let mut list = BitmapList::new();
        for _ in 0..100 {
            list.push(part(2, 2));
            assert!(list.len() <= list.capacity());
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.capacity(), 128);
    }

    #[test]
    fn test_clear_keeps_capacity_format_and_change_id() {
        let mut list = BitmapList::new();
        list.set_format(BitmapFormat::Mono);
        list.bump_change_id();
        for _ in 0..40 {
            list.push(part(2, 2));
        }
        let capacity = list.capacity();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), capacity);
        assert_eq!(list.format(), BitmapFormat::Mono);
        assert_eq!(list.change_id(), 1);
    }

    #[test]
    fn test_set_format_is_idempotent() {
        let mut list = BitmapList::new();
        list.set_format(BitmapFormat::Mono);
        list.set_format(BitmapFormat::Mono);
        assert_eq!(list.format(), BitmapFormat::Mono);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "already holds")]
    fn test_set_format_mismatch_asserts() {
        let mut list = BitmapList::new();
        list.set_format(BitmapFormat::Bgra);
        list.set_format(BitmapFormat::Mono);
    }

    #[test]
    fn test_parts_alias_pixels() {
        let source = part(8, 8);
        let mut list = BitmapList::new();
        list.push(source.clone());
        assert!(Arc::ptr_eq(&list.parts()[0].bitmap, &source.bitmap));
    }
}
