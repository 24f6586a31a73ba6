//! Variable-resolution line-number encoding.
//!
//! A call-site line is stored in a 12-bit field plus a 2-bit resolution
//! selector. Resolution `r` keeps `12` magnitude bits but drops the low `r`
//! bits of the line, so each tier covers twice the lines of the one before:
//!
//! ```text
//! res │ first line │ last line │ bucket │ lines covered
//! ────┼────────────┼───────────┼────────┼──────────────
//!  0  │          1 │      4096 │    1   │  4096
//!  1  │       4097 │     12288 │    2   │  8192
//!  2  │      12289 │     28672 │    4   │ 16384
//!  3  │      28673 │     61440 │    8   │ 32768
//! ```
//!
//! Tier 0 is exact. In the coarser tiers a decoded line is the *last* line
//! of its bucket (the dropped bits come back as all ones), and
//! [`line_range`] gives the whole bucket.

use core::ops::RangeInclusive;

/// Raw width of the line field: `2^12` bins.
pub const BINS: u32 = 4096;

/// Highest resolution selector (2 bits).
pub const MAX_RESOLUTION: u32 = 3;

/// Largest line that can be encoded. Larger lines saturate to this.
pub const MAX_LINE: u32 = tier_last(MAX_RESOLUTION);

/// All-ones pattern for the `res` low bits dropped by a tier.
#[inline]
pub const fn offset_bits(res: u32) -> u32 {
    (1 << res) - 1
}

/// First line of tier `res`.
///
/// Equal to `1 + Σ bit_k(2^res - 1) · BINS·2^k`: the cumulative capacity
/// of every finer tier, plus one because lines start at 1.
#[inline]
pub const fn offset(res: u32) -> u32 {
    let bits = offset_bits(res);
    let mut total = 1;
    let mut k = 0;
    while k < MAX_RESOLUTION {
        total += ((bits >> k) & 1) * (BINS << k);
        k += 1;
    }
    total
}

/// Last line of tier `res`.
#[inline]
pub const fn tier_last(res: u32) -> u32 {
    offset(res) + (BINS << res) - 1
}

/// Clamp a line into `1..=MAX_LINE`.
#[inline]
pub const fn saturate(line: u32) -> u32 {
    if line == 0 {
        1
    } else if line > MAX_LINE {
        MAX_LINE
    } else {
        line
    }
}

/// Smallest resolution whose tier holds `line` (after saturation).
#[inline]
pub const fn resolution_for(line: u32) -> u32 {
    let line = saturate(line);
    let mut res = 0;
    while res < MAX_RESOLUTION {
        if line < offset(res + 1) {
            return res;
        }
        res += 1;
    }
    MAX_RESOLUTION
}

/// A line number packed as `(resolution, 12-bit field)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LineField {
    resolution: u32,
    field: u32,
}

impl LineField {
    /// Encode a source line. Out-of-range lines saturate.
    pub const fn encode(line: u32) -> Self {
        let line = saturate(line);
        let resolution = resolution_for(line);
        Self {
            resolution,
            field: (line - offset(resolution)) >> resolution,
        }
    }

    /// Rebuild from raw bits. Inputs are masked to their widths.
    #[inline]
    pub const fn from_parts(resolution: u32, field: u32) -> Self {
        Self {
            resolution: resolution & MAX_RESOLUTION,
            field: field & (BINS - 1),
        }
    }

    /// Number of low line bits dropped.
    #[inline]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The 12-bit bucket index within the tier.
    #[inline]
    pub const fn field(&self) -> u32 {
        self.field
    }

    /// The decoded line: the last line of the bucket.
    #[inline]
    pub const fn line(&self) -> u32 {
        (self.field << self.resolution) + offset(self.resolution) + offset_bits(self.resolution)
    }

    /// First line of the bucket.
    #[inline]
    pub const fn first_line(&self) -> u32 {
        self.line() - offset_bits(self.resolution)
    }

    /// Every line that encodes to this field.
    #[inline]
    pub fn line_range(&self) -> RangeInclusive<u32> {
        self.first_line()..=self.line()
    }

    /// True if this field pins exactly one line.
    #[inline]
    pub const fn is_exact(&self) -> bool {
        self.resolution == 0
    }
}

/// Bucket of lines that `line` shares an encoding with.
pub fn line_range(line: u32) -> RangeInclusive<u32> {
    LineField::encode(line).line_range()
}

// Build-time check of the tier table.
const _: () = {
    assert!(offset(0) == 1);
    assert!(MAX_LINE == 61440);
    let mut res = 0;
    while res <= MAX_RESOLUTION {
        assert!(tier_last(res) - offset(res) + 1 == BINS << res);
        if res < MAX_RESOLUTION {
            assert!(tier_last(res) + 1 == offset(res + 1));
        }
        assert!(resolution_for(offset(res)) == res);
        assert!(resolution_for(tier_last(res)) == res);

        let last = LineField::encode(tier_last(res));
        assert!(last.field() == BINS - 1);
        assert!(last.line() == tier_last(res));

        let first = LineField::encode(offset(res));
        assert!(first.field() == 0);
        assert!(first.first_line() == offset(res));
        res += 1;
    }
};
