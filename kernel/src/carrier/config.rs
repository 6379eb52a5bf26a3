//! `ConfigurationV1` and `ActionV1`: fixed-width vertex bit vectors.
//!
//! # Layout
//!
//! Both types wrap a single `u64`. Bit `i` corresponds to vertex `i`, so the
//! vertex domain is bounded by [`MAX_VERTICES`] = 64.
//!
//! - Configuration bit set: vertex is contaminated.
//! - Action bit set: vertex is decontaminated (targeted) this round.
//!
//! The two types share a representation but are not interchangeable.
//!
//! # Rendering
//!
//! Configurations render as an `n`-character string with vertex 0 first
//! (`'1'` = contaminated). Actions render as their ascending vertex indices
//! separated by single spaces.

/// Hard capacity bound on the vertex domain (width of the native word).
pub const MAX_VERTICES: usize = 64;

/// Bit mask with the low `n` bits set. `n` is clamped to [`MAX_VERTICES`].
#[must_use]
pub const fn width_mask(n: usize) -> u64 {
    if n >= MAX_VERTICES {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

/// A contamination state over the vertex domain.
///
/// Equality and hashing are bitwise on the inner word, which makes the type
/// directly usable as a `HashMap` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigurationV1(u64);

impl ConfigurationV1 {
    /// The fully clean configuration (every bit clear).
    pub const CLEAN: Self = Self(0);

    /// Wrap a raw bit word.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The fully contaminated configuration over `n` vertices.
    #[must_use]
    pub const fn fully_contaminated(n: usize) -> Self {
        Self(width_mask(n))
    }

    /// The raw bit word.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True when no vertex is contaminated.
    #[must_use]
    pub const fn is_clean(self) -> bool {
        self.0 == 0
    }

    /// True when `vertex` is contaminated. Out-of-range vertices are clean.
    #[must_use]
    pub const fn is_contaminated(self, vertex: usize) -> bool {
        vertex < MAX_VERTICES && self.0 & (1u64 << vertex) != 0
    }

    /// Number of contaminated vertices.
    #[must_use]
    pub const fn contaminated_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate contaminated vertices in ascending index order.
    pub fn contaminated(self) -> VertexIter {
        VertexIter(self.0)
    }

    /// Render as `n` characters, vertex 0 first, `'1'` = contaminated.
    #[must_use]
    pub fn render(self, n: usize) -> String {
        (0..n.min(MAX_VERTICES))
            .map(|v| if self.is_contaminated(v) { '1' } else { '0' })
            .collect()
    }
}

/// A set of vertices targeted for decontamination in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionV1(u64);

impl ActionV1 {
    /// The empty action (targets nothing).
    pub const NONE: Self = Self(0);

    /// Wrap a raw bit word.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The action targeting every vertex of an `n`-vertex domain.
    #[must_use]
    pub const fn full(n: usize) -> Self {
        Self(width_mask(n))
    }

    /// Build an action from explicit vertex indices.
    ///
    /// Returns `None` if any index is outside the supported domain.
    /// Duplicate indices collapse into a single bit.
    #[must_use]
    pub fn from_vertices(vertices: &[usize]) -> Option<Self> {
        let mut bits = 0u64;
        for &v in vertices {
            if v >= MAX_VERTICES {
                return None;
            }
            bits |= 1u64 << v;
        }
        Some(Self(bits))
    }

    /// The raw bit word.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Number of targeted vertices.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0.count_ones()
    }

    /// True when `vertex` is targeted by this action.
    #[must_use]
    pub const fn targets(self, vertex: usize) -> bool {
        vertex < MAX_VERTICES && self.0 & (1u64 << vertex) != 0
    }

    /// Iterate targeted vertices in ascending index order.
    pub fn vertices(self) -> VertexIter {
        VertexIter(self.0)
    }

    /// Render as ascending vertex indices separated by single spaces.
    #[must_use]
    pub fn render(self) -> String {
        self.vertices()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Ascending iterator over the set bits of a vertex word.
#[derive(Debug, Clone)]
pub struct VertexIter(u64);

impl Iterator for VertexIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let v = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for VertexIter {}
