use crate::error::{Error, Result};

/// A zero-copy cursor over a flat cascade description.
///
/// The underlying slice is never copied or reified into an object graph:
/// [`Cascade::stages`] and the iterators it returns all borrow from the same
/// `&'a [f64]` for the lifetime of a single `detect()` call.
///
/// Layout (see the crate's top-level documentation for the full grammar):
/// `[minW, minH, stage*]`, where each stage is `[threshold, nodeCount,
/// node*]` and each node is `[tilted, rectCount, (x,y,w,h,weight)*,
/// nodeThreshold, leftValue, rightValue]`.
#[derive(Debug, Clone, Copy)]
pub struct Cascade<'a> {
    data: &'a [f64],
}

impl<'a> Cascade<'a> {
    /// Wrap a flat cascade slice. Fails only if the slice is too short to
    /// hold the base window size.
    pub fn new(data: &'a [f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(Error::InvalidParameter(
                "cascade must contain at least minW and minH".to_string(),
            ));
        }
        Ok(Self { data })
    }

    #[must_use]
    pub fn min_width(&self) -> f64 {
        self.data[0]
    }

    #[must_use]
    pub fn min_height(&self) -> f64 {
        self.data[1]
    }

    /// Iterate the cascade's stages in order. A cascade with only `minW` and
    /// `minH` and no stage data yields no stages at all.
    #[must_use]
    pub fn stages(&self) -> StageIter<'a> {
        StageIter { data: &self.data[2..] }
    }
}

/// Lazily walks stage boundaries: each stage's node region has a variable
/// length (driven by each node's `rectCount`), so the next stage's offset is
/// only known after scanning this one.
pub struct StageIter<'a> {
    data: &'a [f64],
}

impl<'a> Iterator for StageIter<'a> {
    type Item = Stage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.len() < 2 {
            return None;
        }

        let threshold = self.data[0];
        let node_count = self.data[1] as usize;

        let mut pos = 2usize;
        for _ in 0..node_count {
            let rect_count = self.data[pos + 1] as usize;
            pos += 2 + rect_count * 5 + 3;
        }

        let nodes_data = &self.data[2..pos];
        self.data = &self.data[pos..];

        Some(Stage { threshold, node_count, nodes_data })
    }
}

/// One stage of the cascade: a sum of node outputs compared against
/// `threshold`. Failing a stage rejects the window immediately.
#[derive(Debug, Clone, Copy)]
pub struct Stage<'a> {
    pub threshold: f64,
    node_count: usize,
    nodes_data: &'a [f64],
}

impl<'a> Stage<'a> {
    #[must_use]
    pub fn nodes(&self) -> NodeIter<'a> {
        NodeIter { data: self.nodes_data, remaining: self.node_count }
    }
}

pub struct NodeIter<'a> {
    data: &'a [f64],
    remaining: usize,
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tilted = self.data[0] != 0.0;
        let rect_count = self.data[1] as usize;
        let rects_len = rect_count * 5;
        let rects = &self.data[2..2 + rects_len];

        let threshold = self.data[2 + rects_len];
        let left_value = self.data[2 + rects_len + 1];
        let right_value = self.data[2 + rects_len + 2];

        let node_len = 2 + rects_len + 3;
        self.data = &self.data[node_len..];
        self.remaining -= 1;

        Some(Node { tilted, rects, threshold, left_value, right_value })
    }
}

/// One weak classifier: a weighted sum of Haar rectangles compared, after
/// normalisation, against `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    pub tilted: bool,
    rects: &'a [f64],
    pub threshold: f64,
    pub left_value: f64,
    pub right_value: f64,
}

impl<'a> Node<'a> {
    pub fn rects(&self) -> impl Iterator<Item = HaarRect> + 'a {
        self.rects.chunks_exact(5).map(|c| HaarRect { x: c[0], y: c[1], w: c[2], h: c[3], weight: c[4] })
    }
}

/// A single weighted Haar rectangle, in base-window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct HaarRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub weight: f64,
}
