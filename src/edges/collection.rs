use serde::Serialize;

/// Committed boundary span tagged with the bin that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub bin: usize,
    pub low: f64,
    pub high: f64,
}

impl Edge {
    pub fn new(bin: usize, low: f64, high: f64) -> Self {
        Self { bin, low, high }
    }

    /// Strict containment of `value` in the open span `(low, high)`.
    #[inline]
    pub fn spans(&self, value: f64) -> bool {
        self.low < value && self.high > value
    }

    /// Length of the intersection with the open interval `(low, high)`,
    /// zero when they are disjoint.
    pub fn overlap(&self, low: f64, high: f64) -> f64 {
        (self.high.min(high) - self.low.max(low)).max(0.0)
    }
}

/// All edges lying on one major coordinate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCollection {
    pub coord: f64,
    pub edges: Vec<Edge>,
}

impl EdgeCollection {
    pub fn new(coord: f64, first: Edge) -> Self {
        Self {
            coord,
            edges: vec![first],
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges whose open span contains `value`.
    pub fn spanning(&self, value: f64) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.spans(value))
    }

    /// Multiply the coordinate by `major` and every span by `minor`.
    pub(crate) fn scale(&mut self, major: f64, minor: f64) {
        self.coord *= major;
        for edge in &mut self.edges {
            let (a, b) = (edge.low * minor, edge.high * minor);
            edge.low = a.min(b);
            edge.high = a.max(b);
        }
    }
}
