use std::fmt;

/**
Represents a weighted graph edge as (`u`, `v`).

Vertices are dense indexes in `[0, n)`; the weight defaults to `1.0`.
**/
#[derive(Clone, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl Edge {
    /**
    Creates a (`u`, `v`) `Edge` with the default weight of `1.0`.

    ```
    use centrars::Edge;
    let edge = Edge::new(0, 1);
    assert_eq!(edge.weight, 1.0);
    ```
    **/
    pub fn new(u: usize, v: usize) -> Edge {
        Edge { u, v, weight: 1.0 }
    }

    /**
    Creates a (`u`, `v`) `Edge` with the specified `weight`.

    ```
    use centrars::Edge;
    let edge = Edge::with_weight(0, 1, 2.5);
    assert_eq!(edge.weight, 2.5);
    ```
    **/
    pub fn with_weight(u: usize, v: usize, weight: f64) -> Edge {
        Edge { u, v, weight }
    }

    /// Reverses the edge. (u, v) -> (v, u)
    pub fn reversed(self) -> Edge {
        Edge {
            u: self.v,
            v: self.u,
            ..self
        }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("u", &self.u)
            .field("v", &self.v)
            .field("weight", &self.weight)
            .finish()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}
