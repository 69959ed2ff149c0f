use overlay_core::Graph;

/// Adapter that turns every insertion into a pair of opposite directed edges.
///
/// Queries are forwarded unchanged, so `neighbours` still reports the
/// out-edges recorded in the wrapped graph.
#[derive(Debug)]
pub struct Undirected<G> {
    inner: G,
}

impl<G: Graph> Undirected<G> {
    /// Wraps `inner`.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Returns the wrapped graph.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Graph> Graph for Undirected<G> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns `true` when at least one of the two directions was new.
    fn set_edge(&mut self, i: usize, j: usize) -> bool {
        let forward = self.inner.set_edge(i, j);
        let backward = self.inner.set_edge(j, i);
        forward || backward
    }

    fn is_edge(&self, i: usize, j: usize) -> bool {
        self.inner.is_edge(i, j)
    }

    fn neighbours(&self, i: usize) -> Vec<usize> {
        self.inner.neighbours(i)
    }

    fn degree(&self, i: usize) -> usize {
        self.inner.degree(i)
    }
}
