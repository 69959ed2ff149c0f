/// Private symmetric adjacency matrix used while building undirected graphs.
///
/// Links are always stored in both directions and degrees are tracked
/// incrementally so that saturation checks are constant time.
#[derive(Debug, Clone)]
pub(crate) struct SymmetricMatrix {
    n: usize,
    cells: Vec<bool>,
    degrees: Vec<usize>,
}

impl SymmetricMatrix {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
            degrees: vec![0; n],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.n
    }

    pub(crate) fn degree(&self, node: usize) -> usize {
        self.degrees[node]
    }

    pub(crate) fn is_linked(&self, a: usize, b: usize) -> bool {
        self.cells[a * self.n + b]
    }

    /// Adds the link `a <-> b`. Returns `false` if it already existed.
    pub(crate) fn link(&mut self, a: usize, b: usize) -> bool {
        debug_assert_ne!(a, b, "self-loops are never stored");
        if self.is_linked(a, b) {
            return false;
        }
        self.cells[a * self.n + b] = true;
        self.cells[b * self.n + a] = true;
        self.degrees[a] += 1;
        self.degrees[b] += 1;
        true
    }

    /// Removes the link `a <-> b`. Returns `false` if it did not exist.
    pub(crate) fn unlink(&mut self, a: usize, b: usize) -> bool {
        if !self.is_linked(a, b) {
            return false;
        }
        self.cells[a * self.n + b] = false;
        self.cells[b * self.n + a] = false;
        self.degrees[a] -= 1;
        self.degrees[b] -= 1;
        true
    }

    /// Neighbours of `node` in ascending order.
    pub(crate) fn neighbours(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.cells[node * self.n..(node + 1) * self.n];
        row.iter()
            .enumerate()
            .filter_map(|(idx, &linked)| linked.then_some(idx))
    }

    /// First neighbour of `candidate` that `current` could take over: not
    /// `current` itself and not already linked to `current`.
    ///
    /// Node 0 never serves as a partner. When it is the first eligible
    /// neighbour the search stops there and no partner is returned.
    pub(crate) fn split_partner(&self, candidate: usize, current: usize) -> Option<usize> {
        self.neighbours(candidate)
            .find(|&split| split != current && !self.is_linked(current, split))
            .filter(|&split| split > 0)
    }
}
