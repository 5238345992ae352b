use itertools::Itertools;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a vertex
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge `(u, v)` with `u < v` independently with
/// probability `p`. Generated edges are normalized and never loops.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumVertices,
    p: GnpType,
}

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n < 2 => 0.0,
            GnpType::AvgDeg(d) => {
                let p = d / (self.n - 1) as f64;
                assert!(
                    is_valid_probability(p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumVerticesGen for Gnp {
    /// Updates `n`
    fn vertices(mut self, n: NumVertices) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn number_of_vertices(&self) -> NumVertices {
        self.n
    }

    /// Creates a streaming generator over random `G(n,p)` edges.
    /// ** Panics if neither a probability nor an average degree was set **
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.probability();
        (0..self.n)
            .tuple_combinations()
            .filter(move |_| rng.random_bool(p))
            .map(|(u, v)| Edge(Vertex::new(u), Vertex::new(v)))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for n in [0, 1, 2, 7] {
            assert!(Gnp::new().vertices(n).prob(0.0).generate(rng).is_empty());

            let complete = Gnp::new().vertices(n).prob(1.0).generate(rng);
            assert_eq!(complete.len() as NumVertices, n * n.saturating_sub(1) / 2);
            assert!(complete.iter().all(|e| e.is_normalized() && !e.is_loop()));
        }
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let n = 400;
        let edges = Gnp::new().vertices(n).avg_deg(6.0).generate(rng);

        let avg = 2.0 * edges.len() as f64 / n as f64;
        assert!((5.0..7.0).contains(&avg), "avg degree {avg}");
    }

    #[test]
    fn graphs_are_reproducible() {
        let first = NamedGraph::gnp(&mut Pcg64Mcg::seed_from_u64(3), 30, 0.2).unwrap();
        let second = NamedGraph::gnp(&mut Pcg64Mcg::seed_from_u64(3), 30, 0.2).unwrap();

        assert_eq!(first.number_of_vertices(), 30);
        assert_eq!(first.edges().collect_vec(), second.edges().collect_vec());
    }

    #[test]
    #[should_panic]
    fn rejects_invalid_probability() {
        let _ = Gnp::new().prob(1.5);
    }
}
