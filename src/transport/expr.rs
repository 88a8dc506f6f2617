//!
//! Linear expression over arc flow variables
//!
//! A variable is identified by the `EdgeIndex` of its arc. Terms are kept
//! ordered by variable and merged, so each variable appears at most once.
//!
use itertools::Itertools; // for join
use petgraph::graph::EdgeIndex;
use std::collections::BTreeMap;
use std::ops::{Add, Neg, Sub};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr(BTreeMap<EdgeIndex, f64>);

impl LinearExpr {
    pub fn new() -> LinearExpr {
        LinearExpr(BTreeMap::new())
    }
    ///
    /// `Σ x(e)` over the given arcs
    ///
    pub fn sum_of<I: IntoIterator<Item = EdgeIndex>>(edges: I) -> LinearExpr {
        let mut expr = LinearExpr::new();
        for e in edges {
            expr.add_term(e, 1.0);
        }
        expr
    }
    ///
    /// add `coeff * x(e)`, merging with an existing term of the same variable.
    /// a term whose coefficient cancels to zero is removed.
    ///
    pub fn add_term(&mut self, e: EdgeIndex, coeff: f64) {
        let c = self.0.entry(e).or_insert(0.0);
        *c += coeff;
        if *c == 0.0 {
            self.0.remove(&e);
        }
    }
    pub fn coefficient(&self, e: EdgeIndex) -> f64 {
        self.0.get(&e).copied().unwrap_or(0.0)
    }
    /// terms ordered by variable
    pub fn terms(&self) -> impl Iterator<Item = (EdgeIndex, f64)> + '_ {
        self.0.iter().map(|(&e, &c)| (e, c))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    ///
    /// value of the expression when each variable `x(e)` takes `value(e)`
    ///
    pub fn evaluate<F: Fn(EdgeIndex) -> f64>(&self, value: F) -> f64 {
        self.terms().map(|(e, c)| c * value(e)).sum()
    }
    ///
    /// human readable form, e.g. `x(a,b) + 2 x(b,c) - x(c,a)`
    ///
    pub fn format_with<F: Fn(EdgeIndex) -> String>(&self, name: F) -> String {
        if self.is_empty() {
            return "0".to_string();
        }
        self.terms()
            .enumerate()
            .map(|(i, (e, c))| {
                let sign = match (i, c < 0.0) {
                    (0, false) => "",
                    (0, true) => "-",
                    (_, false) => "+ ",
                    (_, true) => "- ",
                };
                let abs = c.abs();
                if abs == 1.0 {
                    format!("{}{}", sign, name(e))
                } else {
                    format!("{}{} {}", sign, abs, name(e))
                }
            })
            .join(" ")
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;
    fn add(mut self, rhs: LinearExpr) -> LinearExpr {
        for (e, c) in rhs.terms() {
            self.add_term(e, c);
        }
        self
    }
}

impl Neg for LinearExpr {
    type Output = LinearExpr;
    fn neg(self) -> LinearExpr {
        LinearExpr(self.0.into_iter().map(|(e, c)| (e, -c)).collect())
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;
    fn sub(self, rhs: LinearExpr) -> LinearExpr {
        self + (-rhs)
    }
}
