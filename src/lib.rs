//!
//! transflow solves the multi-echelon [transportation problem](https://en.wikipedia.org/wiki/Transportation_theory_(mathematics))
//! (supply -> transshipment -> demand) as a minimum cost flow linear program.
//!
pub mod transport;
