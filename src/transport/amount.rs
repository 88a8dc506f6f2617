//!
//! Amount and Cost definitions, and tolerance helpers for comparing them
//!
//! Flow values come back from a floating point LP solver, so every comparison
//! of amounts goes through these functions instead of `==`.
//!

/// Amount of material (capacity, requirement, or flow on an arc)
pub type Amount = f64;

/// Cost per unit flow, and total cost of a flow
pub type Cost = f64;

/// difference allowed to be regarded as a same value
pub const EPS: Amount = 0.000000001;

/// relative tolerance used when two total costs are compared
pub const COST_REL_EPS: Cost = 0.000001;

///
/// similary equal
///
pub fn sim_eq(a: Amount, b: Amount) -> bool {
    (a - b).abs() <= EPS
}

///
/// `a <= b` allowing the floating error
///
pub fn sim_le(a: Amount, b: Amount) -> bool {
    a <= b + EPS
}

///
/// true if the amount is strictly positive, i.e. larger than the noise level `EPS`
///
pub fn is_positive(a: Amount) -> bool {
    a > EPS
}

///
/// Compare two total costs with the tolerance relative to the magnitude of `reference`.
///
/// Costs grow with the amount of flow, so absolute `EPS` is too strict for them.
///
pub fn cost_sim_eq(value: Cost, reference: Cost) -> bool {
    (value - reference).abs() <= COST_REL_EPS * reference.abs().max(1.0)
}

///
/// Valid quantity (capacity, requirement, cost) is finite and non-negative
///
pub fn is_valid_quantity(a: Amount) -> bool {
    a.is_finite() && a >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_eq_ignores_noise() {
        assert!(sim_eq(1.0, 1.0 + 1e-12));
        assert!(!sim_eq(1.0, 1.001));
        assert!(sim_le(5.0 + 1e-11, 5.0));
        assert!(!sim_le(5.1, 5.0));
    }

    #[test]
    fn positivity() {
        assert!(is_positive(0.5));
        assert!(!is_positive(0.0));
        assert!(!is_positive(1e-10));
        assert!(!is_positive(-3.0));
    }

    #[test]
    fn cost_comparison_is_relative() {
        assert!(cost_sim_eq(538650.0001, 538650.0));
        assert!(!cost_sim_eq(538700.0, 538650.0));
        assert!(cost_sim_eq(0.0, 1e-9));
        assert!(!cost_sim_eq(0.0, 0.1));
    }

    #[test]
    fn quantities() {
        assert!(is_valid_quantity(0.0));
        assert!(is_valid_quantity(12.5));
        assert!(!is_valid_quantity(-1.0));
        assert!(!is_valid_quantity(f64::NAN));
        assert!(!is_valid_quantity(f64::INFINITY));
    }
}
