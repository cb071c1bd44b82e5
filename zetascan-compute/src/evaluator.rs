use zetascan_core::Real;

/// A real-valued function sampled along the critical line.
///
/// This is the lowest-level abstraction: pure computation, no loops. The
/// bisector and scanner drive it; the Riemann–Siegel evaluator is the
/// production implementation, closures serve tests.
pub trait Evaluator {
    fn evaluate(&self, t: Real) -> Real;
}

impl<F> Evaluator for F
where
    F: Fn(Real) -> Real,
{
    #[inline]
    fn evaluate(&self, t: Real) -> Real {
        self(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(Real);

    impl Evaluator for Constant {
        fn evaluate(&self, _t: Real) -> Real {
            self.0
        }
    }

    #[test]
    fn closures_are_evaluators() {
        let f = |t: Real| t * 2.0;
        assert_eq!(f.evaluate(3.0), 6.0);
    }

    #[test]
    fn custom_evaluator() {
        assert_eq!(Constant(1.5).evaluate(100.0), 1.5);
    }
}
