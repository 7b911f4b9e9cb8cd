use approx::assert_relative_eq;

use crate::brent::{RootFindError, Tolerance, brent};

#[test]
fn finds_square_root_of_two() {
    let root = brent(|x| x * x - 2.0, 0.0, 2.0, &Tolerance::default()).unwrap();
    assert_relative_eq!(root.root, 2f64.sqrt(), epsilon = 1e-11);
    assert!(root.residual.abs() < 1e-10);
    assert!(root.iterations > 0 && root.iterations < 20, "{} iterations", root.iterations);
    assert_eq!(root.function_calls, root.iterations + 1);
}

#[test]
fn bracket_orientation_does_not_matter() {
    let rising = brent(|x| x.powi(3) - x - 1.0, 1.0, 2.0, &Tolerance::default()).unwrap();
    let falling = brent(|x| 1.0 + x - x.powi(3), 1.0, 2.0, &Tolerance::default()).unwrap();
    assert_relative_eq!(rising.root, 1.324717957244746, epsilon = 1e-11);
    assert_relative_eq!(falling.root, rising.root, epsilon = 1e-11);
}

#[test]
fn root_on_the_bracket_edge_returns_immediately() {
    let root = brent(|x| x - 1.0, 1.0, 3.0, &Tolerance::default()).unwrap();
    assert_eq!(root.root, 1.0);
    assert_eq!(root.iterations, 0);
    assert_eq!(root.function_calls, 2);

    let root = brent(|x| x - 3.0, 1.0, 3.0, &Tolerance::default()).unwrap();
    assert_eq!(root.root, 3.0);
}

#[test]
fn step_function_converges_to_the_jump() {
    let root = brent(|x| if x < 1.0 { -1.0 } else { 1.0 }, 0.0, 5.0, &Tolerance::default()).unwrap();
    assert!((root.root - 1.0).abs() < 1e-11, "root {}", root.root);
}

#[test]
fn rapidly_falling_function_over_wide_bracket() {
    // r⁻² over seven decades, like a wind pressure profile
    let root = brent(|r| 1.0 / (r * r) - 4.0, 1e-4, 1e3, &Tolerance::default()).unwrap();
    assert_relative_eq!(root.root, 0.5, epsilon = 1e-11);
}

#[test]
fn same_sign_at_both_ends_is_reported() {
    let err = brent(|x| x * x + 1.0, -1.0, 2.0, &Tolerance::default()).unwrap_err();
    match err {
        RootFindError::NoSignChange { lower, upper, f_lower, f_upper } => {
            assert_eq!((lower, upper), (-1.0, 2.0));
            assert_eq!((f_lower, f_upper), (2.0, 5.0));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn nan_at_an_end_is_not_a_sign_change() {
    let err = brent(|x| if x > 1.0 { f64::NAN } else { -1.0 }, 0.0, 2.0, &Tolerance::default());
    assert!(matches!(err, Err(RootFindError::NoSignChange { .. })));
}

#[test]
fn iteration_budget_is_enforced() {
    let tight = Tolerance {
        max_iterations: 2,
        ..Tolerance::default()
    };
    let err = brent(|x| x * x - 2.0, 0.0, 2.0, &tight).unwrap_err();
    match err {
        RootFindError::MaxIterations { iterations, estimate, .. } => {
            assert_eq!(iterations, 2);
            assert!(estimate > 0.0 && estimate < 2.0);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn looser_tolerance_takes_fewer_steps() {
    let loose = Tolerance {
        x_tolerance: 1e-3,
        ..Tolerance::default()
    };
    let coarse = brent(|x| x.cos() - x, 0.0, 1.0, &loose).unwrap();
    let fine = brent(|x| x.cos() - x, 0.0, 1.0, &Tolerance::default()).unwrap();
    assert!(coarse.iterations <= fine.iterations);
    assert!((coarse.root - 0.7390851332151607).abs() < 1e-3);
    assert_relative_eq!(fine.root, 0.7390851332151607, epsilon = 1e-11);
}
