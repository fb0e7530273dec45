//! Grid geometry and bookkeeping properties shared by every method.

mod common;

use common::Decay;
use fixedstep::{euler, rk2, rk4, solve, Error, Method};

#[test]
fn trajectories_match_grid_length() {
    for n in [2, 3, 7, 100] {
        let solutions = [
            euler(&Decay, 1.0, 0.0, 1.0, n).unwrap(),
            rk2(&Decay, 1.0, 0.0, 1.0, n).unwrap(),
            rk4(&Decay, 1.0, 0.0, 1.0, n).unwrap(),
        ];
        for sol in solutions {
            assert_eq!(sol.x.len(), n);
            assert_eq!(sol.t.len(), n);
            assert_eq!(sol.nstep, n - 1);
        }
    }
}

#[test]
fn grid_spacing_is_constant() {
    let sol = rk4(&Decay, 1.0, 0.25, 4.75, 46).unwrap();
    assert!((sol.h - (4.75 - 0.25) / 45.0).abs() < 1e-15);
    for w in sol.t.windows(2) {
        assert!((w[1] - w[0] - sol.h).abs() < 1e-12);
    }
    assert_eq!(sol.t[0], 0.25);
    assert_eq!(sol.t[45], 4.75);
}

#[test]
fn single_euler_step_is_exact() {
    // h = 1, so x[1] = 1 + 1*(-1) = 0 exactly.
    let sol = euler(&Decay, 1.0, 0.0, 1.0, 2).unwrap();
    assert_eq!(sol.x, vec![1.0, 0.0]);
    assert_eq!(sol.t, vec![0.0, 1.0]);
}

#[test]
fn degenerate_grids_are_rejected() {
    for n in [0, 1] {
        assert_eq!(euler(&Decay, 1.0, 0.0, 1.0, n), Err(Error::GridTooSmall(n)));
        assert_eq!(rk2(&Decay, 1.0, 0.0, 1.0, n), Err(Error::GridTooSmall(n)));
        assert_eq!(rk4(&Decay, 1.0, 0.0, 1.0, n), Err(Error::GridTooSmall(n)));
    }
}

#[test]
fn identical_calls_are_bit_identical() {
    let a = rk4(&Decay, 1.0, 0.0, 5.0, 64).unwrap();
    let b = rk4(&Decay, 1.0, 0.0, 5.0, 64).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_span_interval_holds_the_initial_state() {
    let sol = rk2(&Decay, 2.5, 1.0, 1.0, 5).unwrap();
    assert_eq!(sol.h, 0.0);
    assert!(sol.x.iter().all(|&x| x == 2.5));
    assert!(sol.t.iter().all(|&t| t == 1.0));
}

#[test]
fn evaluation_counts_follow_the_stage_count() {
    let n = 11;
    assert_eq!(euler(&Decay, 1.0, 0.0, 1.0, n).unwrap().nfev, n - 1);
    assert_eq!(rk2(&Decay, 1.0, 0.0, 1.0, n).unwrap().nfev, 2 * (n - 1));
    assert_eq!(rk4(&Decay, 1.0, 0.0, 1.0, n).unwrap().nfev, 4 * (n - 1));
}

#[test]
fn solve_dispatch_matches_direct_calls() {
    let direct = [
        euler(&Decay, 1.0, 0.0, 3.0, 40).unwrap(),
        rk2(&Decay, 1.0, 0.0, 3.0, 40).unwrap(),
        rk4(&Decay, 1.0, 0.0, 3.0, 40).unwrap(),
    ];
    let methods = [Method::Euler, Method::RK2, Method::RK4];
    for (expected, method) in direct.into_iter().zip(methods) {
        let dispatched = solve(&Decay, 1.0, 0.0, 3.0, 40, method).unwrap();
        assert_eq!(dispatched, expected);
    }
}

#[test]
fn into_parts_yields_the_sequence_pair() {
    let sol = euler(&Decay, 1.0, 0.0, 1.0, 4).unwrap();
    let (x_expected, t_expected) = (sol.x.clone(), sol.t.clone());
    let (x, t) = sol.into_parts();
    assert_eq!(x, x_expected);
    assert_eq!(t, t_expected);
}
