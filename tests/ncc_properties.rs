//! Algebraic properties of the NCC score on random grids.

use nccmatch::{score, NccMatchError, OwnedImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOL: f64 = 1e-9;
const TRIALS: usize = 64;

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> OwnedImage<i32> {
    loop {
        let data: Vec<i32> = (0..width * height)
            .map(|_| rng.random_range(0..256))
            .collect();
        // Uniform grids are degenerate; draw again.
        if data.iter().any(|&v| v != data[0]) {
            return OwnedImage::new(data, width, height).unwrap();
        }
    }
}

fn map_grid(grid: &OwnedImage<i32>, f: impl Fn(i32) -> i32) -> OwnedImage<i32> {
    let data = grid.data().iter().copied().map(f).collect();
    OwnedImage::new(data, grid.width(), grid.height()).unwrap()
}

fn shape(rng: &mut StdRng) -> (usize, usize) {
    (rng.random_range(1..8), rng.random_range(1..8))
}

fn non_trivial_shape(rng: &mut StdRng) -> (usize, usize) {
    loop {
        let (w, h) = shape(rng);
        if w * h >= 2 {
            return (w, h);
        }
    }
}

#[test]
fn self_match_scores_one() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let (w, h) = non_trivial_shape(&mut rng);
        let t = random_grid(&mut rng, w, h);
        let s = score(t.view(), t.view()).unwrap();
        assert!((s - 1.0).abs() < TOL, "self score {s}");
    }
}

#[test]
fn score_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let (w, h) = non_trivial_shape(&mut rng);
        let a = random_grid(&mut rng, w, h);
        let b = random_grid(&mut rng, w, h);
        let ab = score(a.view(), b.view()).unwrap();
        let ba = score(b.view(), a.view()).unwrap();
        assert!((ab - ba).abs() < TOL);
    }
}

#[test]
fn score_is_bounded() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let (w, h) = non_trivial_shape(&mut rng);
        let a = random_grid(&mut rng, w, h);
        let b = random_grid(&mut rng, w, h);
        let s = score(a.view(), b.view()).unwrap();
        assert!((-1.0 - TOL..=1.0 + TOL).contains(&s), "score {s}");
    }
}

#[test]
fn adding_a_constant_leaves_score_unchanged() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..TRIALS {
        let (w, h) = non_trivial_shape(&mut rng);
        let patch = random_grid(&mut rng, w, h);
        let tpl = random_grid(&mut rng, w, h);
        let c = rng.random_range(-500..500);
        let base = score(patch.view(), tpl.view()).unwrap();
        let shifted_patch = score(map_grid(&patch, |v| v + c).view(), tpl.view()).unwrap();
        let shifted_tpl = score(patch.view(), map_grid(&tpl, |v| v + c).view()).unwrap();
        assert!((base - shifted_patch).abs() < TOL);
        assert!((base - shifted_tpl).abs() < TOL);
    }
}

#[test]
fn scaling_sign_controls_score_sign() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..TRIALS {
        let (w, h) = non_trivial_shape(&mut rng);
        let patch = random_grid(&mut rng, w, h);
        let tpl = random_grid(&mut rng, w, h);
        let k = rng.random_range(1..10);
        let base = score(patch.view(), tpl.view()).unwrap();
        let pos = score(map_grid(&patch, |v| v * k).view(), tpl.view()).unwrap();
        let neg = score(map_grid(&patch, |v| -v * k).view(), tpl.view()).unwrap();
        assert!((base - pos).abs() < TOL);
        assert!((base + neg).abs() < TOL);
    }
}

#[test]
fn constant_template_is_degenerate_against_any_patch() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..TRIALS {
        let (w, h) = shape(&mut rng);
        let tpl = OwnedImage::new(vec![5i32; w * h], w, h).unwrap();
        let data: Vec<i32> = (0..w * h).map(|_| rng.random_range(0..256)).collect();
        let patch = OwnedImage::new(data, w, h).unwrap();
        let err = score(patch.view(), tpl.view()).err().unwrap();
        assert_eq!(
            err,
            NccMatchError::DegenerateInput {
                which: "template",
                width: w,
                height: h,
            }
        );
    }
}

#[test]
fn single_pixel_grids_are_degenerate() {
    let a = OwnedImage::new(vec![3u8], 1, 1).unwrap();
    let b = OwnedImage::new(vec![200u8], 1, 1).unwrap();
    assert!(matches!(
        score(a.view(), b.view()),
        Err(NccMatchError::DegenerateInput { .. })
    ));
}
