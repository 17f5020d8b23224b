//! Cross-module tests: randomized inversion round-trips and the projectile math the crate was
//! built to support.

use lumen_linalg::{assert_approx_eq, point, vector, Mat2d, Mat3d, Mat4d, Matrix, Point, Transform, Vector};

/// `m.invert() * m` must always land back on the identity for well-conditioned matrices.
#[test]
fn randomized_inversion_round_trips() {
    let mut rng = fastrand::Rng::with_seed(0x00c0ffee);
    let mut elem = move || rng.f64() * 6.0 - 3.0;

    let mut checked = 0;
    while checked < 50 {
        let mat: Mat4d = Matrix::from_fn(|_, _| elem());
        if mat.determinant().abs() < 0.5 {
            // Discard near-singular samples; the loop bound only counts invertible ones.
            continue;
        }
        checked += 1;

        let inv = mat.invert().unwrap();
        assert_approx_eq!(inv * mat, Mat4d::IDENTITY);
        assert_approx_eq!(mat * inv, Mat4d::IDENTITY);
        assert_approx_eq!(inv.determinant(), 1.0 / mat.determinant()).rel(1e-9);
    }
}

#[test]
fn randomized_inversion_round_trips_small() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut elem = move || rng.f64() * 6.0 - 3.0;

    let mut checked = 0;
    while checked < 50 {
        let mat: Mat2d = Matrix::from_fn(|_, _| elem());
        if mat.determinant().abs() < 0.5 {
            continue;
        }
        checked += 1;
        assert_approx_eq!(mat.invert().unwrap() * mat, Mat2d::IDENTITY);
    }

    let mut checked = 0;
    while checked < 50 {
        let mat: Mat3d = Matrix::from_fn(|_, _| elem());
        if mat.determinant().abs() < 0.5 {
            continue;
        }
        checked += 1;
        assert_approx_eq!(mat.invert().unwrap() * mat, Mat3d::IDENTITY);
    }
}

#[test]
fn transpose_of_inverse_is_inverse_of_transpose() {
    let mat = Transform::IDENTITY
        .rotate_z(0.3)
        .scale(2.0, 3.0, 4.0)
        .into_matrix();
    assert_approx_eq!(
        mat.invert().unwrap().transpose(),
        mat.transpose().invert().unwrap()
    );
}

#[test]
fn transform_pipeline_round_trip() {
    // A typical object-placement pipeline: orient, size, position.
    let placement = Transform::IDENTITY
        .translate(10.0, 5.0, 7.0)
        .scale(5.0, 5.0, 5.0)
        .rotate_x(std::f64::consts::TAU / 4.0);

    let p = point(1.0, 0.0, 1.0);
    let placed = placement * p;
    assert_approx_eq!(placed, point(15.0, 0.0, 7.0));
    assert_approx_eq!(placement.invert().unwrap() * placed, p);

    // Vectors are unaffected by the translation part.
    let v = vector(1.0, 0.0, 1.0);
    assert_approx_eq!(placement * v, vector(5.0, -5.0, 0.0));
}

/// One step of the projectile simulation from the trajectory demo.
fn tick(position: Point, velocity: Vector, gravity: Vector, wind: Vector) -> (Point, Vector) {
    (position + velocity, velocity + gravity + wind)
}

#[test]
fn projectile_comes_back_down() {
    let mut position = point(0.0, 1.0, 0.0);
    let mut velocity = vector(1.0, 1.0, 0.0).normalize().unwrap();
    let gravity = vector(0.0, -0.1, 0.0);
    let wind = vector(-0.01, 0.0, 0.0);

    let mut ticks = 0;
    while position.y > 0.0 {
        (position, velocity) = tick(position, velocity, gravity, wind);
        ticks += 1;
        assert!(ticks < 1_000, "projectile never landed");
    }

    // It flew forward while gravity pulled it back down.
    assert!(position.x > 0.0);
    assert!(velocity.y < 0.0);
}
