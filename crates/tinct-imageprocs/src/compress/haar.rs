/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Two dimensional Haar wavelet transform on square, power of two sized matrices
//!
//! Matrices are `n*n` row-major slices.
//!
//! A single step pairs consecutive elements `(x0, x1), (x2, x3)...` of a sequence
//! and writes every average `(x0+x1)/√2` followed by every difference `(x0-x1)/√2`.
//!
//! The forward transform runs a step on the first `c` entries of each of the first `c`
//! rows, then of each of the first `c` columns, for `c = n, n/2, ..., 2`.
//! The inverse undoes this from `c = 2` up to `n`, columns before rows.
use std::f64::consts::SQRT_2;

/// One forward Haar step over the whole of `seq`, `scratch` must be at least as long
fn haar_step(seq: &mut [f64], scratch: &mut [f64]) {
    let half = seq.len() / 2;
    let (averages, differences) = scratch[..seq.len()].split_at_mut(half);

    for ((pair, avg), diff) in seq
        .chunks_exact(2)
        .zip(averages.iter_mut())
        .zip(differences.iter_mut())
    {
        *avg = (pair[0] + pair[1]) / SQRT_2;
        *diff = (pair[0] - pair[1]) / SQRT_2;
    }
    seq.copy_from_slice(&scratch[..seq.len()]);
}

/// Inverse of [`haar_step`]
fn inverse_haar_step(seq: &mut [f64], scratch: &mut [f64]) {
    let half = seq.len() / 2;
    let (averages, differences) = seq.split_at(half);

    for ((pair, avg), diff) in scratch[..2 * half]
        .chunks_exact_mut(2)
        .zip(averages)
        .zip(differences)
    {
        pair[0] = (avg + diff) / SQRT_2;
        pair[1] = (avg - diff) / SQRT_2;
    }
    seq.copy_from_slice(&scratch[..seq.len()]);
}

/// Run `step` on the first `c` entries of each of the first `c` rows
fn rows_step(
    matrix: &mut [f64], n: usize, c: usize, scratch: &mut [f64], step: fn(&mut [f64], &mut [f64])
) {
    for row in matrix.chunks_exact_mut(n).take(c) {
        step(&mut row[..c], scratch);
    }
}

/// Run `step` on the first `c` entries of each of the first `c` columns
fn columns_step(
    matrix: &mut [f64], n: usize, c: usize, scratch: &mut [f64], column: &mut [f64],
    step: fn(&mut [f64], &mut [f64])
) {
    for col in 0..c {
        for (row, value) in column[..c].iter_mut().enumerate() {
            *value = matrix[row * n + col];
        }
        step(&mut column[..c], scratch);

        for (row, value) in column[..c].iter().enumerate() {
            matrix[row * n + col] = *value;
        }
    }
}

/// Forward 2D Haar transform of an `n*n` matrix in place
///
/// # Panics
/// If `matrix` isn't `n*n` long, or `n` isn't a power of two
pub fn haar_forward_2d(matrix: &mut [f64], n: usize) {
    assert_eq!(matrix.len(), n * n, "Matrix is not n*n");
    assert!(n.is_power_of_two(), "Matrix side should be a power of two");

    let mut scratch = vec![0.0; n];
    let mut column = vec![0.0; n];

    let mut c = n;

    while c > 1 {
        rows_step(matrix, n, c, &mut scratch, haar_step);
        columns_step(matrix, n, c, &mut scratch, &mut column, haar_step);
        c /= 2;
    }
}

/// Inverse 2D Haar transform of an `n*n` matrix in place
///
/// # Panics
/// If `matrix` isn't `n*n` long, or `n` isn't a power of two
pub fn haar_inverse_2d(matrix: &mut [f64], n: usize) {
    assert_eq!(matrix.len(), n * n, "Matrix is not n*n");
    assert!(n.is_power_of_two(), "Matrix side should be a power of two");

    let mut scratch = vec![0.0; n];
    let mut column = vec![0.0; n];

    let mut c = 2;

    while c <= n {
        columns_step(matrix, n, c, &mut scratch, &mut column, inverse_haar_step);
        rows_step(matrix, n, c, &mut scratch, inverse_haar_step);
        c *= 2;
    }
}
