use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Uniform on (0, 1] so that ln() stays finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    fn normal<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for row in res.data.iter_mut() {
            for x in row.iter_mut() {
                *x = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    /// He initialization: samples from N(0, sqrt(2 / fan_in)).
    ///
    /// Used ahead of ReLU, which zeroes half of its inputs on average.
    /// Shape: (fan_in, fan_out), matching the row-vector layout `x · W`.
    pub fn he<R: Rng + ?Sized>(fan_in: usize, fan_out: usize, rng: &mut R) -> Matrix {
        let std_dev = (2.0 / fan_in as f64).sqrt();
        Matrix::normal(fan_in, fan_out, std_dev, rng)
    }

    /// Xavier (Glorot) initialization: samples from N(0, sqrt(1 / fan_in)).
    ///
    /// Used ahead of Sigmoid. Shape: (fan_in, fan_out).
    pub fn xavier<R: Rng + ?Sized>(fan_in: usize, fan_out: usize, rng: &mut R) -> Matrix {
        let std_dev = (1.0 / fan_in as f64).sqrt();
        Matrix::normal(fan_in, fan_out, std_dev, rng)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Combines two same-shape matrices element by element.
    pub fn zip_map<F>(&self, other: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols), "Matrices are of incorrect sizes");
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter())
                .map(|(row_a, row_b)| {
                    row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
                })
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        self.zip_map(other, |a, b| a * b)
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        }
    }

    /// A 1 × n matrix holding `row`.
    pub fn row(row: Vec<f64>) -> Matrix {
        Matrix::from_data(vec![row])
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = (0..self.cols)
                    .map(|k| self.data[i][k] * rhs.data[k][j])
                    .sum();
            }
        }

        res
    }
}
