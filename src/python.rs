//! Python bindings, built with `--features python`.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::activation::Activation;
use crate::common_types::required;
use crate::error::LearnError;
use crate::knn::{KNearestNeighbours, KnnConfig};
use crate::linear::{LinearRegression, LogisticRegression, Perceptron, TrainingConfig};
use crate::math::{self, DistanceMetric};
use crate::model::Predictor;

impl From<LearnError> for PyErr {
    fn from(err: LearnError) -> PyErr {
        let message = err.to_string();
        match err {
            LearnError::NotFitted => PyRuntimeError::new_err(message),
            _ => PyValueError::new_err(message),
        }
    }
}

/// Python-friendly representation of DistanceMetric
#[pyclass(name = "DistanceMetric")]
#[derive(Clone)]
enum PyDistanceMetric {
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl From<PyDistanceMetric> for DistanceMetric {
    fn from(val: PyDistanceMetric) -> Self {
        match val {
            PyDistanceMetric::Euclidean => DistanceMetric::Euclidean,
            PyDistanceMetric::Manhattan => DistanceMetric::Manhattan,
            PyDistanceMetric::Chebyshev => DistanceMetric::Chebyshev,
        }
    }
}

impl From<DistanceMetric> for PyDistanceMetric {
    fn from(val: DistanceMetric) -> Self {
        match val {
            DistanceMetric::Euclidean => PyDistanceMetric::Euclidean,
            DistanceMetric::Manhattan => PyDistanceMetric::Manhattan,
            DistanceMetric::Chebyshev => PyDistanceMetric::Chebyshev,
        }
    }
}

#[pyclass(name = "Activation")]
#[derive(Clone)]
struct PyActivation {
    inner: Activation,
}

#[pymethods]
impl PyActivation {
    #[staticmethod]
    fn identity() -> Self {
        PyActivation { inner: Activation::Identity }
    }

    #[staticmethod]
    fn sigmoid() -> Self {
        PyActivation { inner: Activation::Sigmoid }
    }

    #[staticmethod]
    #[pyo3(signature = (threshold = Activation::DEFAULT_STEP_THRESHOLD))]
    fn heaviside_step(threshold: f64) -> Self {
        PyActivation {
            inner: Activation::heaviside_step_with(threshold),
        }
    }

    fn activate(&self, x: f64) -> f64 {
        self.inner.activate(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.inner.derivative(x)
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}

#[pyfunction]
fn dot(a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    Ok(math::dot(&a, &b)?)
}

#[pyfunction]
fn distance(metric: PyDistanceMetric, a: Vec<f64>, b: Vec<f64>) -> PyResult<f64> {
    Ok(math::distance(metric.into(), &a, &b)?)
}

#[pyclass(name = "Perceptron")]
struct PyPerceptron {
    model: Perceptron,
}

#[pymethods]
impl PyPerceptron {
    #[new]
    #[pyo3(signature = (epochs, learning_rate = 0.01, activation = None))]
    fn new(epochs: usize, learning_rate: f64, activation: Option<PyActivation>) -> Self {
        let mut model = Perceptron::from_config(TrainingConfig::new(epochs, learning_rate));
        if let Some(activation) = activation {
            model = model.with_activation(activation.inner);
        }
        PyPerceptron { model }
    }

    fn fit(
        &mut self,
        features: Option<Vec<Vec<f64>>>,
        labels: Option<Vec<i32>>,
    ) -> PyResult<()> {
        let features = required(features, "features")?;
        let labels = required(labels, "labels")?;
        Ok(self.model.fit(&features, &labels)?)
    }

    fn predict(&self, features: Vec<f64>) -> PyResult<i32> {
        Ok(self.model.predict(&features)?)
    }

    #[getter]
    fn weights(&self) -> Option<Vec<f64>> {
        self.model.weights().map(<[f64]>::to_vec)
    }

    #[getter]
    fn bias(&self) -> Option<f64> {
        self.model.bias()
    }
}

#[pyclass(name = "LogisticRegression")]
struct PyLogisticRegression {
    model: LogisticRegression,
}

#[pymethods]
impl PyLogisticRegression {
    #[new]
    #[pyo3(signature = (epochs, learning_rate = 0.01, activation = None, seed = None))]
    fn new(
        epochs: usize,
        learning_rate: f64,
        activation: Option<PyActivation>,
        seed: Option<u64>,
    ) -> Self {
        let mut model =
            LogisticRegression::from_config(TrainingConfig::new(epochs, learning_rate));
        if let Some(activation) = activation {
            model = model.with_activation(activation.inner);
        }
        if let Some(seed) = seed {
            model = model.with_seed(seed);
        }
        PyLogisticRegression { model }
    }

    fn fit(
        &mut self,
        features: Option<Vec<Vec<f64>>>,
        labels: Option<Vec<i32>>,
    ) -> PyResult<()> {
        let features = required(features, "features")?;
        let labels = required(labels, "labels")?;
        Ok(self.model.fit(&features, &labels)?)
    }

    /// Returns `(probability, class_id)`.
    fn predict(&self, features: Vec<f64>) -> PyResult<(f64, i32)> {
        Ok(self.model.predict(&features)?)
    }

    #[getter]
    fn weights(&self) -> Option<Vec<f64>> {
        self.model.weights().map(<[f64]>::to_vec)
    }

    #[getter]
    fn bias(&self) -> Option<f64> {
        self.model.bias()
    }
}

#[pyclass(name = "LinearRegression")]
struct PyLinearRegression {
    model: LinearRegression,
}

#[pymethods]
impl PyLinearRegression {
    #[new]
    #[pyo3(signature = (epochs, learning_rate = 0.01, activation = None))]
    fn new(epochs: usize, learning_rate: f64, activation: Option<PyActivation>) -> Self {
        let mut model =
            LinearRegression::from_config(TrainingConfig::new(epochs, learning_rate));
        if let Some(activation) = activation {
            model = model.with_activation(activation.inner);
        }
        PyLinearRegression { model }
    }

    fn fit(
        &mut self,
        features: Option<Vec<Vec<f64>>>,
        targets: Option<Vec<f64>>,
    ) -> PyResult<()> {
        let features = required(features, "features")?;
        let targets = required(targets, "targets")?;
        Ok(self.model.fit(&features, &targets)?)
    }

    fn predict(&self, features: Vec<f64>) -> PyResult<f64> {
        Ok(self.model.predict(&features)?)
    }

    #[getter]
    fn coefficients(&self) -> Option<Vec<f64>> {
        self.model.coefficients().map(<[f64]>::to_vec)
    }

    #[getter]
    fn intercept(&self) -> Option<f64> {
        self.model.intercept()
    }
}

/// Owns the training arrays on the Python side; the Rust classifier borrows
/// them for the duration of each call.
#[pyclass(name = "KNearestNeighbours")]
struct PyKNearestNeighbours {
    config: KnnConfig,
    training_set: Option<(Vec<Vec<f64>>, Vec<String>)>,
}

impl PyKNearestNeighbours {
    fn classifier<'a>(
        &self,
        features: &'a [Vec<f64>],
        labels: &'a [String],
    ) -> Result<KNearestNeighbours<'a, String>, LearnError> {
        let mut classifier = KNearestNeighbours::with_config(self.config);
        classifier.fit(features, labels)?;
        Ok(classifier)
    }
}

#[pymethods]
impl PyKNearestNeighbours {
    #[new]
    #[pyo3(signature = (k = 3, metric = PyDistanceMetric::Euclidean))]
    fn new(k: usize, metric: PyDistanceMetric) -> PyResult<Self> {
        if k == 0 {
            return Err(PyValueError::new_err("k must be greater than 0."));
        }
        Ok(PyKNearestNeighbours {
            config: KnnConfig {
                k,
                metric: metric.into(),
            },
            training_set: None,
        })
    }

    fn fit(
        &mut self,
        features: Option<Vec<Vec<f64>>>,
        labels: Option<Vec<String>>,
    ) -> PyResult<()> {
        let features = required(features, "features")?;
        let labels = required(labels, "labels")?;
        self.classifier(&features, &labels)?;
        self.training_set = Some((features, labels));
        Ok(())
    }

    fn predict(&self, features: Vec<f64>) -> PyResult<String> {
        let (train_features, train_labels) = self
            .training_set
            .as_ref()
            .ok_or(LearnError::NotFitted)?;
        Ok(self.classifier(train_features, train_labels)?.predict(&features)?)
    }

    #[getter]
    fn k(&self) -> usize {
        self.config.k
    }

    #[getter]
    fn metric(&self) -> PyDistanceMetric {
        self.config.metric.into()
    }
}

/// The `supervised_learning` Python module.
#[pymodule]
fn supervised_learning(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dot, m)?)?;
    m.add_function(wrap_pyfunction!(distance, m)?)?;
    m.add_class::<PyDistanceMetric>()?;
    m.add_class::<PyActivation>()?;
    m.add_class::<PyPerceptron>()?;
    m.add_class::<PyLogisticRegression>()?;
    m.add_class::<PyLinearRegression>()?;
    m.add_class::<PyKNearestNeighbours>()?;
    Ok(())
}
