pub mod configmap;
pub mod generator;
pub mod spec;
