pub mod strategy;

pub mod test_components;
pub mod test_constructor;
pub mod test_matrix;
