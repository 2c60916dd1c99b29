pub mod test_dot;
