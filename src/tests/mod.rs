pub mod test_visualization;
