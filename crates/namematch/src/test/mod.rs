pub mod test_glob;
