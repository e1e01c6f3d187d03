//! Unit tests for argument parsing and output shapes.
