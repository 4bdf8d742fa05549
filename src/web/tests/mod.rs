//! Unit tests for the web surface.
