//! End-to-end tests for hostscope live under `tests/`.
