//! Property tests driving the public API with quickcheck.

mod ordered;
