//! Benchmarks for `seqfind`. See the `benches` directory.
