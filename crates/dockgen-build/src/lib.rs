//! Dockerfile rendering and output for dockgen.
//!
//! # Generate flow
//!
//! ```text
//! dockgen
//!   1. Answers    ── platform, version, labels, setup, ports, start command
//!   2. Render     ── DockerfileGenerator::render()
//!   3. Write      ── temp file next to the target, then rename over it
//! ```
//!
//! # Layout
//!
//! The rendered file is a single stage. The `FROM`/`WORKDIR`/`COPY` preamble
//! always comes first and ends with a blank line. Each `LABEL` is followed by
//! a blank line; a blank line always precedes the `RUN` lines, even when
//! there are none. `RUN` and `EXPOSE` lines are grouped without blank lines
//! between them. `EXPOSE` and `CMD` are only emitted when there is something
//! to expose or start, each after a blank line.

pub mod dockerfile;
pub mod output;

pub use dockerfile::DockerfileGenerator;
pub use output::{WriteError, write_dockerfile};
