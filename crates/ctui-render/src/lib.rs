#![forbid(unsafe_code)]

//! Render kernel: cells and character buffers.
//!
//! # Role in ctui
//! `ctui-render` is the surface every widget composes into. A [`buffer::Buffer`]
//! is a fixed-size grid of [`cell::Cell`] values, each carrying one glyph plus
//! foreground, background and attribute flags.
//!
//! # Primary responsibilities
//! - **Cell**: glyph + packed colors + attribute bitflags.
//! - **Buffer**: 2D grid with clear, fill, per-cell set, and region copy.
//!
//! # How it fits in the system
//! `ctui-style` resolves themes into colors stored in cells, and
//! `ctui-widgets` draws into buffers. Presenting a buffer to a real console
//! is the host application's job.

pub mod buffer;
pub mod cell;
