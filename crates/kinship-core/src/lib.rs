//! Kinship Core Types and Definitions
//!
//! This crate provides the plain value types shared by every stage of the
//! Kinship family-tree geometry pipeline:
//!
//! - **Geometry**: Points, sizes and boxes ([`geometry`] module)
//! - **Family**: Person nodes and the connectors between them ([`family`] module)
//! - **Viewport**: Culling rectangles and the visible area ([`viewport`] module)

pub mod family;
pub mod geometry;
pub mod viewport;
