//! Route tree construction
//!
//! Two passes over an owned forest: [`builder`] inserts page files by walking
//! their segments, [`finalize`] normalizes names, paths and props and runs the
//! `extend_route` hook.

pub mod builder;
pub mod finalize;

pub use builder::RouteTreeBuilder;
pub use finalize::finalize_routes;
