//! Custom widgets

pub mod skeleton;

pub use skeleton::Skeleton;
