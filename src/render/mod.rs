//! Module for anything related to rendering.
//!
//! This module contains the house mesh, its vertex format and the shaders that draw it.

pub mod house;
