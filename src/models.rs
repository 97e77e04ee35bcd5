//! Public quadratic root models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the arithmetic lives. The `core` module is an implementation detail;
//! its public items are re-exported by the owning model module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that validate
//! their input and delegate to the unguarded core functions.

pub mod quadratic;
