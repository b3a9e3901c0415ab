// SPDX-License-Identifier: MIT

//!
//! The frontends (each wraps an [`Engine`](crate::Engine) and draws its
//! layouts)
//!

pub mod svg;
pub mod text;
