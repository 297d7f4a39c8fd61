#![no_std]

//! A pull-driven streaming parser for Intel HEX style records.
//!
//! Hexline decodes colon-prefixed hexadecimal records incrementally. Input is
//! accepted in whatever chunks are convenient to the application, with the
//! parser dictating how many characters each chunk must hold. Data and
//! end-of-file records are supported.
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! decode whole documents from slices and readers. Applications that manage
//! their own input can drive the parser directly as described in the [`sans`]
//! module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod sans;
