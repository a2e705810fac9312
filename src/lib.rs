// Copyright (c) 2025 Siteconf Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

//! Configuration layer for a markdown blog generator.
//!
//! The generation engine lives elsewhere; this crate only defines the
//! settings record it consumes. The record is deserialized once from a
//! `Site.toml` file ([`crate::config`]), installed into a process-global
//! read-only environment ([`crate::environment`]), and never mutated
//! afterwards. The one piece of computation in the crate is the expansion
//! of the article permalink templates ([`crate::permalink`]), which gives
//! the URL settings a checkable meaning.

pub mod cli;
pub mod config;
pub mod environment;
pub mod permalink;
pub mod slug;
