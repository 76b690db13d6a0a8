//! # Workflows Module
//!
//! The user-facing entry points of the library.
//!
//! - **Generation** ([`generate`]) - Parameters to a fully placed and bonded [`Nanotube`](crate::core::models::tube::Nanotube)
//! - **Export** ([`export`]) - A tube to its `.gro`, `.itp` and `-posres.itp` files
//!
//! ```ignore
//! use martini_cnt::engine::progress::ProgressReporter;
//! use martini_cnt::workflows::{export, generate};
//!
//! let reporter = ProgressReporter::new();
//! let tube = generate::run(&config, &reporter);
//! let files = export::run(&tube, Path::new("."), &reporter)?;
//! ```

pub mod export;
pub mod generate;
