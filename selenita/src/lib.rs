#![forbid(
	// Rationale: An object layer meant to host arbitrary dynamic data should
	// never be the source of a memory safety hole.
	unsafe_code
)]
#![warn(
	// Rationale: Panics should be avoided in favor of returning a Result, and
	// situations where panics are intentional should be well documented
	// (requiring an allow attribute to signal complete documentation).
	clippy::unwrap_used,
	clippy::panic,

	// Rationale: These should not be in production code.
	clippy::todo,
	clippy::unimplemented
)]
#![allow(
	// Rationale: Tabs are superior, don't at me.
	clippy::tabs_in_doc_comments
)]
//! Selenita is a prototype based object model for dynamic values, written
//! entirely in 100% safe Rust. Selenita is the portugese word for selenite, a
//! gypsum crystal named after the moon.
//!
//! There are no classes here. An [Object][object::Object] is a mapping of
//! public attributes bound to a shared, immutable
//! [Behavior][object::behavior::Behavior] record, and new objects are made by
//! *calling* any existing object, which clones it. Private fields, the ones
//! whose names start with `_`, never live in an object's public data: a clone
//! call routes them through the [field classifier][fields::classify] into a
//! freshly synthesized behavior record, method tables merging down the clone
//! chain with descendants shadowing ancestors.
//!
//! Examples
//! --------
//! Cloning is the whole construction protocol, so defining a kind of object
//! and instantiating it are the same operation.
//! ```rust
//! use selenita::{mapping, object::{value::IntoNillable, Object}};
//!
//! // Private fields in the argument mapping shape the behavior record.
//! let base = Object::default().arc();
//! let cons = base.call(&[mapping! {
//! 	["_type"] = "Cons",
//! 	["_init"] = mapping! {"car", "cdr"}
//! }.arc().nillable()]).unwrap();
//!
//! // Positional arguments are reassigned to the named fields in order.
//! let pair = cons.call(&[mapping! {"head", "tail"}.arc().nillable()]).unwrap();
//! assert_eq!(pair.to_string(), "Cons {car=head, cdr=tail}");
//! ```
//! The validator hook can be skipped wholesale with
//! [call_unchecked][object::Object::call_unchecked]; everything else about
//! the clone is identical.

pub mod check;
pub mod fields;
pub mod object;
pub mod render;

/// Macro implementation detail, do not use.
///
/// This does *NOT* follow the crates semantic version, using this attribute
/// *WILL* break your crate when *(not a matter of if)* we change this.
#[doc(hidden)]
pub use hashbrown as __priv_macro_rexport__hashbrown;
