pub mod behavior;
pub mod value;

use self::{
	behavior::{Behavior, InitSpec},
	value::{IntoNillable, Key, Nillable, Nil, NonNil, Value}
};
use crate::{check, fields};
use hashbrown::HashMap;
use std::{
	error::Error as STDError,
	fmt::{Display, Formatter, Result as FMTResult},
	ptr::eq,
	result::Result as STDResult,
	sync::{Arc, Mutex}
};

pub type Result<T> = STDResult<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
	/// The argument validator rejected a clone call.
	Argument(check::Error),
	/// A failure from a user supplied callable, passed through with its
	/// message unchanged, or a malformed behavior field.
	Runtime(String)
}

impl STDError for Error {}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> FMTResult {
		match self {
			Self::Argument(argument) => argument.fmt(f),
			Self::Runtime(message) => write!(f, "{}", message)
		}
	}
}

impl From<check::Error> for Error {
	fn from(argument: check::Error) -> Self {
		Self::Argument(argument)
	}
}

/// A dynamic object; a mapping of public attributes bound to a shared,
/// immutable [Behavior] record. Any object can serve as a prototype: calling
/// it clones it. Objects produced by the clone engine never carry private
/// keys in their public data; raw mappings built with [mapping][crate::mapping]
/// may, which is how callers hand behavior fields to a clone call.
pub struct Object<'n> {
	pub data: Mutex<HashMap<Key, Value<'n>>>,
	pub behavior: Arc<Behavior<'n>>
}

impl<'n> Object<'n> {
	/// Clones this object with the argument validator enabled. The new
	/// object starts as a shallow copy of this object's public data; nested
	/// structures are shared, not duplicated.
	///
	/// With a callable initializer spec, the callable receives the new
	/// object followed by `arguments` and has full latitude over the result.
	/// Otherwise at most one argument is accepted, a mapping whose public
	/// fields overlay the copied data (renamed through the sequence spec
	/// where one applies) and whose private fields synthesize the clone's
	/// behavior record. On failure no object is returned and this object is
	/// left untouched.
	///
	/// Panics
	/// ------
	/// Panics if any encountered lock is poisoned.
	pub fn call(&self, arguments: &[Nillable<'n>]) -> Result<Arc<Object<'n>>> {
		self.construct(true, arguments)
	}

	/// Like [call][Self::call], with the argument validator hook skipped
	/// entirely. Non mapping arguments are ignored rather than reported.
	///
	/// Panics
	/// ------
	/// Panics if any encountered lock is poisoned.
	pub fn call_unchecked(&self, arguments: &[Nillable<'n>])
			-> Result<Arc<Object<'n>>> {
		self.construct(false, arguments)
	}

	fn construct(&self, checked: bool, arguments: &[Nillable<'n>])
			-> Result<Arc<Object<'n>>> {
		match &self.behavior.init {
			InitSpec::Initializer(initializer) => {
				let initializer = *initializer;
				let new = self.clone().arc();

				let mut passed = Vec::with_capacity(arguments.len() + 1);
				passed.push(NonNil(Value::Object(new)));
				passed.extend(arguments.iter().cloned());

				match initializer(&passed).map_err(Error::Runtime)? {
					NonNil(Value::Object(object)) => Ok(object),
					other => Err(Error::Runtime(format!(
						"initializer for '{}' must return an object, got {}",
						self.behavior.name, other.type_name()
					)))
				}
			},
			init => {
				if checked {check::arguments(&self.behavior.name, arguments)?}

				let data = self.data.lock().expect("poison error").clone();
				let (data, private) = match arguments.first() {
					Some(NonNil(Value::Object(source))) => {
						let source = source.data.lock().expect("poison error");
						let rename = match init {
							InitSpec::Sequence(names) => {
								let run = fields::contiguous_len(&source);
								names.iter().take(run as usize).enumerate()
									.map(|(index, name)|
										(Key::Integer(index as i64 + 1), name.clone()))
									.collect()
							},
							_ => HashMap::new()
						};

						fields::classify(data, &source, &rename)
					},
					_ => (data, HashMap::new())
				};

				let behavior = if private.is_empty() {self.behavior.clone()}
					else {self.behavior.merged(private)?.arc()};
				Ok(Object {data: Mutex::new(data), behavior}.arc())
			}
		}
	}

	/// Reads one public attribute. Absent keys read as nil.
	///
	/// Panics
	/// ------
	/// Panics if any encountered lock is poisoned.
	pub fn index(&self, key: &Key) -> Nillable<'n> {
		self.data.lock().expect("poison error").get(key).cloned().nillable()
	}

	/// Writes one public attribute; writing nil removes the key. Private
	/// keys are refused, they belong to the behavior record and only enter
	/// it through a clone call.
	///
	/// Panics
	/// ------
	/// Panics if any encountered lock is poisoned.
	pub fn set_index(&self, key: Key, value: Nillable<'n>) -> Result<()> {
		if key.is_private() {
			return Err(Error::Runtime(
				format!("attempt to set private field '{}'", key)
			))
		}

		let mut data = self.data.lock().expect("poison error");
		match value {
			NonNil(value) => {data.insert(key, value);},
			Nil => {data.remove(&key);}
		}

		Ok(())
	}

	/// Looks a name up in the effective method set. Records merge at clone
	/// time, so the union-of-ancestors rule with descendant shadowing holds
	/// here by construction.
	pub fn method(&self, name: &str) -> Nillable<'n> {
		self.behavior.data.get(name).cloned().nillable()
	}

	/// Enumerates the public keys in their canonical order: integers
	/// ascending, then names byte wise.
	///
	/// Panics
	/// ------
	/// Panics if any encountered lock is poisoned.
	pub fn ordered_keys(&self) -> Vec<Key> {
		let data = self.data.lock().expect("poison error");
		let mut keys = data.keys().cloned().collect::<Vec<_>>();
		keys.sort_unstable();
		keys
	}

	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}
}

/// Duplicating an object is the shallow copy the clone engine starts from: a
/// fresh public data mapping sharing every nested structure by reference,
/// bound to the same behavior record.
///
/// Panics
/// ------
/// Panics if the data lock is poisoned.
impl Clone for Object<'_> {
	fn clone(&self) -> Self {
		Self {
			data: Mutex::new(self.data.lock().expect("poison error").clone()),
			behavior: self.behavior.clone()
		}
	}
}

impl Default for Object<'_> {
	fn default() -> Self {
		Self {
			data: Mutex::new(HashMap::new()),
			behavior: Arc::new(Behavior::default())
		}
	}
}

impl<'n> PartialEq for Object<'n> {
	fn eq(&self, other: &Object<'n>) -> bool {
		eq(self, other)
	}
}
