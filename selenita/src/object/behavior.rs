use self::super::{
	value::{Key, NativeFunction, Value},
	Error, Result
};
use crate::fields;
use hashbrown::HashMap;
use std::{
	fmt::{Debug, Formatter, Result as FMTResult},
	sync::Arc
};

/// The shared record of type name, initializer spec and method table that
/// governs how an object clones. A record may be referenced by arbitrarily
/// many objects at once and is never mutated after creation; every change
/// goes through [merged][Self::merged], which synthesizes a new record.
#[derive(Clone, Debug)]
pub struct Behavior<'n> {
	/// Display name for the object's kind, `_type` on the wire.
	pub name: Box<str>,
	/// How clone arguments construct the new object, `_init` on the wire.
	pub init: InitSpec<'n>,
	/// Every other private field, stored under its verbatim key. Callable
	/// values are the method table; mapping values deep merge down clone
	/// chains.
	pub data: HashMap<Box<str>, Value<'n>>
}

#[derive(Clone)]
pub enum InitSpec<'n> {
	/// Positional clone arguments are reassigned to these field names in
	/// order.
	Sequence(Box<[Box<str>]>),
	/// The callable takes over construction entirely. It receives the new
	/// object followed by the call arguments and must return the finished
	/// object.
	Initializer(NativeFunction<'n>),
	None
}

impl<'n> Behavior<'n> {
	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}

	/// Synthesizes the record for a clone that introduced private fields.
	/// `_type` replaces the name, `_init` replaces the initializer spec, and
	/// every other field overlays the record data, deep merging mapping
	/// values present on both sides. `self` is left untouched.
	///
	/// Panics
	/// ------
	/// Panics if an encountered lock is poisoned.
	pub fn merged(&self, incoming: HashMap<Box<str>, Value<'n>>)
			-> Result<Behavior<'n>> {
		let Behavior {name, init, data} = self;
		let (mut name, mut init, mut data) =
			(name.clone(), init.clone(), data.clone());

		for (field, value) in incoming {
			match &*field {
				"_type" => match value {
					Value::String(string) => name = string,
					other => return Err(Error::Runtime(format!(
						"bad field '_type' (string expected, got {})",
						other.type_name()
					)))
				},
				"_init" => init = InitSpec::of(value)?,
				_ => {
					let value = match (data.get(&field), value) {
						(Some(Value::Object(under)), Value::Object(over)) =>
							Value::Object(fields::merge(under, &over).arc()),
						(_, value) => value
					};

					data.insert(field, value);
				}
			}
		}

		Ok(Behavior {name, init, data})
	}
}

impl<'n> InitSpec<'n> {
	/// Interprets an incoming `_init` field.
	///
	/// Panics
	/// ------
	/// Panics if an encountered lock is poisoned.
	fn of(value: Value<'n>) -> Result<InitSpec<'n>> {
		match value {
			Value::Function(function) => Ok(Self::Initializer(function)),
			Value::Object(sequence) => {
				let data = sequence.data.lock().expect("poison error");
				let run = fields::contiguous_len(&data);

				(1..=run)
					.filter_map(|index| data.get(&Key::Integer(index)))
					.map(|name| match name {
						Value::String(name) => Ok(name.clone()),
						other => Err(Error::Runtime(format!(
							"bad field '_init' (field name expected, got {})",
							other.type_name()
						)))
					})
					.collect::<Result<Box<[Box<str>]>>>()
					.map(Self::Sequence)
			},
			other => Err(Error::Runtime(format!(
				"bad field '_init' (sequence or function expected, got {})",
				other.type_name()
			)))
		}
	}
}

impl Default for Behavior<'_> {
	fn default() -> Self {
		Self {name: "Object".into(), init: InitSpec::None, data: HashMap::new()}
	}
}

impl Debug for InitSpec<'_> {
	fn fmt(&self, f: &mut Formatter) -> FMTResult {
		match self {
			Self::Sequence(names) => f.debug_tuple("Sequence").field(names).finish(),
			Self::Initializer(function) =>
				write!(f, "Initializer(function: {:p})", function),
			Self::None => write!(f, "None")
		}
	}
}
