use self::super::object::value::{Nillable, NonNil, Value};
use std::{
	error::Error as STDError,
	fmt::{Display, Formatter, Result as FMTResult},
	result::Result as STDResult
};

pub type Result<T> = STDResult<T, Error>;

#[derive(Clone, Debug)]
pub enum Error {
	/// A construction argument had the wrong type.
	Type {
		name: Box<str>,
		position: usize,
		expected: &'static str,
		actual: Box<str>
	},
	/// Too many construction arguments were supplied.
	Count {
		name: Box<str>,
		count: usize
	}
}

impl STDError for Error {}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> FMTResult {
		match self {
			Self::Type {name, position, expected, actual} => write!(f,
				"bad argument #{} to '{}' ({} expected, got {})",
				position, name, expected, actual),
			Self::Count {name, count} => write!(f,
				"wrong number of arguments to '{}' (at most 1 expected, got {})",
				name, count)
		}
	}
}

/// The validator hook run at the start of a checked clone of a prototype
/// without a callable initializer: at most one construction argument, and if
/// present it must be a mapping. Prototypes with callable initializers skip
/// this entirely, as do unchecked clone calls.
pub fn arguments<'n>(name: &str, arguments: &[Nillable<'n>]) -> Result<()> {
	if arguments.len() > 1 {
		return Err(Error::Count {name: name.into(), count: arguments.len()})
	}

	match arguments.first() {
		None | Some(NonNil(Value::Object(_))) => Ok(()),
		Some(argument) => Err(Error::Type {
			name: name.into(),
			position: 1,
			expected: "object",
			actual: argument.type_name().into()
		})
	}
}
