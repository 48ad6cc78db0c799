use self::super::{fields::contiguous_len, object::{value::Key, Object}};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter, Result as FMTResult};

/// The canonical rendering: `Name {run; named}`. The strictly contiguous run
/// of integer keys starting at 1 comes first with bare values, then the
/// remaining keys sorted by their string form as `key=value` pairs, with
/// `"; "` between the sections when both are present. Object values render
/// recursively through this same contract; a cyclic graph therefore renders
/// its back edge as the in-use placeholder instead of terminating normally.
impl Display for Object<'_> {
	fn fmt(&self, f: &mut Formatter) -> FMTResult {
		write!(f, "{} {{", self.behavior.name)?;

		let data = match self.data.try_lock() {
			Ok(data) => data,
			Err(_) => return write!(f, "<object is being accessed>}}")
		};

		let run = contiguous_len(&data);
		let mut leading = (1..=run)
			.filter_map(|index| data.get(&Key::Integer(index)));
		write!(f, "{}", leading.join(", "))?;

		let mut trailing = data.iter()
			.filter(|(key, _)| match key {
				Key::Integer(index) => *index < 1 || *index > run,
				Key::Name(_) => true
			})
			.map(|(key, value)| (key.to_string(), value))
			.collect::<Vec<_>>();
		trailing.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

		if run != 0 && !trailing.is_empty() {write!(f, "; ")?}
		let body = trailing.iter()
			.map(|(key, value)| format!("{}={}", key, value))
			.join(", ");
		write!(f, "{}}}", body)
	}
}

impl Debug for Object<'_> {
	fn fmt(&self, f: &mut Formatter) -> FMTResult {
		Display::fmt(self, f)
	}
}
