use self::super::object::{value::{Key, Value}, Object};
use hashbrown::HashMap;
use std::{ptr::eq, sync::Mutex};

/// Splits `source` into its public and private partitions, merging the
/// public partition over `target`. `rename` maps old positional indexes or
/// names to new field names; private keys are collected verbatim and never
/// renamed. Renamed entries land before direct entries, so an explicit named
/// entry in `source` wins over a renamed positional one, and both win over
/// whatever `target` already held. `source` is never mutated.
pub fn classify<'n>(
	mut target: HashMap<Key, Value<'n>>,
	source: &HashMap<Key, Value<'n>>,
	rename: &HashMap<Key, Box<str>>
) -> (HashMap<Key, Value<'n>>, HashMap<Box<str>, Value<'n>>) {
	for (key, value) in source {
		if key.is_private() {continue}
		if let Some(name) = rename.get(key) {
			target.insert(Key::Name(name.clone()), value.clone());
		}
	}

	let mut private = HashMap::new();
	for (key, value) in source {
		match key {
			Key::Name(name) if name.starts_with('_') => {
				private.insert(name.clone(), value.clone());
			},
			key if rename.contains_key(key) => (),
			key => {
				target.insert(key.clone(), value.clone());
			}
		}
	}

	(target, private)
}

/// Deep merge primitive. Returns a fresh object whose public data is `base`
/// overlaid with `overlay`; mapping values present on both sides merge
/// recursively with `overlay` winning per key, everything else overwrites.
/// The result carries `overlay`'s behavior handle. Neither input is mutated.
///
/// Panics
/// ------
/// Panics if any encountered lock is poisoned.
pub fn merge<'n>(base: &Object<'n>, overlay: &Object<'n>) -> Object<'n> {
	let mut data = base.data.lock().expect("poison error").clone();

	// Merging a mapping with itself would deadlock on the data lock.
	if !eq(base, overlay) {
		for (key, value) in overlay.data.lock().expect("poison error").iter() {
			let value = match (data.get(key), value) {
				(Some(Value::Object(under)), Value::Object(over)) =>
					Value::Object(merge(under, over).arc()),
				(_, value) => value.clone()
			};

			data.insert(key.clone(), value);
		}
	}

	Object {data: Mutex::new(data), behavior: overlay.behavior.clone()}
}

/// Length of the strictly contiguous integer run starting at key 1. A gap
/// ends the run; keys before 1 or after a gap are not array like.
pub fn contiguous_len(data: &HashMap<Key, Value>) -> i64 {
	(1..).take_while(|index| data.contains_key(&Key::Integer(*index)))
		.last().unwrap_or(0)
}
