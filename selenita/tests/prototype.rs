use selenita::{
	mapping,
	object::{
		value::{IntoNillable, Nillable, Nillable::NonNil, Value},
		Object
	}
};
use std::sync::Arc;

#[test]
fn cons_cells_build_and_render() {
	let base = Object::default().arc();
	let cons = base.call(&[mapping! {
		["_type"] = "Cons",
		["_init"] = mapping! {"car", "cdr"}
	}.arc().nillable()]).unwrap();

	let tail = cons.call(&[mapping! {"x"}.arc().nillable()]).unwrap();
	assert_eq!(tail.to_string(), "Cons {car=x}");

	let list = cons
		.call(&[mapping! {"head", tail.clone()}.arc().nillable()]).unwrap();
	assert_eq!(list.to_string(), "Cons {car=head, cdr=Cons {car=x}}");

	match list.index(&"cdr".into()) {
		NonNil(Value::Object(object)) => assert!(Arc::ptr_eq(&object, &tail)),
		other => panic!("expected the shared tail, got {:?}", other)
	}
}

#[test]
fn prototypes_carry_defaults_down_the_chain() {
	let base = Object::default().arc();
	let account = base.call(&[mapping! {
		["_type"] = "Account",
		["_init"] = mapping! {"owner"},
		balance = 0
	}.arc().nillable()]).unwrap();

	let saver = account.call(&[mapping! {
		["_type"] = "Savings",
		rate = 3
	}.arc().nillable()]).unwrap();
	let opened = saver.call(&[mapping! {"ada"}.arc().nillable()]).unwrap();

	assert_eq!(opened.index(&"owner".into()), "ada".nillable());
	assert_eq!(opened.index(&"balance".into()), 0i64.nillable());
	assert_eq!(opened.index(&"rate".into()), 3i64.nillable());
	assert_eq!(&*opened.behavior.name, "Savings");
	assert_eq!(opened.to_string(), "Savings {balance=0, owner=ada, rate=3}");
}

#[test]
fn methods_inherit_and_dispatch() {
	let describe = |arguments: &[Nillable]| -> Result<Nillable, String> {
		match arguments.first() {
			Some(NonNil(Value::Object(object))) =>
				Ok(format!("a {}", object.behavior.name).nillable()),
			_ => Err("receiver expected".to_owned())
		}
	};

	let base = Object::default().arc();
	let animal = base.call(&[mapping! {
		["_type"] = "Animal",
		["_describe"] = Value::Function(&describe)
	}.arc().nillable()]).unwrap();
	let cat = animal
		.call(&[mapping! {["_type"] = "Cat"}.arc().nillable()]).unwrap();

	let method = match cat.method("_describe") {
		NonNil(Value::Function(function)) => function,
		other => panic!("expected inherited method, got {:?}", other)
	};
	assert_eq!(method(&[cat.clone().nillable()]).unwrap(), "a Cat".nillable());
}

#[test]
fn initializer_prototypes_validate_their_own_arguments() {
	fn range<'n>(arguments: &[Nillable<'n>]) -> Result<Nillable<'n>, String> {
		let object = match arguments.first() {
			Some(NonNil(Value::Object(object))) => object.clone(),
			_ => return Err("construction convention failure".to_owned())
		};

		let (low, high) = match (arguments.get(1), arguments.get(2)) {
			(Some(NonNil(Value::Integer(low))), Some(NonNil(Value::Integer(high))))
					if low <= high => (*low, *high),
			_ => return Err("expected a low and high bound in order".to_owned())
		};

		object.set_index("low".into(), low.nillable())
			.map_err(|error| error.to_string())?;
		object.set_index("high".into(), high.nillable())
			.map_err(|error| error.to_string())?;
		Ok(object.nillable())
	}

	let base = Object::default().arc();
	let bounds = base.call(&[mapping! {
		["_type"] = "Range",
		["_init"] = Value::Function(&range)
	}.arc().nillable()]).unwrap();

	let made = bounds.call(&[1i64.nillable(), 9i64.nillable()]).unwrap();
	assert_eq!(made.to_string(), "Range {high=9, low=1}");

	let error = bounds.call(&[9i64.nillable(), 1i64.nillable()]).unwrap_err();
	assert_eq!(error.to_string(), "expected a low and high bound in order");
}
