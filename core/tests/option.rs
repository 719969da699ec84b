use std::cell::{Cell, RefCell};
use std::panic::catch_unwind;

use nullsafe_core::fallback::Fallback;
use nullsafe_core::option::{EmptyValueError, Option};

#[derive(Clone, Debug, Eq, PartialEq)]
struct User {
  name: String,
  manager: std::option::Option<Box<User>>,
}

impl User {
  fn new(name: &str) -> Self { Self { name: name.to_owned(), manager: None } }
  fn with_manager(mut self, manager: User) -> Self {
    self.manager = Some(Box::new(manager));
    self
  }
  fn manager(&self) -> Option<&User> { Option::of_nullable(self.manager.as_deref()) }
}

#[test]
fn chains_through_nullable_fields() {
  let alice = User::new("alice").with_manager(User::new("bob").with_manager(User::new("carol")));

  let grand_manager = Option::of(&alice)
    .flat_map(User::manager)
    .flat_map(User::manager)
    .map(|u| u.name.as_str());
  assert_eq!(grand_manager.get(), "carol");

  let missing = Option::of(&alice)
    .flat_map(User::manager)
    .flat_map(User::manager)
    .flat_map(User::manager)
    .map(|u| u.name.as_str());
  assert!(missing.is_empty());
  assert_eq!(missing.get_or_else("nobody"), "nobody");
  assert_eq!(missing.or_null(), None);
}

#[test]
fn absent_chain_never_calls_any_function() {
  let calls = Cell::new(0);
  let count = || calls.set(calls.get() + 1);

  let result = Option::<String>::empty()
    .map(|s| { count(); s.len() })
    .flat_map(|n| { count(); Option::of(n * 2) })
    .or_else(Fallback::supplier(|| { count(); Option::empty() }));
  result.for_each(|_| count());

  // Only the `or_else` supplier runs, since it is the one operation that acts on absence.
  assert_eq!(calls.get(), 1);
  assert!(result.is_empty());
}

#[test]
fn present_chain_never_calls_suppliers() {
  let supplier_calls = Cell::new(0);
  let value = Option::of(20)
    .or_else(Fallback::supplier(|| { supplier_calls.set(supplier_calls.get() + 1); Option::of(0) }))
    .map(|n| n + 1)
    .get_or_else(Fallback::supplier(|| { supplier_calls.set(supplier_calls.get() + 1); 0 }));
  assert_eq!(value, 21);
  assert_eq!(supplier_calls.get(), 0);
}

#[test]
fn get_failure_is_empty_value_error() {
  let cause = catch_unwind(|| Option::<i32>::empty().get()).unwrap_err();
  let message = cause.downcast_ref::<String>().map(String::as_str);
  assert_eq!(message, Some(EmptyValueError.to_string().as_str()));
}

#[test]
fn caller_panics_propagate_unchanged() {
  let cause = catch_unwind(|| Option::of(1).map(|_| -> i32 { panic!("map failed") })).unwrap_err();
  assert_eq!(cause.downcast_ref::<&str>(), Some(&"map failed"));

  let cause = catch_unwind(|| Option::<i32>::empty().get_or_else(Fallback::supplier(|| panic!("supplier failed"))))
    .unwrap_err();
  assert_eq!(cause.downcast_ref::<&str>(), Some(&"supplier failed"));
}

#[test]
fn for_each_receives_owned_value() {
  let received = RefCell::new(Vec::new());
  Option::of(String::from("s")).for_each(|s| received.borrow_mut().push(s));
  Option::<String>::empty().for_each(|s| received.borrow_mut().push(s));
  assert_eq!(received.into_inner(), vec![String::from("s")]);
}

#[test]
fn borrowed_combinators_do_not_change_original() {
  let original = Option::of(vec![1, 2, 3]);
  assert_eq!(original.as_ref().map(|v| v.len()).get(), 3);
  assert_eq!(original.as_ref().flat_map(|v| Option::of_nullable(v.first())).get(), &1);
  assert!(original.as_ref().or_else(Option::empty()).is_present());
  original.as_ref().for_each(|v| assert_eq!(v.len(), 3));
  assert!(!original.is_empty());
  assert_eq!(original.get(), vec![1, 2, 3]);
}
