use super::*;

fn arr(values: Vec<Value>) -> Value {
    Value::Array(ArrayRef::new(ObjectArray::from_values(values)))
}

#[test]
fn resolve_index_wraps_negatives_before_bounds() {
    assert_eq!(resolve_index(-1, 3, false).unwrap(), 2);
    assert_eq!(resolve_index(0, 3, false).unwrap(), 0);
    assert_eq!(resolve_index(-3, 3, false).unwrap(), 0);
    assert!(resolve_index(3, 3, false).is_err());
    assert!(resolve_index(-4, 3, false).is_err());
    // Insert may name the slot after the last element.
    assert_eq!(resolve_index(3, 3, true).unwrap(), 3);
    assert!(resolve_index(4, 3, true).is_err());
}

#[test]
fn create_collects_its_arguments() {
    let v = array_create(&[Value::Int(1), Value::from("x")]).unwrap();
    let a = v.as_array().unwrap();
    assert_eq!(a.borrow().values(), [Value::Int(1), Value::from("x")]);
    assert_eq!(array_create(&[]).unwrap().as_array().unwrap().borrow().len(), 0);
}

#[test]
fn create_with_str_honors_the_kind_hint() {
    let v = array_create_with_str(&[
        Value::from("1,2,3"),
        Value::from(","),
        Value::from("int"),
    ])
    .unwrap();
    let a = v.as_array().unwrap();
    assert_eq!(
        a.borrow().values(),
        [Value::Int(1), Value::Int(2), Value::Int(3)]
    );

    let v = array_create_with_str(&[
        Value::from("0.5|1.5"),
        Value::from("|"),
        Value::from("double"),
    ])
    .unwrap();
    let a = v.as_array().unwrap();
    assert_eq!(a.borrow().values(), [Value::Float(0.5), Value::Float(1.5)]);

    let v = array_create_with_str(&[Value::from("a,b"), Value::from(",")]).unwrap();
    let a = v.as_array().unwrap();
    assert_eq!(a.borrow().values(), [Value::from("a"), Value::from("b")]);
}

#[test]
fn create_repeated_clamps_negative_counts() {
    let v = array_create_repeated(&[Value::from("x"), Value::Int(3)]).unwrap();
    assert_eq!(v.as_array().unwrap().borrow().len(), 3);
    let v = array_create_repeated(&[Value::from("x"), Value::Int(-2)]).unwrap();
    assert_eq!(v.as_array().unwrap().borrow().len(), 0);
}

#[test]
fn dup_defaults_to_the_whole_array() {
    let a = arr(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let d = array_dup(&[a.clone()]).unwrap();
    assert_eq!(d.as_array().unwrap().borrow().len(), 3);
    // A fresh handle, not an alias.
    assert!(!d.as_array().unwrap().ptr_eq(a.as_array().unwrap()));

    let d = array_dup(&[a.clone(), Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(d.as_array().unwrap().borrow().values(), [Value::Int(2)]);
    assert!(array_dup(&[a, Value::Int(-1)]).is_err());
}

#[test]
fn push_returns_the_number_of_values_appended() {
    let a = arr(vec![]);
    let n = array_push(&[a.clone(), Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(n, Value::Int(2));
    assert_eq!(a.as_array().unwrap().borrow().len(), 2);
    assert!(array_push(&[a]).is_err());
}

#[test]
fn pop_and_shift_error_on_empty() {
    let a = arr(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(array_pop(&[a.clone()]).unwrap(), Value::Int(2));
    assert_eq!(array_shift(&[a.clone()]).unwrap(), Value::Int(1));
    assert!(array_pop(&[a.clone()]).is_err());
    assert!(array_shift(&[a]).is_err());
}

#[test]
fn get_and_set_resolve_negative_indices() {
    let a = arr(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(array_get(&[a.clone(), Value::Int(-1)]).unwrap(), Value::Int(3));
    array_set(&[a.clone(), Value::Int(-3), Value::Int(9)]).unwrap();
    assert_eq!(array_get(&[a.clone(), Value::Int(0)]).unwrap(), Value::Int(9));
    assert!(array_get(&[a, Value::Int(3)]).is_err());
}

#[test]
fn insert_accepts_the_end_position() {
    let a = arr(vec![Value::Int(1)]);
    array_insert(&[a.clone(), Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(
        a.as_array().unwrap().borrow().values(),
        [Value::Int(1), Value::Int(2)]
    );
    assert!(array_insert(&[a, Value::Int(5), Value::Int(9)]).is_err());
}

#[test]
fn remove_variants_differ_only_in_return() {
    let a = arr(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(
        array_remove(&[a.clone(), Value::Int(0)]).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        array_get_and_remove(&[a.clone(), Value::Int(-1)]).unwrap(),
        Value::Int(3)
    );
    assert_eq!(a.as_array().unwrap().borrow().values(), [Value::Int(2)]);
}

#[test]
fn index_of_returns_minus_one_for_missing() {
    let a = arr(vec![Value::Int(5), Value::Int(6), Value::Int(5)]);
    assert_eq!(
        array_index_of(&[a.clone(), Value::Int(5)]).unwrap(),
        Value::Int(0)
    );
    assert_eq!(
        array_last_index_of(&[a.clone(), Value::Int(5)]).unwrap(),
        Value::Int(2)
    );
    assert_eq!(array_index_of(&[a, Value::Int(9)]).unwrap(), Value::Int(-1));
}

#[test]
fn clear_empties_in_place() {
    let a = arr(vec![Value::Int(1)]);
    assert_eq!(array_clear(&[a.clone()]).unwrap(), Value::Bool(true));
    assert!(a.as_array().unwrap().borrow().is_empty());
}

#[test]
fn join_requires_a_string_separator() {
    let a = arr(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(
        array_join(&[a.clone(), Value::from("+")]).unwrap(),
        Value::from("1+2")
    );
    assert!(array_join(&[a, Value::Int(3)]).is_err());
}

#[test]
fn sort_dispatches_on_the_first_element() {
    let a = arr(vec![Value::Int(3), Value::Int(1), Value::Int(2)]);
    array_sort(&[a.clone(), Value::Bool(false)]).unwrap();
    assert_eq!(
        a.as_array().unwrap().borrow().values(),
        [Value::Int(3), Value::Int(2), Value::Int(1)]
    );

    let s = arr(vec![Value::from("b"), Value::from("A")]);
    array_sort(&[s.clone(), Value::Bool(true), Value::Bool(true)]).unwrap();
    assert_eq!(
        s.as_array().unwrap().borrow().values(),
        [Value::from("A"), Value::from("b")]
    );

    // Sorting an empty array is a no-op, not an error.
    let e = arr(vec![]);
    assert_eq!(array_sort(&[e]).unwrap(), Value::Bool(true));
}

#[test]
fn clone_and_sort_leaves_the_source_untouched() {
    let a = arr(vec![Value::Int(2), Value::Int(1)]);
    let sorted = array_clone_and_sort(&[a.clone()]).unwrap();
    assert_eq!(
        sorted.as_array().unwrap().borrow().values(),
        [Value::Int(1), Value::Int(2)]
    );
    assert_eq!(
        a.as_array().unwrap().borrow().values(),
        [Value::Int(2), Value::Int(1)]
    );
}

#[test]
fn reductions_cover_min_max_sum_avg() {
    let a = arr(vec![Value::Int(4), Value::Int(1), Value::Int(3)]);
    assert_eq!(array_min(&[a.clone()]).unwrap(), Value::Int(1));
    assert_eq!(array_max(&[a.clone()]).unwrap(), Value::Int(4));
    assert_eq!(array_sum(&[a.clone()]).unwrap(), Value::Int(8));
    assert_eq!(array_avg(&[a]).unwrap(), Value::Float(8.0 / 3.0));

    let empty = arr(vec![]);
    assert!(array_min(&[empty.clone()]).is_err());
    assert!(array_max(&[empty.clone()]).is_err());
    assert_eq!(array_sum(&[empty]).unwrap(), Value::Int(0));
}

#[test]
fn registration_installs_every_function_once() {
    let mut reg = FuncRegistry::new();
    register_array_funcs(&mut reg).unwrap();
    assert_eq!(reg.len(), 22);
    assert!(reg.get("array_create").is_some());
    assert!(reg.get("array_sum").is_some());
    // A second pass collides on the first name.
    assert!(register_array_funcs(&mut reg).is_err());
}

#[test]
fn non_array_first_argument_is_rejected() {
    assert!(array_push(&[Value::Int(1), Value::Int(2)]).is_err());
    assert!(array_pop(&[]).is_err());
}
