use crate::foundation::error::{MixelError, MixelResult};
use crate::script::array::ObjectArray;
use crate::script::registry::FuncRegistry;
use crate::script::value::{ArrayRef, Value, ValueKind};

fn check_arity(args: &[Value], min: usize, name: &str) -> MixelResult<()> {
    if args.len() < min {
        return Err(MixelError::bad_params(format!(
            "{name} expects at least {min} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

fn arg_array(args: &[Value]) -> MixelResult<ArrayRef> {
    args.first()
        .ok_or_else(|| MixelError::bad_params("expected an array as first argument"))?
        .as_array()
        .cloned()
}

/// Resolve a possibly negative script index against `len` *before* bounds
/// validation, so `-1` always names the last element; `allow_end` admits the
/// one-past-the-end position (insert).
fn resolve_index(idx: i64, len: usize, allow_end: bool) -> MixelResult<usize> {
    let len = len as i64;
    let resolved = if idx < 0 { idx + len } else { idx };
    let limit = if allow_end { len } else { len - 1 };
    if resolved < 0 || resolved > limit {
        return Err(MixelError::bad_params(format!(
            "index {idx} out of range for length {len}"
        )));
    }
    Ok(resolved as usize)
}

fn array_create(args: &[Value]) -> MixelResult<Value> {
    let array = ObjectArray::from_values(args.to_vec());
    Ok(Value::Array(ArrayRef::new(array)))
}

fn array_create_with_str(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_create_with_str")?;
    let text = args[0].as_str()?;
    let sep = args[1].as_str()?;
    let kind = match args.get(2) {
        Some(hint) => match hint.as_str()?.as_bytes().first() {
            Some(b'i') => ValueKind::Int,
            Some(b'd') => ValueKind::Float,
            _ => ValueKind::Str,
        },
        None => ValueKind::Str,
    };
    let array = ObjectArray::from_delimited(text, sep, kind)?;
    Ok(Value::Array(ArrayRef::new(array)))
}

fn array_create_repeated(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_create_repeated")?;
    let count = args[1].coerce_int().max(0) as usize;
    let array = ObjectArray::from_values(vec![args[0].clone(); count]);
    Ok(Value::Array(ArrayRef::new(array)))
}

fn array_dup(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let arr = arr.borrow();
    let start = args.get(1).map_or(0, Value::coerce_int);
    let end = args.get(2).map_or(arr.len() as i64, Value::coerce_int);
    if start < 0 || end < 0 {
        return Err(MixelError::bad_params(format!(
            "invalid dup range {start}..{end}"
        )));
    }
    let dup = arr.dup(start as usize, end as usize)?;
    Ok(Value::Array(ArrayRef::new(dup)))
}

fn array_push(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_push")?;
    let arr = arg_array(args)?;
    let mut arr = arr.borrow_mut();
    for v in &args[1..] {
        arr.push(v.clone());
    }
    Ok(Value::Int((args.len() - 1) as i64))
}

fn array_pop(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow_mut().pop();
    v.ok_or_else(|| MixelError::bad_params("pop from an empty array"))
}

fn array_shift(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow_mut().shift();
    v.ok_or_else(|| MixelError::bad_params("shift from an empty array"))
}

fn array_get(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_get")?;
    let arr = arg_array(args)?;
    let arr = arr.borrow();
    let idx = resolve_index(args[1].coerce_int(), arr.len(), false)?;
    Ok(arr.values()[idx].clone())
}

fn array_set(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 3, "array_set")?;
    let arr = arg_array(args)?;
    let mut arr = arr.borrow_mut();
    let idx = resolve_index(args[1].coerce_int(), arr.len(), false)?;
    arr.set(idx, args[2].clone())?;
    Ok(Value::Bool(true))
}

fn array_insert(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 3, "array_insert")?;
    let arr = arg_array(args)?;
    let mut arr = arr.borrow_mut();
    let idx = resolve_index(args[1].coerce_int(), arr.len(), true)?;
    arr.insert(idx, args[2].clone());
    Ok(Value::Bool(true))
}

fn array_remove(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_remove")?;
    let arr = arg_array(args)?;
    let mut arr = arr.borrow_mut();
    let idx = resolve_index(args[1].coerce_int(), arr.len(), false)?;
    arr.remove(idx)?;
    Ok(Value::Bool(true))
}

fn array_get_and_remove(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_get_and_remove")?;
    let arr = arg_array(args)?;
    let mut arr = arr.borrow_mut();
    let idx = resolve_index(args[1].coerce_int(), arr.len(), false)?;
    arr.remove(idx)
}

fn array_index_of(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_index_of")?;
    let arr = arg_array(args)?;
    let pos = arr.borrow().index_of(&args[1]);
    Ok(Value::Int(pos.map_or(-1, |p| p as i64)))
}

fn array_last_index_of(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_last_index_of")?;
    let arr = arg_array(args)?;
    let pos = arr.borrow().last_index_of(&args[1]);
    Ok(Value::Int(pos.map_or(-1, |p| p as i64)))
}

fn array_clear(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    arr.borrow_mut().clear();
    Ok(Value::Bool(true))
}

fn array_join(args: &[Value]) -> MixelResult<Value> {
    check_arity(args, 2, "array_join")?;
    let arr = arg_array(args)?;
    let sep = args[1].as_str()?;
    let joined = arr.borrow().join(sep)?;
    Ok(Value::from(joined))
}

/// Comparison is dispatched on the first element's kind: strings sort as
/// text, integers as integers, everything else as floats.
fn sort_in_place(arr: &ArrayRef, ascending: bool, ignore_case: bool) {
    let mut arr = arr.borrow_mut();
    let kind = arr.values().first().map(Value::kind);
    match kind {
        None => {}
        Some(ValueKind::Str) => arr.sort_as_str(ascending, ignore_case),
        Some(ValueKind::Int) => arr.sort_as_int(ascending),
        Some(_) => arr.sort_as_f64(ascending),
    }
}

fn array_sort(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let ascending = args.get(1).map_or(true, Value::coerce_bool);
    let ignore_case = args.get(2).map_or(false, Value::coerce_bool);
    sort_in_place(&arr, ascending, ignore_case);
    Ok(Value::Bool(true))
}

fn array_clone_and_sort(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let ascending = args.get(1).map_or(true, Value::coerce_bool);
    let ignore_case = args.get(2).map_or(false, Value::coerce_bool);
    let clone = ArrayRef::new(arr.borrow().clone());
    sort_in_place(&clone, ascending, ignore_case);
    Ok(Value::Array(clone))
}

fn array_min(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow().min();
    v.ok_or_else(|| MixelError::bad_params("min of an empty array"))
}

fn array_max(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow().max();
    v.ok_or_else(|| MixelError::bad_params("max of an empty array"))
}

fn array_avg(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow().avg();
    Ok(v)
}

fn array_sum(args: &[Value]) -> MixelResult<Value> {
    let arr = arg_array(args)?;
    let v = arr.borrow().sum();
    Ok(v)
}

#[tracing::instrument(skip(registry))]
/// Register the complete `array_*` scripting function set.
///
/// Fails if any of the names is already taken in `registry`.
pub fn register_array_funcs(registry: &mut FuncRegistry) -> MixelResult<()> {
    registry.register("array_create", array_create)?;
    registry.register("array_create_with_str", array_create_with_str)?;
    registry.register("array_create_repeated", array_create_repeated)?;
    registry.register("array_dup", array_dup)?;
    registry.register("array_push", array_push)?;
    registry.register("array_pop", array_pop)?;
    registry.register("array_shift", array_shift)?;
    registry.register("array_get", array_get)?;
    registry.register("array_set", array_set)?;
    registry.register("array_insert", array_insert)?;
    registry.register("array_remove", array_remove)?;
    registry.register("array_get_and_remove", array_get_and_remove)?;
    registry.register("array_index_of", array_index_of)?;
    registry.register("array_last_index_of", array_last_index_of)?;
    registry.register("array_clear", array_clear)?;
    registry.register("array_join", array_join)?;
    registry.register("array_sort", array_sort)?;
    registry.register("array_clone_and_sort", array_clone_and_sort)?;
    registry.register("array_min", array_min)?;
    registry.register("array_max", array_max)?;
    registry.register("array_avg", array_avg)?;
    registry.register("array_sum", array_sum)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/script/funcs.rs"]
mod tests;
