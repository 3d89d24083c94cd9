// End-to-end walk through the stack API, in structured-error mode

use arraystack::{swap, ArrayStack, Error, Report, Result};

type Stack<T, const N: usize> = ArrayStack<T, N, Report>;

fn check_const_members(stack: &Stack<i32, 3>) -> Result<()> {
    assert_eq!(stack[0], 42);
    assert_eq!(*stack.top()?, 42);
    Ok(())
}

#[test]
fn test_size_capacity_push_pop() -> Result<()> {
    let mut a = Stack::<i32, 3>::new();
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 3);

    a.push(0)?;
    a.push(1)?;
    a.push(2)?;
    assert_eq!(a.len(), 3);
    assert_eq!(*a.top()?, 2);
    assert!(a.is_full());

    a.pop()?;
    assert_eq!(a.len(), 2);
    assert_eq!(*a.top()?, 1);
    a.pop()?;
    assert_eq!(a.len(), 1);
    assert_eq!(*a.top()?, 0);
    a.pop()?;
    assert_eq!(a.len(), 0);
    assert!(a.is_empty());

    a.push(42)?;
    assert_eq!(a.len(), 1);
    check_const_members(&a)
}

#[test]
fn test_error_messages() -> Result<()> {
    let mut err = Stack::<i32, 2>::new();

    assert_eq!(err.top().unwrap_err().message, "empty stack");
    assert_eq!(err.pop().unwrap_err().message, "empty stack");
    assert!(err.top().unwrap_err().is_empty_stack());
    assert!(err.pop().unwrap_err().is_empty_stack());

    err.push(1)?;
    err.push(1)?;
    let overflow = err.push(1).unwrap_err();
    assert_eq!(overflow.message, "stack overflow");
    assert!(overflow.is_stack_overflow());
    assert!(overflow.is_capacity_error());
    assert!(err.push_cloned(&1).unwrap_err().is_stack_overflow());

    err.clear();
    assert_eq!(err.push_range([0, 1, 2]).unwrap_err().message, "stack overflow");
    assert!(err.is_empty());

    err.clear();
    err.emplace(|| 1)?;
    err.emplace(|| 1)?;
    assert_eq!(err.emplace(|| 1).map(|_| ()).unwrap_err().message, "stack overflow");
    Ok(())
}

#[test]
fn test_comparisons() -> Result<()> {
    let mut a = Stack::<i32, 3>::new();
    a.push(42)?;

    let mut v = vec![42];
    let mut b = Stack::<i32, 3>::try_from_iter(v.iter().copied())?;
    assert_eq!(a, b);
    assert_eq!(*b.top()?, 42);

    b.push(1)?;
    assert_ne!(a, b);
    b.pop()?;
    b.pop()?;
    b.push(41)?;
    assert_ne!(a, b);

    assert!(a > b);
    assert!(b < a);
    assert!(a >= b);
    assert!(b <= a);

    b.push(0)?;
    assert_ne!(a, b);
    assert!(a > b);
    assert!(b < a);
    assert!(a >= b);
    assert!(b <= a);

    let mut c = Stack::<i32, 3>::from([4, 5, 6]);
    assert_eq!(*c.top()?, 6);

    v.push(24);
    let mut d = Stack::<i32, 3>::try_from(v.as_slice())?;
    assert_eq!(d.len(), 2);
    assert_eq!(*d.top()?, 24);
    assert_eq!(d[0], 42);
    assert_eq!(d[1], 24);
    d[1] = -3;
    assert_eq!(d[1], -3);

    *d.top_mut()? = 1234;
    assert_eq!(*d.top()?, 1234);
    d.swap(&mut c);
    assert_eq!(*d.top()?, 6);
    assert_eq!(*c.top()?, 1234);

    let a_top = *a.top()?;
    let b_top = *b.top()?;
    swap(&mut a, &mut b);
    assert_eq!(*a.top()?, b_top);
    assert_eq!(*b.top()?, a_top);
    Ok(())
}

#[test]
fn test_strings_pairs_and_ranges() -> Result<()> {
    let value = String::from("Here's a long string that's stored on the heap");
    let mut ss = Stack::<String, 3>::new();
    ss.push("foo".into())?;
    ss.push(String::from("bar"))?;
    ss.push_cloned(&value)?;
    assert_eq!(*ss.top()?, value);
    ss.pop()?;
    assert_eq!(ss.top()?, "bar");

    let mut d = Stack::<i32, 3>::new();
    d.push_range([0, 1, 2])?;
    assert_eq!(*d.top()?, 2);
    d.pop()?;
    assert_eq!(*d.top()?, 1);
    d.pop()?;
    assert_eq!(*d.top()?, 0);

    d.clear();
    d.emplace(|| 42)?;
    d.emplace(|| 24)?;
    assert_eq!(*d.top()?, 24);
    d.pop()?;
    assert_eq!(*d.top()?, 42);

    let mut pairs = Stack::<(i32, f64), 4>::new();
    pairs.emplace(|| (1, 1.0))?;
    pairs.emplace(|| (2, 2.0))?;
    let (ii, dd) = *pairs.top()?;
    assert_eq!(ii, 2);
    assert_eq!(dd, 2.0);
    pairs.pop()?;
    assert_eq!(pairs.top()?.0, 1);
    assert_eq!(pairs.top()?.1, 1.0);
    Ok(())
}

#[test]
fn test_construction_never_truncates() {
    let source = [1, 2, 3, 4];
    let error = Stack::<i32, 3>::try_from(&source[..]).unwrap_err();
    assert_eq!(error, Error::CAPACITY_EXCEEDED);
    assert!(error.is_capacity_exceeded());
    assert!(error.is_capacity_error());
    assert!(!error.is_stack_overflow());
}

#[test]
fn test_stack_is_send_when_elements_are() {
    fn assert_send<S: Send>() {}
    fn assert_sync<S: Sync>() {}
    assert_send::<Stack<String, 4>>();
    assert_sync::<Stack<String, 4>>();
}
