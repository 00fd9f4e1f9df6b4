// tests/stack.rs
// Exercises the LIFO primitives directly, without a mailbox in front.

use mbx_messagebox::MsgBox::Stack::{Message, MsgStack};

#[test]
fn push_pop_is_lifo() {
    let mut stack = MsgStack::new();
    stack.push(Message::new(b"oldest".to_vec()));
    stack.push(Message::new(b"middle".to_vec()));
    stack.push(Message::new(b"newest".to_vec()));

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop_top().unwrap().payload(), b"newest");
    assert_eq!(stack.pop_top().unwrap().payload(), b"middle");
    assert_eq!(stack.pop_top().unwrap().payload(), b"oldest");
    assert!(stack.is_empty());
}

#[test]
fn pop_on_empty_returns_none() {
    let mut stack = MsgStack::new();
    assert!(stack.pop_top().is_none());
    // A second pop behaves identically.
    assert!(stack.pop_top().is_none());
    assert_eq!(stack.len(), 0);
}

#[test]
fn peek_does_not_mutate() {
    let mut stack = MsgStack::new();
    stack.push(Message::new(vec![7u8; 16]));

    for _ in 0..3 {
        let top = stack.peek_top().expect("top should be present");
        assert_eq!(top.len(), 16);
    }
    assert_eq!(stack.len(), 1);
}

#[test]
fn emptiness_tracks_push_and_pop() {
    let mut stack = MsgStack::new();
    assert!(stack.is_empty());

    stack.push(Message::new(vec![]));
    assert!(!stack.is_empty());
    assert_eq!(stack.peek_top().unwrap().len(), 0);

    let popped = stack.pop_top().unwrap();
    assert!(popped.is_empty());
    assert!(stack.is_empty());
}

#[test]
fn deep_stack_drops_without_recursion() {
    // A recursive Box drop would blow the thread stack long before this.
    let mut stack = MsgStack::new();
    for i in 0..200_000u32 {
        stack.push(Message::new(vec![i as u8]));
    }
    assert_eq!(stack.len(), 200_000);
    drop(stack);
}
