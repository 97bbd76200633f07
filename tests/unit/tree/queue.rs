use super::*;

#[test]
fn pops_lightest_first() {
    let mut q = MergeQueue::new();
    q.push(30.0, 'c');
    q.push(5.0, 'a');
    q.push(10.0, 'b');
    assert_eq!(q.pop(), Some((5.0, 'a')));
    assert_eq!(q.pop(), Some((10.0, 'b')));
    assert_eq!(q.pop(), Some((30.0, 'c')));
    assert_eq!(q.pop(), None);
}

#[test]
fn equal_weights_pop_in_insertion_order() {
    let mut q = MergeQueue::new();
    q.push(5.0, 'x');
    q.push(1.0, 'a');
    q.push(5.0, 'y');
    q.push(5.0, 'z');
    assert_eq!(q.pop().map(|p| p.1), Some('a'));
    assert_eq!(q.pop().map(|p| p.1), Some('x'));
    assert_eq!(q.pop().map(|p| p.1), Some('y'));
    assert_eq!(q.pop().map(|p| p.1), Some('z'));
}

#[test]
fn pop_pair_requires_two_items() {
    let mut q = MergeQueue::new();
    q.push(1.0, 1u32);
    assert!(q.pop_pair().is_none());
    assert_eq!(q.len(), 1);
    q.push(2.0, 2u32);
    let ((wa, a), (wb, b)) = q.pop_pair().unwrap();
    assert_eq!((wa, a, wb, b), (1.0, 1, 2.0, 2));
    assert!(q.is_empty());
}
