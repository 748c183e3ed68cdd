/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_int::{
    Atomic,
    AtomicI16,
    AtomicI32,
    AtomicInteger,
    AtomicU8,
    AtomicUsize,
};

// Test that the integer types implement the Atomic trait correctly
#[test]
fn test_atomic_trait_integers() {
    fn test_atomic<T: Atomic<Value = i32>>(atomic: &T) {
        atomic.store(42);
        assert_eq!(atomic.load(), 42);
        let old = atomic.swap(100);
        assert_eq!(old, 42);
        assert_eq!(atomic.load(), 100);

        assert!(atomic.cas(100, 200));
        assert_eq!(atomic.load(), 200);
        assert!(!atomic.cas(100, 300));
        assert_eq!(atomic.load(), 200);
    }

    let atomic = AtomicI32::new(0);
    test_atomic(&atomic);
}

#[test]
fn test_atomic_integer_trait_signed() {
    fn test_integer<T: AtomicInteger<Value = i16>>(atomic: &T) {
        assert_eq!(atomic.add(5), 5);
        assert_eq!(atomic.sub(10), -5);
        assert_eq!(atomic.inc(), -4);
        assert_eq!(atomic.dec(), -5);
    }

    let atomic = AtomicI16::new(0);
    test_integer(&atomic);
}

#[test]
fn test_atomic_integer_trait_unsigned() {
    fn test_integer<T: AtomicInteger<Value = u8>>(atomic: &T) {
        assert_eq!(atomic.sub(1), u8::MAX);
        assert_eq!(atomic.inc(), 0);
        assert_eq!(atomic.add(200), 200);
        assert_eq!(atomic.add(100), 44);
    }

    let atomic = AtomicU8::new(0);
    test_integer(&atomic);
}

// Generic helper written once against the traits
fn drain<T>(atomic: &T, steps: usize) -> T::Value
where
    T: AtomicInteger,
{
    for _ in 0..steps {
        atomic.dec();
    }
    atomic.load()
}

#[test]
fn test_generic_helper_over_widths() {
    assert_eq!(drain(&AtomicUsize::new(10), 4), 6);
    assert_eq!(drain(&AtomicI32::new(2), 5), -3);
}

#[test]
fn test_trait_objects() {
    let values: Vec<Box<dyn AtomicInteger<Value = i32>>> =
        vec![Box::new(AtomicI32::new(1)), Box::new(AtomicI32::new(2))];
    for value in &values {
        value.inc();
    }
    let total: i32 = values.iter().map(|v| v.load()).sum();
    assert_eq!(total, 5);
}
