/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates using atomic integers as thread-safe counters, tracking the
//! last failure in an `AtomicError`, and exchanging counters as JSON.

use prism3_atomic_int::{AtomicError, AtomicI32, AtomicU32, SharedError};
use std::io;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = AtomicI32::new(0);
    println!("   Initial value: {}", counter.load());
    println!("   After inc: {}", counter.inc());
    println!("   After adding 5: {}", counter.add(5));
    println!("   After sub 10: {}", counter.sub(10));
    println!("   After dec: {}", counter.dec());

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(AtomicU32::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.inc();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.load(),
        num_threads * increments_per_thread
    );

    // Example 3: Unsigned wraparound
    println!("\n3. Unsigned Wraparound:");
    let counter = AtomicU32::new(0);
    println!("   0 - 1 = {}", counter.dec());
    println!("   + 1 = {}", counter.inc());

    // Example 4: Last error
    println!("\n4. Last Error:");
    let last_error = AtomicError::default();
    println!("   Initially: {:?}", last_error.load());
    let err: SharedError = Arc::new(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"));
    last_error.store(Some(err));
    if let Some(err) = last_error.load() {
        println!("   After failure: {}", err);
    }

    // Example 5: JSON
    println!("\n5. JSON:");
    let counter = AtomicI32::new(-42);
    let json = counter.marshal_json().unwrap();
    println!("   Encoded: {}", String::from_utf8_lossy(&json));
    let restored = AtomicI32::default();
    restored.unmarshal_json(&json).unwrap();
    println!("   Decoded: {}", restored);
    match restored.unmarshal_json(b"\"oops\"") {
        Ok(()) => println!("   Unexpected success"),
        Err(err) => println!("   Rejected: {} (value still {})", err, restored),
    }

    println!("\n=== Example Complete ===");
}
