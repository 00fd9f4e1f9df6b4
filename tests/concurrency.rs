// tests/concurrency.rs
// Many callers on one box: no partial pushes or pops may ever be observed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use mbx_messagebox::Core::errors::MbxError;
use mbx_messagebox::MsgBox::MessageBox;

/// Each message is a uniform run of one tag byte, so any torn push or pop
/// shows up as a mixed payload.
fn uniform_payload(tag: u8, len: usize) -> Vec<u8> {
    vec![tag; len]
}

fn assert_uniform(buf: &[u8]) {
    if let Some(&first) = buf.first() {
        assert!(
            buf.iter().all(|&b| b == first),
            "payload was torn: {:?}...",
            &buf[..buf.len().min(8)]
        );
    }
}

#[test]
fn concurrent_puts_then_gets_preserve_every_message() {
    let producers = 4;
    let puts_per_producer = 250;
    let consumers = 3;
    let gets_per_consumer = 200;

    let mbox = Arc::new(MessageBox::new());

    let mut handles = vec![];
    for p in 0..producers {
        let mbox = Arc::clone(&mbox);
        handles.push(thread::spawn(move || {
            for i in 0..puts_per_producer {
                let payload = uniform_payload(p as u8, 1 + (i % 64));
                mbox.put_bytes(&payload).unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(mbox.depth(), producers * puts_per_producer);

    let mut handles = vec![];
    for _ in 0..consumers {
        let mbox = Arc::clone(&mbox);
        handles.push(thread::spawn(move || {
            let mut out = [0u8; 64];
            for _ in 0..gets_per_consumer {
                let written = mbox.get_bytes(&mut out).unwrap();
                assert!(written >= 1 && written <= 64);
                assert_uniform(&out[..written]);
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    // N puts, M gets: exactly N - M messages remain, all intact.
    let expected = producers * puts_per_producer - consumers * gets_per_consumer;
    assert_eq!(mbox.depth(), expected);

    let mut out = [0u8; 64];
    for _ in 0..expected {
        let written = mbox.get_bytes(&mut out).unwrap();
        assert_uniform(&out[..written]);
    }
    assert!(mbox.is_empty());
}

#[test]
fn mixed_traffic_balances_puts_and_gets() {
    let mbox = Arc::new(MessageBox::new());
    let puts = Arc::new(AtomicUsize::new(0));
    let gets = Arc::new(AtomicUsize::new(0));

    let mut handles = vec![];
    for tag in 0..3u8 {
        let mbox = Arc::clone(&mbox);
        let puts = Arc::clone(&puts);
        handles.push(thread::spawn(move || {
            for i in 0..500 {
                let payload = uniform_payload(tag, 1 + (i % 32));
                mbox.put_bytes(&payload).unwrap();
                puts.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }
    for _ in 0..3 {
        let mbox = Arc::clone(&mbox);
        let gets = Arc::clone(&gets);
        handles.push(thread::spawn(move || {
            let mut out = [0u8; 32];
            let mut emptied = 0;
            // Keep pulling until the box has gone quiet a few times.
            while emptied < 100 {
                match mbox.get_bytes(&mut out) {
                    Ok(written) => {
                        assert_uniform(&out[..written]);
                        gets.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(MbxError::Empty) => {
                        emptied += 1;
                        thread::yield_now();
                    }
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let total_puts = puts.load(Ordering::Relaxed);
    let total_gets = gets.load(Ordering::Relaxed);
    assert_eq!(total_puts, 1500);
    assert_eq!(mbox.depth(), total_puts - total_gets);
}
