// In demos/stress.rs
// Multi-threaded stress client: producers push sha256-tagged records while
// consumers pop and verify them. Runs until Ctrl+C (or an optional number
// of seconds passed as the first argument).

use mbx_messagebox::Core::errors::MbxError;
use mbx_messagebox::MsgBox::MessageBox;
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const RECORD_LEN: usize = 8 + 32; // counter || sha256(counter)

fn make_record(counter: u64) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(counter.to_le_bytes());
    let mut record = Vec::with_capacity(RECORD_LEN);
    record.extend_from_slice(&counter.to_le_bytes());
    record.extend_from_slice(&hasher.finalize());
    record
}

fn verify_record(record: &[u8]) -> bool {
    if record.len() != RECORD_LEN {
        return false;
    }
    let mut counter = [0u8; 8];
    counter.copy_from_slice(&record[..8]);
    let mut hasher = Sha256::new();
    hasher.update(counter);
    hasher.finalize().as_slice() == &record[8..]
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let run_secs: Option<u64> = args.get(1).map(|s| s.parse().expect("Invalid seconds"));

    let mbox = Arc::new(MessageBox::new());
    let running = Arc::new(AtomicBool::new(true));
    let put_count = Arc::new(AtomicU64::new(0));
    let get_count = Arc::new(AtomicU64::new(0));

    let running_for_handler = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    println!("Stress: 2 producers / 2 consumers, Ctrl+C to stop");

    let mut handles = vec![];
    for p in 0..2u64 {
        let mbox = Arc::clone(&mbox);
        let running = Arc::clone(&running);
        let put_count = Arc::clone(&put_count);
        handles.push(thread::spawn(move || {
            let mut counter = p;
            while running.load(Ordering::Relaxed) {
                let record = make_record(counter);
                mbox.put_bytes(&record).expect("put failed");
                put_count.fetch_add(1, Ordering::Relaxed);
                counter += 2;
            }
        }));
    }
    for _ in 0..2 {
        let mbox = Arc::clone(&mbox);
        let running = Arc::clone(&running);
        let get_count = Arc::clone(&get_count);
        handles.push(thread::spawn(move || {
            let mut out = [0u8; RECORD_LEN];
            while running.load(Ordering::Relaxed) {
                match mbox.get_bytes(&mut out) {
                    Ok(written) => {
                        if !verify_record(&out[..written]) {
                            eprintln!("CORRUPT record popped!");
                            running.store(false, Ordering::SeqCst);
                        }
                        get_count.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(MbxError::Empty) => thread::yield_now(),
                    Err(e) => panic!("get failed: {e}"),
                }
            }
        }));
    }

    let start = Instant::now();
    if let Some(secs) = run_secs {
        while running.load(Ordering::Relaxed) && start.elapsed() < Duration::from_secs(secs) {
            thread::sleep(Duration::from_millis(50));
        }
        running.store(false, Ordering::SeqCst);
    }
    for h in handles {
        h.join().unwrap();
    }

    let puts = put_count.load(Ordering::Relaxed);
    let gets = get_count.load(Ordering::Relaxed);
    println!(
        "Stress: {} puts, {} gets in {:.2?}, {} left in the box",
        puts,
        gets,
        start.elapsed(),
        mbox.depth()
    );
    assert_eq!(mbox.depth() as u64, puts - gets);
    println!("Stress: depth accounting is consistent");
}
