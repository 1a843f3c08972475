//! A simple blacklist example.
//!
//! In this example, there are three threads:
//! -   A Producer thread will intermittently add new black-listed IDs to the SafeSet.
//! -   A Pardoner thread will intermittently remove the oldest black-listed IDs from the SafeSet.
//! -   A Consumer thread will "model" a continuous stream of messages coming and for each check their sender against
//!     the black-list.
//!
//! There could be more Consumer threads; for clarity there isn't.

extern crate crossbeam_utils;
extern crate lockset;

use std::sync::atomic::{AtomicBool, Ordering};
use std::{thread, time};

use lockset::set::SafeSet;

const NUMBER_ELEMENTS_PER_BATCH: usize = 10;
const NUMBER_BATCHES: usize = 10;

const PACE_TIME: time::Duration = time::Duration::from_millis(100);

//  Mixed-types look-up!
fn is_blacklisted(id: &str, blacklist: &SafeSet<String>) -> bool {
    blacklist.contains(id)
}

fn main() {
    let _ = env_logger::try_init();

    let blacklist: SafeSet<String> = SafeSet::new();
    let done = AtomicBool::new(false);

    crossbeam_utils::thread::scope(|scope| {
        //
        //  Consumer
        //
        scope.spawn(|_| {
            let mut blacklisted = 0;

            while !done.load(Ordering::Acquire) {
                //  Simulate continuous stream of messages
                for i in 0..NUMBER_BATCHES {
                    for j in 0..NUMBER_ELEMENTS_PER_BATCH {
                        let id = i * NUMBER_ELEMENTS_PER_BATCH + j;
                        let id = format!("{}", id);

                        if is_blacklisted(&id, &blacklist) {
                            blacklisted += 1;
                        }
                    }
                }

                thread::sleep(PACE_TIME / 10);
            }

            println!("Consumer - {} messages black-listed", blacklisted);
        });

        //
        //  Pardoner
        //
        scope.spawn(|_| {
            while !done.load(Ordering::Acquire) {
                thread::sleep(PACE_TIME * 3);

                //  The snapshot does not hold the lock, so removals may proceed.
                let mut ids: Vec<usize> = blacklist.snapshot()
                    .filter_map(|id| id.parse().ok())
                    .collect();
                ids.sort_unstable();
                ids.truncate(2);

                for id in ids {
                    if blacklist.remove(&format!("{}", id)) {
                        println!("Pardoner - pardoning {}", id);
                    }
                }
            }
        });

        //
        //  Producer
        //
        for i in 0..NUMBER_BATCHES {
            let batch = (0..NUMBER_ELEMENTS_PER_BATCH)
                .map(|j| i * NUMBER_ELEMENTS_PER_BATCH + j)
                //  "Randomly" blacklist a few elements
                .filter(|id| id * 13 % NUMBER_ELEMENTS_PER_BATCH == 0)
                .map(|id| format!("{}", id));

            blacklist.extend(batch);

            println!("Producer - {} black-listed", blacklist.len());

            thread::sleep(PACE_TIME);
        }

        done.store(true, Ordering::Release);
    })
    .unwrap();

    println!("Final black-list: {:?}", blacklist);
}
