use std::thread;

use typeddict::{dictionary::TypedDictionary, typed::typedkey::TypedKey};

fn main() {
    let progress = TypedDictionary::new();

    thread::scope(|s| {
        for worker in 0..4usize {
            let progress = progress.clone();
            s.spawn(move || {
                let done = TypedKey::new(format!("worker{worker}.steps"), 0usize);
                for step in 1..=10 {
                    progress.set(&done, step);
                }
            });
        }
    });

    for worker in 0..4usize {
        let done = TypedKey::new(format!("worker{worker}.steps"), 0usize);
        println!("worker {} finished {} steps", worker, progress.get(&done));
    }
}
