//! Several threads racing the first resolution all see the same table.
//! Runs as its own process so the global table is still uninitialized.

use std::sync::{Arc, Barrier};
use std::thread;

use pinyin_core::{full_pinyin, split_pinyin, PinyinResolver};

#[test]
fn first_use_from_many_threads() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let r = PinyinResolver::system().resolve_str("中国行");
                (full_pinyin(&r), split_pinyin(&r))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results {
        assert_eq!(result, &results[0]);
    }
    assert_eq!(results[0].0, "ZHONGGUOXING");
    assert_eq!(results[0].1, ["ZHONG", "GUO", "XING"]);
}
