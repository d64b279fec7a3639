use std::thread;

use crossbeam_channel::unbounded;

/// Runs `work` for every item on its own scoped thread and returns the
/// results in item order, whatever order they complete in.
pub(crate) fn fan_out<T, R, F>(lane: &str, items: &[T], work: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let (tx, rx) = unbounded::<(usize, R)>();
    let mut slots: Vec<Option<R>> = items.iter().map(|_| None).collect();
    let work = &work;
    thread::scope(|s| {
        for (i, item) in items.iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move || {
                let _ = tx.send((i, work(item)));
            });
        }
        drop(tx);
        for (i, out) in rx.iter() {
            log::trace!("{lane} worker {i} finished");
            slots[i] = Some(out);
        }
    });
    debug_assert!(slots.iter().all(Option::is_some));
    slots.into_iter().flatten().collect()
}
