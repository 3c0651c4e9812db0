use std::thread;

use pennywise_core::{evaluate_budget, get_category_name, suggest_category, AlertSeverity};

#[test]
fn registry_is_safe_to_share_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for _ in 0..200 {
                    assert_eq!(suggest_category("Netflix renewal", None), Some("entertainment"));
                    assert_eq!(get_category_name("ghost"), "Other");
                    let alert = evaluate_budget(worker as f64 * 20.0, 100.0).expect("alert");
                    assert!(alert.severity >= AlertSeverity::None);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
