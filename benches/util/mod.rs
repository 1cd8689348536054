use std::cell::Cell;
use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;

fn pin_core_id() -> usize {
    static PIN_CORE_ID: OnceCell<usize> = OnceCell::new();

    *PIN_CORE_ID.get_or_init(|| {
        if let Ok(val) = env::var("BENCH_PIN_CORE") {
            usize::from_str(&val)
                .unwrap_or_else(|_| panic!("Invalid BENCH_PIN_CORE value: '{val}'"))
        } else {
            2
        }
    })
}

pub fn pin_thread_to_core() {
    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id()))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}
