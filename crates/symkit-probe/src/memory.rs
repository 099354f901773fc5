//! System memory readings via sysinfo.

use symkit_core::MemoryReading;
use sysinfo::System;

/// Current memory figures. None when the platform reports no total,
/// which some containers and exotic targets do.
pub fn memory_reading() -> Option<MemoryReading> {
    let system = System::new_all();
    let total = system.total_memory();
    if total == 0 {
        return None;
    }
    Some(MemoryReading {
        total_bytes: total,
        available_bytes: system.available_memory(),
    })
}
