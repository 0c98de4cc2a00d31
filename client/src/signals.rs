//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use std::sync::atomic::{AtomicBool, Ordering};

/// Resize and interrupt notifications.
///
/// Raised from any context, including signal listeners, and consumed by the event loop
/// between waits.
#[derive(Debug, Default)]
pub struct SignalFlags {
    resize: AtomicBool,
    interrupt: AtomicBool,
}

impl SignalFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise_resize(&self) {
        self.resize.store(true, Ordering::Release);
    }

    /// Returns and clears the pending resize notification.
    pub fn take_resize(&self) -> bool {
        self.resize.swap(false, Ordering::AcqRel)
    }

    pub fn raise_interrupt(&self) {
        self.interrupt.store(true, Ordering::Release);
    }

    /// The interrupt flag is sticky: once raised the client is shutting down.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Acquire)
    }
}
