// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Deferred task processing.
//!
//! Some state changes must not take effect until the tick that requested them
//! has fully completed, otherwise the input pulse that caused them could be
//! consumed a second time by whatever they enable. Such changes are scheduled
//! here as closures and run once, in scheduling order, when the owner drains
//! the queue at the end of a tick.
//!
//! Tasks only receive the state they are scheduled against, never the owner
//! itself. A task must check that whatever it targets still exists before
//! acting, since the owner may have torn it down in the meantime.

use log::trace;

/// A unit of work to run after the current tick.
pub type DeferredTask<T> = Box<dyn FnOnce(&mut T)>;

pub struct DeferredTasks<T> {
    pending: Vec<DeferredTask<T>>,
}

impl<T> Default for DeferredTasks<T> {
    fn default() -> Self {
        Self { pending: vec![] }
    }
}

impl<T> DeferredTasks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: impl FnOnce(&mut T) + 'static) {
        self.pending.push(Box::new(task));
    }

    /// Runs every task that was pending when the call started.
    ///
    /// The queue is swapped out first, so tasks scheduled while draining wait
    /// for the next call.
    pub fn run_pending(&mut self, state: &mut T) -> usize {
        let tasks = std::mem::take(&mut self.pending);
        let count = tasks.len();
        for task in tasks {
            task(state);
        }
        if count > 0 {
            trace!("ran {} deferred task(s)", count);
        }
        count
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_run_once_in_scheduling_order() {
        let mut tasks = DeferredTasks::<Vec<u32>>::new();
        tasks.schedule(|log| log.push(1));
        tasks.schedule(|log| log.push(2));

        let mut log = vec![];
        assert_eq!(tasks.run_pending(&mut log), 2);
        assert_eq!(tasks.run_pending(&mut log), 0);

        assert_eq!(log, vec![1, 2]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn cancelled_tasks_never_run() {
        let mut tasks = DeferredTasks::<Vec<u32>>::new();
        tasks.schedule(|log| log.push(1));
        assert_eq!(tasks.len(), 1);

        tasks.cancel_all();

        let mut log = vec![];
        tasks.run_pending(&mut log);
        assert!(log.is_empty());
    }
}
