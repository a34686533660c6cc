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

//! Spoken feedback stand-in.
//!
//! Keeps the last few cues so the status line can show what a screen reader
//! would be saying. A new cue interrupts the previous one, like the single
//! global audio event of the game.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use echomenu::{FeedbackEvent, FeedbackSink, FocusTarget, focus::FocusRegistry};
use log::info;

const MAX_CUES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Cue {
    pub(crate) event: FeedbackEvent,
    pub(crate) source: Option<FocusTarget>,
    pub(crate) interrupted: bool,
}

impl Cue {
    /// What a screen reader would say for this cue.
    pub(crate) fn describe(&self, registry: Option<&FocusRegistry>) -> String {
        let label = match (self.source, registry) {
            (Some(source), Some(registry)) => registry.label(source),
            _ => "",
        };
        match &self.event {
            FeedbackEvent::MenuOpen => "Menu opened".to_string(),
            FeedbackEvent::MenuClose => "Menu closed".to_string(),
            FeedbackEvent::SubWindowOpen(id) => format!("{} window", id),
            FeedbackEvent::Focus => label.to_string(),
            FeedbackEvent::ReturnFocus => format!("{}, top", label),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Announcer {
    cues: VecDeque<Cue>,
}

impl Announcer {
    pub(crate) fn latest(&self) -> Option<&Cue> {
        self.cues.back()
    }

    pub(crate) fn cues(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter()
    }
}

#[derive(Clone, Default)]
pub(crate) struct SharedAnnouncer(pub(crate) Rc<RefCell<Announcer>>);

impl FeedbackSink for SharedAnnouncer {
    fn notify(&mut self, event: FeedbackEvent, source: Option<FocusTarget>) {
        info!("cue {:?} from {:?}", event, source);
        let mut announcer = self.0.borrow_mut();
        if announcer.cues.len() == MAX_CUES {
            announcer.cues.pop_front();
        }
        announcer.cues.push_back(Cue {
            event,
            source,
            interrupted: false,
        });
    }

    fn stop_current(&mut self) {
        if let Some(cue) = self.0.borrow_mut().cues.back_mut() {
            cue.interrupted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_most_recent_cues() {
        let mut announcer = SharedAnnouncer::default();
        for _ in 0..MAX_CUES {
            announcer.notify(FeedbackEvent::Focus, None);
        }
        announcer.notify(FeedbackEvent::MenuClose, None);

        let announcer = announcer.0.borrow();
        assert_eq!(announcer.cues().count(), MAX_CUES);
        assert_eq!(
            announcer.latest().map(|cue| cue.event.clone()),
            Some(FeedbackEvent::MenuClose)
        );
    }

    #[test]
    fn stopping_marks_the_playing_cue() {
        let mut announcer = SharedAnnouncer::default();
        announcer.stop_current();
        announcer.notify(FeedbackEvent::MenuOpen, None);
        announcer.stop_current();

        assert!(announcer.0.borrow().latest().is_some_and(|cue| cue.interrupted));
    }

    #[test]
    fn cues_read_their_target_label() {
        let mut registry = FocusRegistry::new();
        let panel = registry.add_panel("audio");
        let master = registry.register(panel, "Master volume", true);

        let cue = Cue {
            event: FeedbackEvent::ReturnFocus,
            source: Some(master),
            interrupted: false,
        };

        assert_eq!(cue.describe(Some(&registry)), "Master volume, top");
        assert_eq!(cue.describe(None), ", top");
    }
}
