//! Session state: what the user picked, what they typed, what is being drawn

use serde::{Deserialize, Serialize};

use super::reveal::{Reveal, RevealStep};
use crate::error::ParamError;
use crate::params::{GenerationParameters, Layout, RulerColor, ShapeKind};
use crate::settings::Settings;
use crate::ticks::{Segment, generate};

/// Current screen of the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Picking shape and color
    Selection,
    /// Typing length and depth
    Input,
    /// Ticks being revealed
    Drawing,
    /// All ticks revealed, waiting for "Draw Again"
    Done,
}

/// Text field that receives typed digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Length,
    Depth,
}

/// User actions, already hit-tested by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SelectShape(ShapeKind),
    SelectColor(RulerColor),
    /// Selection -> Input
    Continue,
    /// Input -> Selection
    Back,
    /// Click on a text field, or outside both (`None`)
    Focus(Option<Field>),
    /// Typed character for the focused field
    Char(char),
    Backspace,
    /// "Draw" button
    Commit,
    /// "Draw Again" button
    Reset,
}

/// Headless session driving one ruler drawing at a time
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: Phase,
    pub shape: ShapeKind,
    pub color: RulerColor,
    pub length_text: String,
    pub depth_text: String,
    pub active_field: Option<Field>,
    /// Last validation failure, shown under the input fields
    pub error_message: Option<String>,
    layout: Layout,
    reveal_delay_ms: u64,
    params: Option<GenerationParameters>,
    reveal: Option<Reveal>,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: Phase::Selection,
            shape: settings.default_shape,
            color: settings.default_color,
            length_text: settings.default_length.clone(),
            depth_text: settings.default_depth.clone(),
            active_field: None,
            error_message: None,
            layout: settings.layout(),
            reveal_delay_ms: settings.reveal_delay_ms,
            params: None,
            reveal: None,
        }
    }

    /// Parameters of the current drawing (Drawing/Done only)
    pub fn params(&self) -> Option<&GenerationParameters> {
        self.params.as_ref()
    }

    /// Ticks revealed so far
    pub fn drawn(&self) -> &[Segment] {
        self.reveal.as_ref().map(Reveal::drawn).unwrap_or(&[])
    }

    /// Ticks still waiting to be revealed
    pub fn pending_len(&self) -> usize {
        self.reveal.as_ref().map(|r| r.pending().len()).unwrap_or(0)
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Apply one user action. Events that do not belong to the current phase are ignored.
    pub fn handle(&mut self, event: SessionEvent) {
        match (self.phase, event) {
            (Phase::Selection, SessionEvent::SelectShape(shape)) => self.shape = shape,
            (Phase::Selection, SessionEvent::SelectColor(color)) => self.color = color,
            (Phase::Selection, SessionEvent::Continue) => {
                self.error_message = None;
                self.set_phase(Phase::Input);
            }

            (Phase::Input, SessionEvent::Back) => self.set_phase(Phase::Selection),
            (Phase::Input, SessionEvent::Focus(field)) => self.active_field = field,
            (Phase::Input, SessionEvent::Char(c)) => {
                if c.is_ascii_digit() {
                    if let Some(text) = self.active_text_mut() {
                        text.push(c);
                    }
                }
            }
            (Phase::Input, SessionEvent::Backspace) => {
                if let Some(text) = self.active_text_mut() {
                    text.pop();
                }
            }
            (Phase::Input, SessionEvent::Commit) => {
                // Failure is recorded in error_message
                let _ = self.commit();
            }

            (Phase::Done, SessionEvent::Reset) => {
                self.params = None;
                self.reveal = None;
                self.set_phase(Phase::Selection);
            }

            _ => {}
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field? {
            Field::Length => Some(&mut self.length_text),
            Field::Depth => Some(&mut self.depth_text),
        }
    }

    /// Validate the typed fields and start drawing.
    ///
    /// Returns `Ok(false)` without doing anything outside the Input phase.
    /// On failure the session stays in Input with the message stored.
    pub fn commit(&mut self) -> Result<bool, ParamError> {
        if self.phase != Phase::Input {
            return Ok(false);
        }

        match GenerationParameters::parse(self.shape, &self.length_text, &self.depth_text, &self.layout) {
            Ok(params) => {
                let queue = generate(&params);
                log::info!(
                    "Drawing {} ruler: L={}, h={}, {} ticks",
                    params.shape().as_str(),
                    params.length(),
                    params.depth(),
                    queue.len()
                );
                self.error_message = None;
                self.params = Some(params);
                self.reveal = Some(Reveal::new(queue, self.reveal_delay_ms));
                self.set_phase(Phase::Drawing);
                Ok(true)
            }
            Err(err) => {
                log::warn!("Rejected ruler parameters: {}", err);
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Advance the reveal animation to `now_ms`
    pub fn update(&mut self, now_ms: u64) -> Option<Segment> {
        if self.phase != Phase::Drawing {
            return None;
        }
        let step = self.reveal.as_mut()?.advance(now_ms);
        match step {
            RevealStep::Revealed(segment) => Some(segment),
            RevealStep::Waiting => None,
            RevealStep::Finished => {
                self.set_phase(Phase::Done);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_session() -> Session {
        let mut session = Session::new(&Settings::default());
        session.handle(SessionEvent::Continue);
        assert_eq!(session.phase, Phase::Input);
        session
    }

    fn type_into(session: &mut Session, field: Field, text: &str) {
        session.handle(SessionEvent::Focus(Some(field)));
        for _ in 0..8 {
            session.handle(SessionEvent::Backspace);
        }
        for c in text.chars() {
            session.handle(SessionEvent::Char(c));
        }
    }

    #[test]
    fn test_defaults() {
        let session = Session::new(&Settings::default());
        assert_eq!(session.phase, Phase::Selection);
        assert_eq!(session.shape, ShapeKind::Straight);
        assert_eq!(session.color, RulerColor::Yellow);
        assert_eq!(session.length_text, "900");
        assert_eq!(session.depth_text, "7");
    }

    #[test]
    fn test_selection_then_back() {
        let mut session = Session::new(&Settings::default());
        session.handle(SessionEvent::SelectShape(ShapeKind::Triangle));
        session.handle(SessionEvent::SelectColor(RulerColor::Green));
        session.handle(SessionEvent::Continue);
        session.handle(SessionEvent::Back);
        assert_eq!(session.phase, Phase::Selection);
        assert_eq!(session.shape, ShapeKind::Triangle);
        assert_eq!(session.color, RulerColor::Green);
    }

    #[test]
    fn test_typing_accepts_digits_only() {
        let mut session = input_session();
        session.handle(SessionEvent::Focus(Some(Field::Depth)));
        session.handle(SessionEvent::Char('a'));
        session.handle(SessionEvent::Char('-'));
        session.handle(SessionEvent::Char('3'));
        assert_eq!(session.depth_text, "73");

        session.handle(SessionEvent::Backspace);
        session.handle(SessionEvent::Backspace);
        session.handle(SessionEvent::Backspace);
        assert_eq!(session.depth_text, "");
    }

    #[test]
    fn test_typing_without_focus_is_ignored() {
        let mut session = input_session();
        session.handle(SessionEvent::Focus(None));
        session.handle(SessionEvent::Char('5'));
        assert_eq!(session.length_text, "900");
        assert_eq!(session.depth_text, "7");
    }

    #[test]
    fn test_invalid_commit_stays_in_input() {
        let mut session = input_session();
        type_into(&mut session, Field::Depth, "12");
        session.handle(SessionEvent::Commit);
        assert_eq!(session.phase, Phase::Input);
        assert_eq!(
            session.error_message.as_deref(),
            Some("Levels h should be between 1 and 10.")
        );

        type_into(&mut session, Field::Length, "");
        assert_eq!(session.commit(), Err(ParamError::NotANumber));
    }

    #[test]
    fn test_full_draw_cycle() {
        let mut session = input_session();
        type_into(&mut session, Field::Depth, "3");
        session.handle(SessionEvent::Commit);
        assert_eq!(session.phase, Phase::Drawing);
        assert!(session.error_message.is_none());
        assert_eq!(session.pending_len(), 7);

        let mut now = 0;
        while session.phase == Phase::Drawing {
            now += 30;
            session.update(now);
        }
        assert_eq!(session.phase, Phase::Done);
        assert_eq!(session.drawn().len(), 7);
        assert_eq!(session.drawn()[0].length(), 60.0);

        session.handle(SessionEvent::Reset);
        assert_eq!(session.phase, Phase::Selection);
        assert!(session.params().is_none());
        assert!(session.drawn().is_empty());
    }

    #[test]
    fn test_overlong_length_reports_range() {
        let mut session = input_session();
        type_into(&mut session, Field::Length, "");
        for _ in 0..20 {
            session.handle(SessionEvent::Char('9'));
        }
        session.handle(SessionEvent::Commit);
        assert_eq!(session.phase, Phase::Input);
        assert_eq!(
            session.error_message.as_deref(),
            Some("Length L must be between 1 and 1000.")
        );
    }

    #[test]
    fn test_commit_outside_input_is_skipped() {
        let mut session = Session::new(&Settings::default());
        assert_eq!(session.commit(), Ok(false));
        assert_eq!(session.phase, Phase::Selection);

        session.handle(SessionEvent::Continue);
        assert_eq!(session.commit(), Ok(true));
        assert_eq!(session.phase, Phase::Drawing);
        assert_eq!(session.commit(), Ok(false));
    }

    #[test]
    fn test_error_cleared_on_continue() {
        let mut session = input_session();
        type_into(&mut session, Field::Length, "0");
        session.handle(SessionEvent::Commit);
        assert!(session.error_message.is_some());

        session.handle(SessionEvent::Back);
        session.handle(SessionEvent::Continue);
        assert!(session.error_message.is_none());
    }

    #[test]
    fn test_update_outside_drawing_is_noop() {
        let mut session = Session::new(&Settings::default());
        assert!(session.update(1_000).is_none());
        assert_eq!(session.phase, Phase::Selection);
    }
}
