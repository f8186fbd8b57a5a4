//! Presenter state for the world-space chat bubble.
//!
//! One `BubblePresenter` resource owns the currently displayed bubble/text
//! pair and whatever submission is still loading. Starting a new submission
//! replaces the in-flight phase wholesale, so a stale load can never attach
//! after a newer one: the last submission always wins.
use bevy::{prelude::*, text::Font};

/// Where the active submission is in its load/attach sequence.
#[derive(Debug, Default)]
pub enum PresenterPhase {
    /// No submission in flight.
    #[default]
    Empty,
    /// Waiting for the bubble scene asset.
    LoadingBubble(PendingBubble),
    /// Bubble attached; waiting for the font asset.
    LoadingText(PendingText),
    /// Bubble and text both attached.
    Displayed,
}

impl PresenterPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::LoadingBubble(_) => "loading-bubble",
            Self::LoadingText(_) => "loading-text",
            Self::Displayed => "displayed",
        }
    }
}

/// Submission data carried while the bubble scene loads.
#[derive(Debug, Clone)]
pub struct PendingBubble {
    pub submission: u64,
    pub message_chars: usize,
    pub lines: Vec<String>,
    pub scene: Handle<Scene>,
}

/// Submission data carried while the font loads.
#[derive(Debug, Clone)]
pub struct PendingText {
    pub submission: u64,
    pub lines: Vec<String>,
    pub font: Handle<Font>,
    pub bubble_transform: Transform,
}

/// Owner of the at-most-one bubble/text pair.
#[derive(Resource, Debug, Default)]
pub struct BubblePresenter {
    phase: PresenterPhase,
    current_bubble: Option<Entity>,
    current_text: Option<Entity>,
    submissions: u64,
}

impl BubblePresenter {
    pub fn phase(&self) -> &PresenterPhase {
        &self.phase
    }

    pub fn current_bubble(&self) -> Option<Entity> {
        self.current_bubble
    }

    pub fn current_text(&self) -> Option<Entity> {
        self.current_text
    }

    /// Starts a new submission: supersedes any in-flight load and hands back
    /// the previously attached nodes so the caller can despawn them.
    pub fn begin(
        &mut self,
        message_chars: usize,
        lines: Vec<String>,
        scene: Handle<Scene>,
    ) -> (u64, Vec<Entity>) {
        self.submissions += 1;
        let submission = self.submissions;

        let stale: Vec<Entity> = self
            .current_bubble
            .take()
            .into_iter()
            .chain(self.current_text.take())
            .collect();

        self.phase = PresenterPhase::LoadingBubble(PendingBubble {
            submission,
            message_chars,
            lines,
            scene,
        });

        (submission, stale)
    }

    /// Records the attached bubble node and moves on to the font load.
    pub fn bubble_attached(&mut self, bubble: Entity, font: Handle<Font>, transform: Transform) {
        let PresenterPhase::LoadingBubble(pending) = std::mem::take(&mut self.phase) else {
            warn!("bubble_attached called outside LoadingBubble; ignoring");
            return;
        };

        self.current_bubble = Some(bubble);
        self.phase = PresenterPhase::LoadingText(PendingText {
            submission: pending.submission,
            lines: pending.lines,
            font,
            bubble_transform: transform,
        });
    }

    /// Records the attached text node, completing the presentation.
    pub fn text_attached(&mut self, text: Entity) {
        if !matches!(self.phase, PresenterPhase::LoadingText(_)) {
            warn!("text_attached called outside LoadingText; ignoring");
            return;
        }
        self.current_text = Some(text);
        self.phase = PresenterPhase::Displayed;
    }

    /// Abandons the bubble load; nothing was attached for this submission.
    pub fn fail_bubble(&mut self) {
        self.phase = PresenterPhase::Empty;
    }

    /// Abandons the font load but keeps the already attached bubble.
    pub fn fail_text(&mut self) {
        self.phase = PresenterPhase::Displayed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_entities(world: &mut World, count: usize) -> Vec<Entity> {
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn full_lifecycle_walks_every_phase() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 2);
        let mut presenter = BubblePresenter::default();
        assert_eq!(presenter.phase().name(), "empty");

        let (submission, stale) =
            presenter.begin(9, vec!["the quick".into()], Handle::default());
        assert_eq!(submission, 1);
        assert!(stale.is_empty());
        assert_eq!(presenter.phase().name(), "loading-bubble");

        presenter.bubble_attached(entities[0], Handle::default(), Transform::IDENTITY);
        assert_eq!(presenter.phase().name(), "loading-text");
        assert_eq!(presenter.current_bubble(), Some(entities[0]));

        presenter.text_attached(entities[1]);
        assert_eq!(presenter.phase().name(), "displayed");
        assert_eq!(presenter.current_text(), Some(entities[1]));
    }

    #[test]
    fn new_submission_hands_back_the_displayed_pair() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 2);
        let mut presenter = BubblePresenter::default();

        presenter.begin(5, vec!["hello".into()], Handle::default());
        presenter.bubble_attached(entities[0], Handle::default(), Transform::IDENTITY);
        presenter.text_attached(entities[1]);

        let (submission, stale) = presenter.begin(3, vec!["bye".into()], Handle::default());
        assert_eq!(submission, 2);
        assert_eq!(stale, entities);
        assert_eq!(presenter.current_bubble(), None);
        assert_eq!(presenter.current_text(), None);
    }

    #[test]
    fn rapid_resubmission_supersedes_the_inflight_load() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 2);
        let mut presenter = BubblePresenter::default();

        // First submission never gets past the bubble load.
        presenter.begin(5, vec!["first".into()], Handle::default());
        let (second, stale) = presenter.begin(6, vec!["second".into()], Handle::default());
        assert_eq!(second, 2);
        assert!(stale.is_empty());

        // Only the second submission's data is still pending.
        let PresenterPhase::LoadingBubble(pending) = presenter.phase() else {
            panic!("expected a pending bubble load");
        };
        assert_eq!(pending.submission, 2);
        assert_eq!(pending.lines, vec!["second".to_string()]);

        // Settling the second submission leaves exactly one tracked pair.
        presenter.bubble_attached(entities[0], Handle::default(), Transform::IDENTITY);
        presenter.text_attached(entities[1]);
        assert_eq!(presenter.current_bubble(), Some(entities[0]));
        assert_eq!(presenter.current_text(), Some(entities[1]));
    }

    #[test]
    fn bubble_failure_returns_to_empty() {
        let mut presenter = BubblePresenter::default();
        presenter.begin(5, vec!["hello".into()], Handle::default());
        presenter.fail_bubble();
        assert_eq!(presenter.phase().name(), "empty");
        assert_eq!(presenter.current_bubble(), None);
    }

    #[test]
    fn font_failure_keeps_the_attached_bubble() {
        let mut world = World::new();
        let bubble = world.spawn_empty().id();
        let mut presenter = BubblePresenter::default();

        presenter.begin(5, vec!["hello".into()], Handle::default());
        presenter.bubble_attached(bubble, Handle::default(), Transform::IDENTITY);
        presenter.fail_text();

        assert_eq!(presenter.phase().name(), "displayed");
        assert_eq!(presenter.current_bubble(), Some(bubble));
        assert_eq!(presenter.current_text(), None);
    }

    #[test]
    fn out_of_order_attach_calls_are_ignored() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut presenter = BubblePresenter::default();

        presenter.text_attached(entity);
        assert_eq!(presenter.phase().name(), "empty");
        assert_eq!(presenter.current_text(), None);

        presenter.bubble_attached(entity, Handle::default(), Transform::IDENTITY);
        assert_eq!(presenter.phase().name(), "empty");
        assert_eq!(presenter.current_bubble(), None);
    }
}
