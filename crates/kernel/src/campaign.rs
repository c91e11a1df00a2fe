use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::game::Game;
use crate::level::{Level, LevelError};
use serde::{Deserialize, Serialize};

/// Read-only, ordered supply of levels.
pub trait LevelSource {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&Level>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LevelSource for Vec<Level> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&Level> {
        self.as_slice().get(index)
    }
}

impl LevelSource for [Level] {
    fn len(&self) -> usize {
        <[Level]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&Level> {
        <[Level]>::get(self, index)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("level source is empty")]
    EmptySource,
    #[error("level {index} is missing from the source")]
    MissingLevel { index: usize },
    #[error("level {index} is invalid: {source}")]
    Level {
        index: usize,
        #[source]
        source: LevelError,
    },
}

/// Where the player is in the level sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignState {
    Playing,
    /// The current level is done and another one follows.
    Transition,
    /// The last level is done.
    Won,
}

/// Sequences a [`Game`] through every level of a source.
#[derive(Debug)]
pub struct Campaign<S> {
    source: S,
    index: usize,
    state: CampaignState,
    game: Game,
}

impl<S: LevelSource> Campaign<S> {
    /// Start on the first level of `source`.
    pub fn new(config: GameConfig, source: S) -> Result<Self, CampaignError> {
        let first = source.get(0).ok_or(CampaignError::EmptySource)?.clone();
        let game =
            Game::new(config, first).map_err(|source| CampaignError::Level { index: 0, source })?;
        Ok(Self {
            source,
            index: 0,
            state: CampaignState::Playing,
            game,
        })
    }

    pub fn state(&self) -> CampaignState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Mark the current level done. Ignored unless playing.
    pub fn on_level_complete(&mut self) -> CampaignState {
        if self.state == CampaignState::Playing {
            self.state = if self.index + 1 < self.source.len() {
                CampaignState::Transition
            } else {
                CampaignState::Won
            };
            tracing::info!(index = self.index, state = ?self.state, "level finished");
        }
        self.state
    }

    /// Leave a transition for the following level. Returns false when
    /// there was no transition pending.
    pub fn next_level(&mut self) -> Result<bool, CampaignError> {
        if self.state != CampaignState::Transition {
            return Ok(false);
        }
        self.load(self.index + 1)?;
        Ok(true)
    }

    /// Back to the first level.
    pub fn restart(&mut self) -> Result<(), CampaignError> {
        self.load(0)
    }

    fn load(&mut self, index: usize) -> Result<(), CampaignError> {
        let level = self
            .source
            .get(index)
            .ok_or(CampaignError::MissingLevel { index })?
            .clone();
        self.game
            .load_level(level)
            .map_err(|source| CampaignError::Level { index, source })?;
        self.index = index;
        self.state = CampaignState::Playing;
        Ok(())
    }

    /// Drain the game's events, reacting to level completion.
    pub fn pump(&mut self) -> Vec<GameEvent> {
        let events = self.game.drain_events();
        if events.contains(&GameEvent::LevelComplete) {
            self.on_level_complete();
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindpoint_camera::CameraOrientation;
    use mindpoint_common::{Block, BlockKind, Direction, GridPosition};
    use std::f32::consts::FRAC_PI_2;

    fn hop(id: u32) -> Level {
        let start = GridPosition::new(0, 0, 0);
        let goal = GridPosition::new(0, 0, -1);
        Level {
            id,
            name: format!("hop {id}"),
            description: String::new(),
            quote: None,
            start,
            goal,
            camera: CameraOrientation::new(FRAC_PI_2, FRAC_PI_2, 20.0),
            blocks: vec![
                Block::new(start, BlockKind::Start),
                Block::new(goal, BlockKind::Goal),
            ],
        }
    }

    fn finish(campaign: &mut Campaign<Vec<Level>>) {
        let game = campaign.game_mut();
        assert!(matches!(
            game.press(Direction::Right),
            crate::MoveOutcome::Started { .. }
        ));
        game.tick(0.5);
        game.tick(2.0);
    }

    #[test]
    fn empty_source_is_an_error() {
        let err = Campaign::new(GameConfig::default(), Vec::<Level>::new()).unwrap_err();
        assert!(matches!(err, CampaignError::EmptySource));
    }

    #[test]
    fn invalid_first_level_is_reported_with_index() {
        let mut bad = hop(1);
        bad.blocks.pop();
        let err = Campaign::new(GameConfig::default(), vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            CampaignError::Level {
                index: 0,
                source: LevelError::MissingGoal
            }
        ));
    }

    #[test]
    fn walks_through_levels_to_won() {
        let mut c = Campaign::new(GameConfig::default(), vec![hop(1), hop(2)]).unwrap();
        assert_eq!(c.state(), CampaignState::Playing);
        assert!(!c.next_level().unwrap());

        finish(&mut c);
        let events = c.pump();
        assert!(events.contains(&GameEvent::LevelComplete));
        assert_eq!(c.state(), CampaignState::Transition);

        assert!(c.next_level().unwrap());
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.game().level().id, 2);
        assert_eq!(c.state(), CampaignState::Playing);

        finish(&mut c);
        c.pump();
        assert_eq!(c.state(), CampaignState::Won);
        assert!(!c.next_level().unwrap());

        c.restart().unwrap();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.state(), CampaignState::Playing);
    }

    #[test]
    fn completion_is_ignored_outside_play() {
        let mut c = Campaign::new(GameConfig::default(), vec![hop(1), hop(2)]).unwrap();
        assert_eq!(c.on_level_complete(), CampaignState::Transition);
        assert_eq!(c.on_level_complete(), CampaignState::Transition);
    }

    #[test]
    fn invalid_later_level_keeps_current_game() {
        let mut bad = hop(2);
        bad.start = GridPosition::new(4, 4, 4);
        let mut c = Campaign::new(GameConfig::default(), vec![hop(1), bad]).unwrap();
        c.on_level_complete();
        let err = c.next_level().unwrap_err();
        assert!(matches!(err, CampaignError::Level { index: 1, .. }));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.game().level().id, 1);
    }
}
