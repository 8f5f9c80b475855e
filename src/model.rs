//! Core data models for Candy Island.
//! The level list is a static fixture; all progress shown is mocked.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Not yet reachable; node is non-interactive.
    Locked,
    /// Reachable, not yet completed.
    Available,
    /// Finished at least once; shows earned stars.
    Completed,
}

/// Closed set of glyph identifiers. The presentation layer resolves these to
/// actual glyphs so the data model carries no rendering concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelSymbol {
    Candy,
    Heart,
    Zap,
    Sparkles,
    Crown,
    Gift,
    Trophy,
    Gamepad,
    Lock,
    Star,
}

/// Placement on the map as percentages of the map area, in [0,100].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

// Serialize only: the &'static str fields cannot be deserialized in place,
// and nothing reads levels back in anyway.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameLevel {
    /// Contiguous from 1, matching array order. Adjacent ids are joined by
    /// connector segments; the id is what gets passed to the play callback.
    pub id: u32,
    pub name: &'static str,
    pub symbol: LevelSymbol,
    pub status: LevelStatus,
    /// Earned stars, always <= max_stars; 0 whenever the level is Locked.
    pub stars: u8,
    pub max_stars: u8,
    pub position: MapPosition,
    pub description: &'static str,
}

/// The fixed 8-level island. Progress here is hardcoded demo state, not
/// derived from gameplay.
pub fn island_levels() -> Vec<GameLevel> {
    vec![
        GameLevel {
            id: 1,
            name: "Candy Crush Quest",
            symbol: LevelSymbol::Candy,
            status: LevelStatus::Completed,
            stars: 3,
            max_stars: 3,
            position: MapPosition { x: 15.0, y: 75.0 },
            description: "Match colorful candies to clear the board!",
        },
        GameLevel {
            id: 2,
            name: "Sweet Memory",
            symbol: LevelSymbol::Heart,
            status: LevelStatus::Completed,
            stars: 2,
            max_stars: 3,
            position: MapPosition { x: 35.0, y: 60.0 },
            description: "Test your memory with candy pairs!",
        },
        GameLevel {
            id: 3,
            name: "Lightning Lollipops",
            symbol: LevelSymbol::Zap,
            status: LevelStatus::Available,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 55.0, y: 45.0 },
            description: "Fast-paced candy collection challenge!",
        },
        GameLevel {
            id: 4,
            name: "Sugar Rush Race",
            symbol: LevelSymbol::Sparkles,
            status: LevelStatus::Available,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 75.0, y: 30.0 },
            description: "Race through candy obstacles!",
        },
        GameLevel {
            id: 5,
            name: "Gummy Bear Kingdom",
            symbol: LevelSymbol::Crown,
            status: LevelStatus::Locked,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 80.0, y: 55.0 },
            description: "Rule the gummy bear kingdom!",
        },
        GameLevel {
            id: 6,
            name: "Chocolate Factory",
            symbol: LevelSymbol::Gift,
            status: LevelStatus::Locked,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 65.0, y: 75.0 },
            description: "Manage your own chocolate factory!",
        },
        GameLevel {
            id: 7,
            name: "Rainbow Bridge",
            symbol: LevelSymbol::Trophy,
            status: LevelStatus::Locked,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 45.0, y: 85.0 },
            description: "Cross the magical rainbow bridge!",
        },
        GameLevel {
            id: 8,
            name: "Candy Castle",
            symbol: LevelSymbol::Gamepad,
            status: LevelStatus::Locked,
            stars: 0,
            max_stars: 3,
            position: MapPosition { x: 25.0, y: 85.0 },
            description: "Final challenge at the Candy Castle!",
        },
    ]
}

// ---------------- Derived render state -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorStyle {
    /// Solid stroke, completed colorway.
    Solid,
    /// Dashed stroke, locked colorway.
    Dashed,
}

/// One line segment joining two adjacent level nodes, endpoints in map
/// percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorSegment {
    pub from: MapPosition,
    pub to: MapPosition,
    pub style: ConnectorStyle,
}

/// Segments joining each level to the next, in level order (n-1 segments).
///
/// A segment is Solid iff its lower-indexed endpoint is Completed; the later
/// endpoint never influences the style. That asymmetry matches the shipped
/// behavior and is kept as-is.
pub fn connector_segments(levels: &[GameLevel]) -> Vec<ConnectorSegment> {
    levels
        .windows(2)
        .map(|pair| ConnectorSegment {
            from: pair[0].position,
            to: pair[1].position,
            style: if pair[0].status == LevelStatus::Completed {
                ConnectorStyle::Solid
            } else {
                ConnectorStyle::Dashed
            },
        })
        .collect()
}

/// Everything a node needs from the model to draw itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRenderState {
    /// Locked nodes are disabled and cannot be selected.
    pub interactive: bool,
    /// Lock glyph when locked, the level's own symbol otherwise.
    pub symbol: LevelSymbol,
    pub status: LevelStatus,
    /// Star row renders only for completed levels.
    pub star_row: Option<StarRow>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRow {
    pub filled: u8,
    pub slots: u8,
}

pub fn node_render_state(level: &GameLevel) -> NodeRenderState {
    let locked = level.status == LevelStatus::Locked;
    NodeRenderState {
        interactive: !locked,
        symbol: if locked { LevelSymbol::Lock } else { level.symbol },
        status: level.status,
        star_row: (level.status == LevelStatus::Completed).then_some(StarRow {
            filled: level.stars,
            slots: level.max_stars,
        }),
    }
}

// ---------------- Aggregate progress -----------------

/// Island-wide totals, recomputed from the level list on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapProgress {
    pub total_stars: u32,
    pub max_total_stars: u32,
    pub completed_count: u32,
    pub total_levels: u32,
    /// completed_count / total_levels * 100, in [0,100].
    pub progress_percentage: f64,
}

impl MapProgress {
    pub fn from_levels(levels: &[GameLevel]) -> Self {
        let total_stars = levels.iter().map(|l| l.stars as u32).sum();
        let max_total_stars = levels.iter().map(|l| l.max_stars as u32).sum();
        let completed_count = levels
            .iter()
            .filter(|l| l.status == LevelStatus::Completed)
            .count() as u32;
        let total_levels = levels.len() as u32;
        let progress_percentage = if total_levels > 0 {
            completed_count as f64 / total_levels as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_stars,
            max_total_stars,
            completed_count,
            total_levels,
            progress_percentage,
        }
    }
}

// ---------------- Selection reducer -----------------

/// Which level is focused for the detail card, or none. Lives in a reducer
/// local to the map view, so it resets whenever the map remounts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapSelection {
    pub focused: Option<GameLevel>,
}

#[derive(Clone, Debug)]
pub enum SelectionAction {
    /// Focus a level. Silent no-op when the level is Locked; re-selecting a
    /// different level replaces the focus directly (last write wins).
    Select(GameLevel),
    /// Drop the focus unconditionally.
    Clear,
}

impl Reducible for MapSelection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SelectionAction::Select(level) => {
                if level.status == LevelStatus::Locked {
                    return self;
                }
                Rc::new(MapSelection {
                    focused: Some(level),
                })
            }
            SelectionAction::Clear => Rc::new(MapSelection::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: u32, status: LevelStatus, stars: u8) -> GameLevel {
        GameLevel {
            id,
            name: "test",
            symbol: LevelSymbol::Candy,
            status,
            stars,
            max_stars: 3,
            position: MapPosition {
                x: id as f64 * 10.0,
                y: 50.0,
            },
            description: "test level",
        }
    }

    #[test]
    fn connectors_join_adjacent_levels() {
        let levels = island_levels();
        let segs = connector_segments(&levels);
        assert_eq!(segs.len(), levels.len() - 1);
        for (i, seg) in segs.iter().enumerate() {
            assert_eq!(seg.from, levels[i].position);
            assert_eq!(seg.to, levels[i + 1].position);
        }
    }

    #[test]
    fn connector_style_follows_earlier_endpoint_only() {
        let levels = vec![
            level(1, LevelStatus::Completed, 3),
            level(2, LevelStatus::Locked, 0),
            level(3, LevelStatus::Completed, 2),
        ];
        let segs = connector_segments(&levels);
        // Completed -> Locked is still solid; Locked -> Completed is dashed.
        assert_eq!(segs[0].style, ConnectorStyle::Solid);
        assert_eq!(segs[1].style, ConnectorStyle::Dashed);
    }

    #[test]
    fn connectors_empty_for_single_level() {
        let levels = vec![level(1, LevelStatus::Available, 0)];
        assert!(connector_segments(&levels).is_empty());
    }

    #[test]
    fn locked_node_shows_lock_and_is_inert() {
        let state = node_render_state(&level(5, LevelStatus::Locked, 0));
        assert!(!state.interactive);
        assert_eq!(state.symbol, LevelSymbol::Lock);
        assert_eq!(state.star_row, None);
    }

    #[test]
    fn available_node_keeps_own_symbol_without_stars() {
        let state = node_render_state(&level(3, LevelStatus::Available, 0));
        assert!(state.interactive);
        assert_eq!(state.symbol, LevelSymbol::Candy);
        assert_eq!(state.star_row, None);
    }

    #[test]
    fn completed_node_renders_star_row() {
        let state = node_render_state(&level(2, LevelStatus::Completed, 2));
        assert!(state.interactive);
        assert_eq!(state.star_row, Some(StarRow { filled: 2, slots: 3 }));
    }

    #[test]
    fn progress_over_fixture() {
        let p = MapProgress::from_levels(&island_levels());
        assert_eq!(p.total_stars, 5);
        assert_eq!(p.max_total_stars, 24);
        assert_eq!(p.completed_count, 2);
        assert_eq!(p.total_levels, 8);
        assert_eq!(p.progress_percentage, 25.0);
    }

    #[test]
    fn progress_over_empty_list_is_zero() {
        let p = MapProgress::from_levels(&[]);
        assert_eq!(p.progress_percentage, 0.0);
        assert_eq!(p.total_stars, 0);
    }

    #[test]
    fn selecting_locked_level_is_a_no_op() {
        let sel = Rc::new(MapSelection::default());
        let sel = sel.reduce(SelectionAction::Select(level(5, LevelStatus::Locked, 0)));
        assert_eq!(sel.focused, None);
    }

    #[test]
    fn selecting_valid_level_focuses_it_last_write_wins() {
        let a = level(1, LevelStatus::Completed, 3);
        let b = level(3, LevelStatus::Available, 0);
        let sel = Rc::new(MapSelection::default());
        let sel = sel.reduce(SelectionAction::Select(a));
        let sel = sel.reduce(SelectionAction::Select(b.clone()));
        assert_eq!(sel.focused, Some(b));
    }

    #[test]
    fn locked_select_keeps_existing_focus() {
        let a = level(1, LevelStatus::Completed, 3);
        let sel = Rc::new(MapSelection::default());
        let sel = sel.reduce(SelectionAction::Select(a.clone()));
        let sel = sel.reduce(SelectionAction::Select(level(5, LevelStatus::Locked, 0)));
        assert_eq!(sel.focused, Some(a));
    }

    #[test]
    fn clear_is_unconditional_and_idempotent() {
        let sel = Rc::new(MapSelection::default());
        let sel = sel.reduce(SelectionAction::Select(level(1, LevelStatus::Completed, 3)));
        let sel = sel.reduce(SelectionAction::Clear);
        assert_eq!(sel.focused, None);
        let sel = sel.reduce(SelectionAction::Clear);
        assert_eq!(sel.focused, None);
    }

    #[test]
    fn fixture_satisfies_invariants() {
        let levels = island_levels();
        for (i, l) in levels.iter().enumerate() {
            assert_eq!(l.id, i as u32 + 1);
            assert!(l.stars <= l.max_stars);
            if l.status == LevelStatus::Locked {
                assert_eq!(l.stars, 0);
            }
            assert!((0.0..=100.0).contains(&l.position.x));
            assert!((0.0..=100.0).contains(&l.position.y));
        }
    }
}
