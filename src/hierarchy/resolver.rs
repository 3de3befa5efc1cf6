use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Level;

/// One selectable record of a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LevelOption {
    pub id: i32,
    /// Id of the record one level up, `None` for roots and orphans
    pub parent_id: Option<i32>,
    pub name: String,
}

/// Full option list of one level.
///
/// A resolver input is an ordered slice of these; the first entry is the root and its
/// options are never narrowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LevelConfig {
    pub level: Level,
    pub options: Vec<LevelOption>,
}

/// Selected record id per level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections(BTreeMap<Level, i32>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: Level) -> Option<i32> {
        self.0.get(&level).copied()
    }

    /// Sets or, with `None`, clears the selection of `level`.
    pub fn set(&mut self, level: Level, id: Option<i32>) {
        match id {
            Some(id) => self.0.insert(level, id),
            None => self.0.remove(&level),
        };
    }

    /// Builder-style [`Selections::set`].
    pub fn with(mut self, level: Level, id: Option<i32>) -> Self {
        self.set(level, id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Level, i32)> for Selections {
    fn from_iter<I: IntoIterator<Item = (Level, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolved state of one level's selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedLevel {
    pub level: Level,
    /// Options narrowed to the children of the selection one level up
    pub options: Vec<LevelOption>,
    /// `false` when the level above has no selection
    pub enabled: bool,
    /// Selection after clearing, always one of `options`
    pub selected: Option<i32>,
}

/// Output of [`resolve_children`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Resolution {
    pub levels: Vec<ResolvedLevel>,
    /// Levels whose requested selection was dropped, top-down
    pub cleared: Vec<Level>,
}

impl Resolution {
    pub fn level(&self, level: Level) -> Option<&ResolvedLevel> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn selected(&self, level: Level) -> Option<i32> {
        self.level(level).and_then(|l| l.selected)
    }

    pub fn options(&self, level: Level) -> &[LevelOption] {
        self.level(level).map(|l| l.options.as_slice()).unwrap_or(&[])
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.level(level).is_some_and(|l| l.enabled)
    }

    /// Effective selections, suitable for feeding back into the resolver.
    pub fn selections(&self) -> Selections {
        self.levels
            .iter()
            .filter_map(|l| l.selected.map(|id| (l.level, id)))
            .collect()
    }
}

/// Narrows every level's options to the children of the selection above it.
///
/// Levels are processed top-down in slice order. For each level after the first:
/// - with a selection above, options are exactly those whose `parent_id` equals it;
/// - without one, the level is disabled and has no options.
///
/// A requested selection missing from its level's narrowed options is cleared, which in turn
/// leaves the next level without a parent selection, so clears cascade to every descendant.
/// Records whose stored ancestry is inconsistent are not repaired; they are dropped by the
/// same rule.
pub fn resolve_children(levels: &[LevelConfig], selections: &Selections) -> Resolution {
    let mut resolved = Vec::with_capacity(levels.len());
    let mut cleared = Vec::new();
    let mut parent_selection: Option<i32> = None;

    for (i, config) in levels.iter().enumerate() {
        let (options, enabled) = if i == 0 {
            (config.options.clone(), true)
        } else {
            match parent_selection {
                Some(parent_id) => (
                    config
                        .options
                        .iter()
                        .filter(|o| o.parent_id == Some(parent_id))
                        .cloned()
                        .collect(),
                    true,
                ),
                None => (Vec::new(), false),
            }
        };

        let requested = selections.get(config.level);
        let selected = requested.filter(|id| options.iter().any(|o| o.id == *id));

        if requested.is_some() && selected.is_none() {
            cleared.push(config.level);
        }

        parent_selection = selected;
        resolved.push(ResolvedLevel {
            level: config.level,
            options,
            enabled,
            selected,
        });
    }

    Resolution {
        levels: resolved,
        cleared,
    }
}

/// Stateful cascading selector over a fixed set of option lists.
///
/// Holds the full lists and the current effective selections; every change goes through
/// [`resolve_children`] so stale descendants are dropped immediately.
#[derive(Clone, Debug)]
pub struct Cascade {
    levels: Vec<LevelConfig>,
    selections: Selections,
}

impl Cascade {
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        Self {
            levels,
            selections: Selections::new(),
        }
    }

    /// Starts from existing selections, e.g. a stored record being edited. Inconsistent
    /// values are dropped right away.
    pub fn with_selections(levels: Vec<LevelConfig>, selections: Selections) -> Self {
        let mut cascade = Self::new(levels);
        cascade.selections = resolve_children(&cascade.levels, &selections).selections();
        cascade
    }

    /// Applies a selection change and returns the levels it cleared.
    pub fn select(&mut self, level: Level, id: Option<i32>) -> Vec<Level> {
        let mut requested = self.selections.clone();
        requested.set(level, id);

        let resolution = resolve_children(&self.levels, &requested);
        self.selections = resolution.selections();
        resolution.cleared
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn resolution(&self) -> Resolution {
        resolve_children(&self.levels, &self.selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: i32, parent_id: Option<i32>) -> LevelOption {
        LevelOption {
            id,
            parent_id,
            name: format!("Option {}", id),
        }
    }

    /// Two states, each with one division; state 1's division has two parliaments.
    fn levels() -> Vec<LevelConfig> {
        vec![
            LevelConfig {
                level: Level::State,
                options: vec![option(1, None), option(2, None)],
            },
            LevelConfig {
                level: Level::Division,
                options: vec![option(10, Some(1)), option(20, Some(2))],
            },
            LevelConfig {
                level: Level::Parliament,
                options: vec![option(100, Some(10)), option(101, Some(10)), option(200, Some(20))],
            },
        ]
    }

    mod resolve_children {
        use super::*;

        /// Expect root options unfiltered and every lower level disabled without selections
        #[test]
        fn disables_levels_below_empty_selection() {
            let resolution = resolve_children(&levels(), &Selections::new());

            assert_eq!(resolution.options(Level::State).len(), 2);
            assert!(resolution.is_enabled(Level::State));
            assert!(!resolution.is_enabled(Level::Division));
            assert!(resolution.options(Level::Division).is_empty());
            assert!(!resolution.is_enabled(Level::Parliament));
            assert!(resolution.cleared.is_empty());
        }

        /// Expect child options to be exactly the children of the selected parent
        #[test]
        fn narrows_options_to_children() {
            let selections = Selections::new()
                .with(Level::State, Some(1))
                .with(Level::Division, Some(10));
            let resolution = resolve_children(&levels(), &selections);

            let divisions: Vec<i32> = resolution
                .options(Level::Division)
                .iter()
                .map(|o| o.id)
                .collect();
            let parliaments: Vec<i32> = resolution
                .options(Level::Parliament)
                .iter()
                .map(|o| o.id)
                .collect();

            assert_eq!(divisions, vec![10]);
            assert_eq!(parliaments, vec![100, 101]);
            assert!(resolution.is_enabled(Level::Parliament));
        }

        /// Expect an inconsistent child selection to be cleared together with its descendants
        #[test]
        fn clears_inconsistent_selection_and_cascades() {
            let selections = Selections::new()
                .with(Level::State, Some(2))
                .with(Level::Division, Some(10))
                .with(Level::Parliament, Some(100));
            let resolution = resolve_children(&levels(), &selections);

            assert_eq!(resolution.selected(Level::State), Some(2));
            assert_eq!(resolution.selected(Level::Division), None);
            assert_eq!(resolution.selected(Level::Parliament), None);
            assert!(!resolution.is_enabled(Level::Parliament));
            assert_eq!(resolution.cleared, vec![Level::Division, Level::Parliament]);
        }

        /// Expect a root selection that is not an option to be cleared
        #[test]
        fn clears_unknown_root_selection() {
            let selections = Selections::new().with(Level::State, Some(99));
            let resolution = resolve_children(&levels(), &selections);

            assert_eq!(resolution.selected(Level::State), None);
            assert_eq!(resolution.cleared, vec![Level::State]);
        }

        /// Expect orphaned options never to appear under any parent
        #[test]
        fn hides_orphans() {
            let mut levels = levels();
            levels[1].options.push(option(30, None));

            let selections = Selections::new().with(Level::State, Some(1));
            let resolution = resolve_children(&levels, &selections);

            assert!(resolution
                .options(Level::Division)
                .iter()
                .all(|o| o.id != 30));
        }
    }

    mod cascade {
        use super::*;

        /// Expect changing the root to clear stale descendants and report them
        #[test]
        fn reselecting_parent_clears_descendants() {
            let mut cascade = Cascade::new(levels());
            cascade.select(Level::State, Some(1));
            cascade.select(Level::Division, Some(10));
            cascade.select(Level::Parliament, Some(101));

            let cleared = cascade.select(Level::State, Some(2));

            assert_eq!(cleared, vec![Level::Division, Level::Parliament]);
            assert_eq!(cascade.selections().get(Level::State), Some(2));
            assert_eq!(cascade.selections().get(Level::Division), None);
        }

        /// Expect clearing a level to clear everything below it
        #[test]
        fn clearing_level_clears_descendants() {
            let mut cascade = Cascade::new(levels());
            cascade.select(Level::State, Some(1));
            cascade.select(Level::Division, Some(10));

            let cleared = cascade.select(Level::State, None);

            assert_eq!(cleared, vec![Level::Division]);
            assert!(cascade.selections().is_empty());
        }

        /// Expect an inconsistent stored chain to be dropped when editing starts
        #[test]
        fn drops_inconsistent_initial_selections() {
            let stored = Selections::new()
                .with(Level::State, Some(1))
                .with(Level::Division, Some(20));
            let cascade = Cascade::with_selections(levels(), stored);

            assert_eq!(cascade.selections().get(Level::State), Some(1));
            assert_eq!(cascade.selections().get(Level::Division), None);
        }
    }
}
